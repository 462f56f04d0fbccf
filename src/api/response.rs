//! Response types for the compliance check API.
//!
//! This module defines the success body of `/check`, the error response
//! structures, and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, FatalValidationError};
use crate::messages::MessageCatalog;
use crate::validation::{ValidationReport, Verdict, Violation, ViolationArgument, ViolationKind};

/// Success body of the `/check` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    /// Identifier of this check, equal to the request's correlation id.
    pub check_id: Uuid,
    /// When the check ran.
    pub checked_at: DateTime<Utc>,
    /// The overall verdict.
    pub verdict: Verdict,
    /// Every violation found, in rule order.
    pub violations: Vec<ViolationResponse>,
}

/// A violation with its typed arguments and rendered message.
#[derive(Debug, Clone, Serialize)]
pub struct ViolationResponse {
    /// The violation kind code.
    pub kind: ViolationKind,
    /// The typed arguments, in placeholder order.
    pub arguments: Vec<ViolationArgument>,
    /// The message rendered by the requested catalog.
    pub message: String,
}

impl ViolationResponse {
    fn render(violation: &Violation, catalog: &MessageCatalog) -> Self {
        Self {
            kind: violation.kind(),
            arguments: violation.arguments(),
            message: catalog.render(violation),
        }
    }
}

impl CheckResponse {
    /// Builds the response body for a finished check.
    pub fn from_report(
        check_id: Uuid,
        report: &ValidationReport,
        catalog: &MessageCatalog,
    ) -> Self {
        Self {
            check_id,
            checked_at: Utc::now(),
            verdict: report.verdict(),
            violations: report
                .violations()
                .iter()
                .map(|violation| ViolationResponse::render(violation, catalog))
                .collect(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a holiday source unavailable error response.
    pub fn holiday_source_unavailable(cause: impl Into<String>) -> Self {
        Self::with_details(
            "HOLIDAY_SOURCE_UNAVAILABLE",
            "Public holidays could not be determined; the check was aborted",
            cause,
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code) = match error {
            EngineError::InvalidClockTime { .. } => (StatusCode::BAD_REQUEST, "INVALID_CLOCK_TIME"),
            EngineError::DurationParse { .. } => (StatusCode::BAD_REQUEST, "INVALID_DURATION"),
            EngineError::InvalidEntry { .. } => (StatusCode::BAD_REQUEST, "INVALID_ENTRY"),
            EngineError::InvalidYearMonth { .. } => (StatusCode::BAD_REQUEST, "INVALID_MONTH"),
            EngineError::InvalidTimeSheet { .. } => (StatusCode::BAD_REQUEST, "INVALID_TIMESHEET"),
            EngineError::UnknownLanguage { .. } => (StatusCode::BAD_REQUEST, "UNKNOWN_LANGUAGE"),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, message),
        }
    }
}

impl From<FatalValidationError> for ApiErrorResponse {
    fn from(error: FatalValidationError) -> Self {
        ApiErrorResponse {
            status: StatusCode::SERVICE_UNAVAILABLE,
            error: ApiError::holiday_source_unavailable(error.to_string()),
        }
    }
}
