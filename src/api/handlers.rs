//! HTTP request handlers for the compliance check API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::DEFAULT_LANGUAGE;
use crate::validation::Validator;

use super::request::CheckRequest;
use super::response::{ApiError, ApiErrorResponse, CheckResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/check", post(check_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: impl Into<ApiErrorResponse>) -> Response {
    let api_error: ApiErrorResponse = error.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /check endpoint.
///
/// Builds a timesheet from the request, runs every rule against it and
/// returns the verdict with rendered violations.
async fn check_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing check request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let config = state.config();
    let CheckRequest {
        global,
        month,
        export,
        region,
        language,
    } = request;

    let language = language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let catalog = match config.catalog(language) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!(correlation_id = %correlation_id, language, "Unknown language");
            return error_response(err);
        }
    };

    // Convert request documents to the domain timesheet
    let (employee, profession) = global.into_parts();
    let sheet = match month.into_timesheet(employee, profession) {
        Ok(sheet) => sheet,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid timesheet");
            return error_response(err);
        }
    };

    let region = region.unwrap_or_else(|| config.holiday_api().default_region.clone());
    let holidays = state.holiday_calendar(sheet.year_month().year(), &region);
    let rules = config.rules();
    let validator = Validator::new(rules.clone(), rules.max_rows(export), holidays);

    let start_time = Instant::now();
    match validator.check(&sheet).await {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = sheet.employee().id,
                month = %sheet.year_month(),
                region = %region,
                verdict = ?report.verdict(),
                violations = report.violations().len(),
                duration_us = start_time.elapsed().as_micros(),
                "Check completed successfully"
            );
            json_response(
                StatusCode::OK,
                CheckResponse::from_report(correlation_id, &report, catalog),
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Check aborted"
            );
            error_response(err)
        }
    }
}
