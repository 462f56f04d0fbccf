//! Error types for the MiLoG compliance engine.
//!
//! Two families live here. [`EngineError`] covers everything that stops a
//! value from being built in the first place (malformed durations, entries
//! with an end before their start, a timesheet whose transfers do not add up,
//! broken configuration). [`FatalValidationError`] is the one error a running
//! check can end with: the holiday calendar could not answer.
//!
//! Rule violations are not errors at all; see [`crate::validation::Violation`].

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for constructing domain values and loading configuration.
///
/// # Example
///
/// ```
/// use milog_engine::error::EngineError;
///
/// let error = EngineError::DurationParse {
///     input: "8h".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid duration '8h': expected [-]H:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock time fell outside of [00:00, 24:00).
    #[error("Clock time out of range: {minutes} minutes after midnight")]
    InvalidClockTime {
        /// The offending number of minutes after midnight.
        minutes: i64,
    },

    /// A duration or clock time could not be parsed from text.
    #[error("Invalid duration '{input}': expected [-]H:MM")]
    DurationParse {
        /// The text that failed to parse.
        input: String,
    },

    /// An entry was internally inconsistent.
    #[error("Invalid entry on {date}: {message}")]
    InvalidEntry {
        /// The date of the entry.
        date: NaiveDate,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A year/month pair did not name a calendar month.
    #[error("Invalid month {year}-{month}")]
    InvalidYearMonth {
        /// The year.
        year: i32,
        /// The month number that was rejected.
        month: u32,
    },

    /// A timesheet violated one of its construction invariants.
    #[error("Invalid timesheet: {message}")]
    InvalidTimeSheet {
        /// A description of the broken invariant.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot work with.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },

    /// No message catalog is loaded for the requested language.
    #[error("No message catalog for language '{code}'")]
    UnknownLanguage {
        /// The requested language code.
        code: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// A check was aborted because the holiday calendar could not be consulted.
///
/// Continuing without the answer would silently pass dates that may be
/// public holidays, so no partial violation list accompanies this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Holiday source unavailable while checking {date}: {cause}")]
pub struct FatalValidationError {
    /// The entry date whose holiday status could not be determined.
    pub date: NaiveDate,
    /// Description of the underlying failure.
    pub cause: String,
}

impl FatalValidationError {
    /// Wraps the underlying failure for the given entry date.
    pub fn new(date: NaiveDate, cause: &impl std::fmt::Display) -> Self {
        Self {
            date,
            cause: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_invalid_clock_time_displays_minutes() {
        let error = EngineError::InvalidClockTime { minutes: 1440 };
        assert_eq!(
            error.to_string(),
            "Clock time out of range: 1440 minutes after midnight"
        );
    }

    #[test]
    fn test_invalid_entry_displays_date_and_message() {
        let error = EngineError::InvalidEntry {
            date: NaiveDate::from_ymd_opt(2019, 11, 4).unwrap(),
            message: "end before start".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid entry on 2019-11-04: end before start"
        );
    }

    #[test]
    fn test_invalid_year_month_displays_values() {
        let error = EngineError::InvalidYearMonth {
            year: 2019,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid month 2019-13");
    }

    #[test]
    fn test_fatal_error_carries_cause() {
        let date = NaiveDate::from_ymd_opt(2019, 12, 25).unwrap();
        let error = FatalValidationError::new(date, &"connection refused");
        assert_eq!(error.cause, "connection refused");
        assert_eq!(
            error.to_string(),
            "Holiday source unavailable while checking 2019-12-25: connection refused"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<FatalValidationError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_parse_error() -> EngineResult<()> {
            Err(EngineError::DurationParse {
                input: "x".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_parse_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
