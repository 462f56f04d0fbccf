//! Configuration types for the compliance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type has a
//! `Default` carrying the statutory values, so the engine works without any
//! configuration directory at all.

use std::time::Duration as StdDuration;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockTime, Duration};
use crate::validation::{
    DEFAULT_DAILY_MAX_WORKING_TIME, DEFAULT_EARLIEST_START, DEFAULT_LATEST_END, DEFAULT_PAUSE_RULES,
};

/// A mandatory pause: once a day's span reaches `threshold`, at least
/// `required_pause` must have been taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PauseRule {
    /// Span of the working day from which the rule applies (inclusive).
    pub threshold: Duration,
    /// Minimum pause required once the threshold is reached.
    pub required_pause: Duration,
}

impl PauseRule {
    /// Creates a pause rule.
    pub const fn new(threshold: Duration, required_pause: Duration) -> Self {
        Self {
            threshold,
            required_pause,
        }
    }
}

/// The document format a timesheet is exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// LaTeX template output.
    #[default]
    Latex,
    /// PDF form output.
    Pdf,
}

/// Maximum number of entry rows each export format can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RowLimits {
    /// Rows available in the LaTeX template.
    pub latex: usize,
    /// Rows available in the PDF form.
    pub pdf: usize,
}

impl Default for RowLimits {
    fn default() -> Self {
        Self { latex: 20, pdf: 22 }
    }
}

/// The parameters of the compliance rules.
///
/// # Example
///
/// ```
/// use milog_engine::config::{ExportFormat, RuleSet};
/// use milog_engine::models::Duration;
///
/// let rules = RuleSet::default();
/// assert_eq!(rules.daily_max_working_time, Duration::hm(10, 0));
/// assert_eq!(rules.max_rows(ExportFormat::Pdf), 22);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Maximum working time on a single day.
    pub daily_max_working_time: Duration,
    /// Pause table, ascending by threshold.
    pub pause_rules: Vec<PauseRule>,
    /// No entry may start before this time.
    pub earliest_start: ClockTime,
    /// No entry may end after this time.
    pub latest_end: ClockTime,
    /// Row limits per export format.
    pub max_rows: RowLimits,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            daily_max_working_time: DEFAULT_DAILY_MAX_WORKING_TIME,
            pause_rules: DEFAULT_PAUSE_RULES.to_vec(),
            earliest_start: DEFAULT_EARLIEST_START,
            latest_end: DEFAULT_LATEST_END,
            max_rows: RowLimits::default(),
        }
    }
}

impl RuleSet {
    /// Returns the row limit for an export format.
    pub fn max_rows(&self, format: ExportFormat) -> usize {
        match format {
            ExportFormat::Latex => self.max_rows.latex,
            ExportFormat::Pdf => self.max_rows.pdf,
        }
    }

    /// Checks that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the daily maximum is not
    /// positive, the pause table is not strictly ascending or holds negative
    /// values, the day bounds are reversed, or a row limit is zero.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| Err(EngineError::InvalidConfig { message });

        if self.daily_max_working_time <= Duration::ZERO {
            return invalid(format!(
                "daily_max_working_time must be positive, got {}",
                self.daily_max_working_time
            ));
        }

        for rule in &self.pause_rules {
            if rule.threshold.is_negative() || rule.required_pause.is_negative() {
                return invalid(format!(
                    "pause rule {} -> {} must not be negative",
                    rule.threshold, rule.required_pause
                ));
            }
        }
        if let Some(pair) = self
            .pause_rules
            .windows(2)
            .find(|pair| pair[0].threshold >= pair[1].threshold)
        {
            return invalid(format!(
                "pause_rules must be strictly ascending by threshold ({} before {})",
                pair[0].threshold, pair[1].threshold
            ));
        }

        if !self.earliest_start.is_before(self.latest_end) {
            return invalid(format!(
                "earliest_start {} must lie before latest_end {}",
                self.earliest_start, self.latest_end
            ));
        }

        if self.max_rows.latex == 0 || self.max_rows.pdf == 0 {
            return invalid("row limits must be at least 1".to_string());
        }

        Ok(())
    }
}

/// Settings for the remote holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HolidayApiConfig {
    /// Base URL of the holiday API.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Region code used when a request does not name one.
    pub default_region: String,
}

impl Default for HolidayApiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://feiertage-api.de/api/".to_string(),
            timeout_secs: 10,
            default_region: "BW".to_string(),
        }
    }
}

impl HolidayApiConfig {
    /// The request timeout.
    pub fn timeout(&self) -> StdDuration {
        StdDuration::from_secs(self.timeout_secs)
    }
}
