//! The validation engine.
//!
//! [`Validator::check`] runs every rule against a timesheet in a fixed order
//! and collects what they report. Rules never short-circuit each other, so a
//! single call yields every finding for the sheet. The order is part of the
//! result: violations appear grouped by rule, in this sequence:
//!
//! 1. monthly working time
//! 2. daily working time
//! 3. mandatory pauses
//! 4. permitted hours of day
//! 5. Sundays and public holidays
//! 6. overlapping entries
//! 7. row count
//! 8. department name

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    Violation, check_daily_bounds, check_daily_time, check_department_name, check_overlaps,
    check_pauses, check_row_count, check_total_time, check_working_days,
};
use crate::config::RuleSet;
use crate::error::FatalValidationError;
use crate::holiday::HolidayProvider;
use crate::models::TimeSheet;

/// The overall outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// No rule reported anything.
    Valid,
    /// At least one violation was found.
    Invalid,
}

/// The verdict and every violation found by one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    verdict: Verdict,
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Builds a report; the verdict follows from whether `violations` is empty.
    pub fn new(violations: Vec<Violation>) -> Self {
        let verdict = if violations.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Invalid
        };
        Self {
            verdict,
            violations,
        }
    }

    /// The overall verdict.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns true if no violation was found.
    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }

    /// All violations, in rule order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the report, returning its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Checks timesheets against the rules of a [`RuleSet`].
///
/// The holiday provider is injected; pass a
/// [`HolidayCalendar`](crate::holiday::HolidayCalendar) in production so the
/// year is fetched once and reused across checks.
///
/// # Example
///
/// ```
/// use milog_engine::config::RuleSet;
/// use milog_engine::holiday::FixedHolidays;
/// use milog_engine::models::{Duration, Employee, Profession, TimeSheet, WorkingArea, YearMonth};
/// use milog_engine::validation::{Validator, Verdict};
/// use rust_decimal::Decimal;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let sheet = TimeSheet::new(
///     Employee::new("Max Mustermann", 1234567),
///     Profession::new("", WorkingArea::Ub, Duration::hm(40, 0), Decimal::new(12, 0)),
///     YearMonth::new(2019, 11).unwrap(),
///     vec![],
///     Duration::ZERO,
///     Duration::ZERO,
/// )
/// .unwrap();
///
/// let validator = Validator::new(RuleSet::default(), 20, FixedHolidays::none());
/// let report = validator.check(&sheet).await.unwrap();
/// assert_eq!(report.verdict(), Verdict::Invalid);
/// assert_eq!(report.violations().len(), 1);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Validator<H> {
    rules: RuleSet,
    max_rows: usize,
    holidays: H,
}

impl<H: HolidayProvider> Validator<H> {
    /// Creates a validator.
    ///
    /// `max_rows` is the row limit of the intended export format, see
    /// [`RuleSet::max_rows`].
    pub fn new(rules: RuleSet, max_rows: usize, holidays: H) -> Self {
        Self {
            rules,
            max_rows,
            holidays,
        }
    }

    /// The rule parameters in use.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The holiday provider in use.
    pub fn holidays(&self) -> &H {
        &self.holidays
    }

    /// Runs every rule against `sheet`.
    ///
    /// # Errors
    ///
    /// Returns [`FatalValidationError`] if the holiday provider cannot answer
    /// for some entry date. No partial report is returned in that case.
    pub async fn check(&self, sheet: &TimeSheet) -> Result<ValidationReport, FatalValidationError> {
        let started = Instant::now();
        debug!(
            employee_id = sheet.employee().id,
            month = %sheet.year_month(),
            entries = sheet.entries().len(),
            "Checking timesheet"
        );

        let mut violations = Vec::new();
        violations.extend(check_total_time(sheet));
        violations.extend(check_daily_time(sheet, self.rules.daily_max_working_time));
        violations.extend(check_pauses(sheet, &self.rules.pause_rules));
        violations.extend(check_daily_bounds(
            sheet,
            self.rules.earliest_start,
            self.rules.latest_end,
        ));
        violations.extend(check_working_days(sheet, &self.holidays).await?);
        violations.extend(check_overlaps(sheet));
        violations.extend(check_row_count(sheet, self.max_rows));
        violations.extend(check_department_name(sheet));

        let report = ValidationReport::new(violations);
        info!(
            employee_id = sheet.employee().id,
            month = %sheet.year_month(),
            verdict = ?report.verdict(),
            violations = report.violations().len(),
            duration_us = started.elapsed().as_micros(),
            "Timesheet check completed"
        );
        Ok(report)
    }
}
