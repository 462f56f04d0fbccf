//! Monthly working time check.
//!
//! The monthly cap is the contractual working time corrected for time
//! carried over from the previous month, time carried into the next month,
//! and vacation taken:
//!
//! ```text
//! corrected_max = max_working_time + succ_transfer - pred_transfer - vacation
//! ```

use tracing::debug;

use super::Violation;
use crate::models::TimeSheet;

/// Reports when worked time exceeds the corrected monthly maximum.
///
/// The violation carries the contractual maximum and the amount by which
/// the corrected maximum was exceeded.
///
/// # Example
///
/// ```
/// use milog_engine::models::{Duration, Employee, Profession, TimeSheet, WorkingArea, YearMonth};
/// use milog_engine::validation::check_total_time;
/// use rust_decimal::Decimal;
///
/// let sheet = TimeSheet::new(
///     Employee::new("Max Mustermann", 1234567),
///     Profession::new("ITI", WorkingArea::Ub, Duration::hm(40, 0), Decimal::new(12, 0)),
///     YearMonth::new(2019, 11).unwrap(),
///     vec![],
///     Duration::ZERO,
///     Duration::ZERO,
/// )
/// .unwrap();
/// assert_eq!(check_total_time(&sheet), None);
/// ```
pub fn check_total_time(sheet: &TimeSheet) -> Option<Violation> {
    let corrected_max = sheet.corrected_max_working_time();
    let total = sheet.total_work_time();
    debug!(%total, %corrected_max, "Checking monthly working time");

    (total > corrected_max).then(|| Violation::TotalTimeExceedance {
        max: sheet.profession().max_working_time,
        excess: total - corrected_max,
    })
}
