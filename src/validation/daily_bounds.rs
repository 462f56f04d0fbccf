//! Permitted hours-of-day check.

use super::Violation;
use crate::models::{ClockTime, TimeSheet};

/// Default earliest permitted start of work.
pub const DEFAULT_EARLIEST_START: ClockTime = ClockTime::hm(6, 0);

/// Default latest permitted end of work.
pub const DEFAULT_LATEST_END: ClockTime = ClockTime::hm(22, 0);

/// Reports every entry that starts before `earliest_start` or ends after
/// `latest_end`. Vacation entries are checked too.
pub fn check_daily_bounds(
    sheet: &TimeSheet,
    earliest_start: ClockTime,
    latest_end: ClockTime,
) -> Vec<Violation> {
    sheet
        .entries()
        .iter()
        .filter(|e| e.start().is_before(earliest_start) || e.end().is_after(latest_end))
        .map(|e| Violation::TimeOutOfBounds { date: e.date() })
        .collect()
}
