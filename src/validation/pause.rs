//! Mandatory pause check.
//!
//! A working day that spans at least a rule's threshold (pauses included)
//! must contain at least that rule's pause. The table is walked from the
//! smallest threshold up and a day is reported at most once: at the first
//! rule it fails.

use super::Violation;
use super::day_summary::summarize_days;
use crate::config::PauseRule;
use crate::models::{Duration, TimeSheet};

/// Default pause table: 0:30 from a 6:00 span, 0:45 from a 9:00 span.
pub const DEFAULT_PAUSE_RULES: [PauseRule; 2] = [
    PauseRule::new(Duration::hm(6, 0), Duration::hm(0, 30)),
    PauseRule::new(Duration::hm(9, 0), Duration::hm(0, 45)),
];

/// Reports every day with too little pause under `rules`.
///
/// `rules` must be ascending by threshold.
///
/// # Example
///
/// ```
/// use milog_engine::config::RuleSet;
/// use milog_engine::models::{ClockTime, Duration, Employee, Entry, Profession, TimeSheet, WorkingArea, YearMonth};
/// use milog_engine::validation::check_pauses;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let six_hours = Entry::new(
///     "Tutorium",
///     NaiveDate::from_ymd_opt(2019, 11, 4).unwrap(),
///     ClockTime::hm(8, 0),
///     ClockTime::hm(14, 0),
///     Duration::hm(0, 29),
///     false,
/// )
/// .unwrap();
/// let sheet = TimeSheet::new(
///     Employee::new("Max Mustermann", 1234567),
///     Profession::new("ITI", WorkingArea::Ub, Duration::hm(40, 0), Decimal::new(12, 0)),
///     YearMonth::new(2019, 11).unwrap(),
///     vec![six_hours],
///     Duration::ZERO,
///     Duration::ZERO,
/// )
/// .unwrap();
///
/// assert_eq!(check_pauses(&sheet, &RuleSet::default().pause_rules).len(), 1);
/// ```
pub fn check_pauses(sheet: &TimeSheet, rules: &[PauseRule]) -> Vec<Violation> {
    summarize_days(sheet.entries())
        .into_iter()
        .filter(|day| {
            rules
                .iter()
                .take_while(|rule| day.span >= rule.threshold)
                .any(|rule| day.pause < rule.required_pause)
        })
        .map(|day| Violation::TimePause { date: day.date })
        .collect()
}
