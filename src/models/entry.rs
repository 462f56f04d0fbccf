//! Timesheet entry model.
//!
//! An [`Entry`] is one row of a monthly timesheet: a block of work (or
//! vacation) on a single day with its start, end and unpaid pause.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use super::{ClockTime, Duration};
use crate::error::{EngineError, EngineResult};

/// Represents one row of a timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    action: String,
    date: NaiveDate,
    start: ClockTime,
    end: ClockTime,
    pause: Duration,
    vacation: bool,
    working_time: Duration,
}

impl Entry {
    /// Creates a new entry.
    ///
    /// The working time `(end - start) - pause` is computed once here.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] if the end lies before the
    /// start, the pause is negative, or the pause is longer than the span.
    ///
    /// # Examples
    ///
    /// ```
    /// use milog_engine::models::{ClockTime, Duration, Entry};
    /// use chrono::NaiveDate;
    ///
    /// let entry = Entry::new(
    ///     "Tutorium",
    ///     NaiveDate::from_ymd_opt(2019, 11, 4).unwrap(),
    ///     "11:31".parse().unwrap(),
    ///     "15:11".parse().unwrap(),
    ///     Duration::hm(0, 30),
    ///     false,
    /// )
    /// .unwrap();
    /// assert_eq!(entry.working_time(), Duration::hm(3, 10));
    /// ```
    pub fn new(
        action: impl Into<String>,
        date: NaiveDate,
        start: ClockTime,
        end: ClockTime,
        pause: Duration,
        vacation: bool,
    ) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidEntry {
            date,
            message: message.to_string(),
        };

        if end.is_before(start) {
            return Err(invalid("end time lies before start time"));
        }
        if pause.is_negative() {
            return Err(invalid("pause must not be negative"));
        }
        let span = end - start;
        if pause > span {
            return Err(invalid("pause is longer than the time between start and end"));
        }

        Ok(Self {
            action: action.into(),
            date,
            start,
            end,
            pause,
            vacation,
            working_time: span - pause,
        })
    }

    /// The activity description.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The calendar day the entry belongs to.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Start of the entry.
    pub fn start(&self) -> ClockTime {
        self.start
    }

    /// End of the entry.
    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Unpaid pause taken within the entry.
    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Whether the entry records vacation rather than work.
    pub fn is_vacation(&self) -> bool {
        self.vacation
    }

    /// Time between start and end, pauses included.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// Time between start and end, minus the pause.
    pub fn working_time(&self) -> Duration {
        self.working_time
    }

    /// Returns the day of the week of the entry.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// The key entries of a timesheet are ordered by.
    pub fn sort_key(&self) -> (NaiveDate, ClockTime) {
        (self.date, self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_entry(start: &str, end: &str, pause: &str) -> EngineResult<Entry> {
        Entry::new(
            "Korrektur",
            make_date("2019-11-04"),
            start.parse().unwrap(),
            end.parse().unwrap(),
            pause.parse().unwrap(),
            false,
        )
    }

    #[test]
    fn test_working_time_subtracts_pause() {
        let entry = make_entry("09:00", "17:30", "0:30").unwrap();
        assert_eq!(entry.span(), Duration::hm(8, 30));
        assert_eq!(entry.working_time(), Duration::hm(8, 0));
    }

    #[test]
    fn test_zero_length_entry() {
        let entry = make_entry("09:00", "09:00", "0:00").unwrap();
        assert_eq!(entry.working_time(), Duration::ZERO);
    }

    #[test]
    fn test_end_before_start_rejected() {
        let err = make_entry("12:00", "11:59", "0:00").unwrap_err();
        assert!(matches!(err, EngineError::InvalidEntry { .. }));
    }

    #[test]
    fn test_pause_longer_than_span_rejected() {
        assert!(make_entry("09:00", "09:30", "0:31").is_err());
        assert!(make_entry("09:00", "09:30", "0:30").is_ok());
    }

    #[test]
    fn test_negative_pause_rejected() {
        assert!(make_entry("09:00", "10:00", "-0:10").is_err());
    }

    #[test]
    fn test_day_of_week() {
        // 2019-11-04 is a Monday
        let entry = make_entry("09:00", "10:00", "0:00").unwrap();
        assert_eq!(entry.day_of_week(), Weekday::Mon);
    }

    #[test]
    fn test_sort_key_orders_by_date_then_start() {
        let early = make_entry("08:00", "09:00", "0:00").unwrap();
        let late = make_entry("10:00", "11:00", "0:00").unwrap();
        assert!(early.sort_key() < late.sort_key());
    }
}
