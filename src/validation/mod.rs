//! Timesheet validation rules.
//!
//! Each rule lives in its own module as a plain function over a
//! [`TimeSheet`](crate::models::TimeSheet) returning the violations it found.
//! [`Validator`] runs them all in their fixed order.
//!
//! Rules:
//! - [`check_total_time`] - monthly total against the corrected maximum
//! - [`check_daily_time`] - per-day working time cap
//! - [`check_pauses`] - mandatory pauses by span
//! - [`check_daily_bounds`] - permitted hours of day
//! - [`check_working_days`] - Sundays and public holidays
//! - [`check_overlaps`] - overlapping entries on one day
//! - [`check_row_count`] - rows the export format can hold
//! - [`check_department_name`] - department name present

mod daily_bounds;
mod daily_time;
mod day_summary;
mod document;
mod engine;
mod overlap;
mod pause;
mod total_time;
mod violation;
mod working_days;

pub use daily_bounds::{DEFAULT_EARLIEST_START, DEFAULT_LATEST_END, check_daily_bounds};
pub use daily_time::{DEFAULT_DAILY_MAX_WORKING_TIME, check_daily_time};
pub use day_summary::{DaySummary, summarize_days};
pub use document::{check_department_name, check_row_count};
pub use engine::{ValidationReport, Validator, Verdict};
pub use overlap::check_overlaps;
pub use pause::{DEFAULT_PAUSE_RULES, check_pauses};
pub use total_time::check_total_time;
pub use violation::{Violation, ViolationArgument, ViolationKind};
pub use working_days::check_working_days;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::holiday::{HolidayFetchError, HolidayProvider};
    use crate::models::{Employee, Entry, Holiday, Profession, TimeSheet, WorkingArea, YearMonth};

    /// A day in November 2019.
    pub fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 11, day).unwrap()
    }

    fn make(day: u32, start: &str, end: &str, pause: &str, vacation: bool) -> Entry {
        Entry::new(
            "Tutorium",
            date(day),
            start.parse().unwrap(),
            end.parse().unwrap(),
            pause.parse().unwrap(),
            vacation,
        )
        .unwrap()
    }

    pub fn entry(day: u32, start: &str, end: &str, pause: &str) -> Entry {
        make(day, start, end, pause, false)
    }

    pub fn vacation(day: u32, start: &str, end: &str) -> Entry {
        make(day, start, end, "0:00", true)
    }

    /// November 2019 sheet with a 40:00 cap, no transfers, department "ITI".
    pub fn sheet(entries: Vec<Entry>) -> TimeSheet {
        sheet_with(entries, "40:00", "0:00", "0:00", "ITI")
    }

    pub fn sheet_with(
        entries: Vec<Entry>,
        max: &str,
        succ: &str,
        pred: &str,
        department: &str,
    ) -> TimeSheet {
        TimeSheet::new(
            Employee::new("Max Mustermann", 1234567),
            Profession::new(
                department,
                WorkingArea::Ub,
                max.parse().unwrap(),
                Decimal::new(1240, 2),
            ),
            YearMonth::new(2019, 11).unwrap(),
            entries,
            succ.parse().unwrap(),
            pred.parse().unwrap(),
        )
        .unwrap()
    }

    /// A provider whose source is always down.
    pub struct FailingHolidays;

    impl HolidayProvider for FailingHolidays {
        async fn is_holiday(&self, _date: NaiveDate) -> Result<bool, HolidayFetchError> {
            Err(HolidayFetchError::HttpStatus(503))
        }

        async fn holidays(&self) -> Result<&[Holiday], HolidayFetchError> {
            Err(HolidayFetchError::HttpStatus(503))
        }
    }
}
