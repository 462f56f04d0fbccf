//! Timesheet aggregate and the month it covers.
//!
//! A [`TimeSheet`] is the immutable snapshot every rule reads. Building one
//! sorts its entries and enforces the transfer invariant, so the validation
//! engine never sees a sheet whose corrected monthly cap is negative.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Duration, Employee, Entry, Profession};
use crate::error::{EngineError, EngineResult};

/// A calendar month.
///
/// # Example
///
/// ```
/// use milog_engine::models::YearMonth;
/// use chrono::NaiveDate;
///
/// let november = YearMonth::new(2019, 11).unwrap();
/// assert!(november.contains(NaiveDate::from_ymd_opt(2019, 11, 30).unwrap()));
/// assert!(!november.contains(NaiveDate::from_ymd_opt(2019, 12, 1).unwrap()));
/// assert_eq!(november.to_string(), "2019-11");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year/month pair, rejecting month numbers outside 1..=12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidYearMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// The year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The month number, 1 to 12.
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the given day of this month, if it exists.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Checks if a date falls within this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One employee's work record for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSheet {
    employee: Employee,
    profession: Profession,
    year_month: YearMonth,
    entries: Vec<Entry>,
    succ_transfer: Duration,
    pred_transfer: Duration,
    #[serde(skip)]
    corrected_max: Duration,
}

impl TimeSheet {
    /// Builds a timesheet from unordered entries.
    ///
    /// Entries are sorted by date, then start time.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeSheet`] if an entry lies outside
    /// `year_month`, or if
    /// `max_working_time + succ_transfer < pred_transfer + total_vacation_time`.
    /// The same error is returned when those sums do not fit in a
    /// [`Duration`].
    ///
    /// # Example
    ///
    /// ```
    /// use milog_engine::models::{Duration, Employee, Profession, TimeSheet, WorkingArea, YearMonth};
    /// use rust_decimal::Decimal;
    ///
    /// let profession = Profession::new("ITI", WorkingArea::Ub, Duration::hm(40, 0), Decimal::new(12, 0));
    /// let result = TimeSheet::new(
    ///     Employee::new("Max Mustermann", 1234567),
    ///     profession,
    ///     YearMonth::new(2019, 11).unwrap(),
    ///     vec![],
    ///     Duration::ZERO,
    ///     Duration::hm(45, 0),
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(
        employee: Employee,
        profession: Profession,
        year_month: YearMonth,
        mut entries: Vec<Entry>,
        succ_transfer: Duration,
        pred_transfer: Duration,
    ) -> EngineResult<Self> {
        if let Some(stray) = entries.iter().find(|e| !year_month.contains(e.date())) {
            return Err(EngineError::InvalidTimeSheet {
                message: format!("entry dated {} lies outside {}", stray.date(), year_month),
            });
        }

        entries.sort_by_key(Entry::sort_key);

        let vacation = vacation_time(&entries);
        let out_of_range = || EngineError::InvalidTimeSheet {
            message: format!(
                "working time {} with transfers {} and {} is out of range",
                profession.max_working_time, succ_transfer, pred_transfer
            ),
        };
        let available = profession
            .max_working_time
            .checked_add(succ_transfer)
            .ok_or_else(out_of_range)?;
        let claimed = pred_transfer.checked_add(vacation).ok_or_else(out_of_range)?;
        if available < claimed {
            return Err(EngineError::InvalidTimeSheet {
                message: format!(
                    "working time {} plus succeeding transfer {} is less than \
                     preceding transfer {} plus vacation {}",
                    profession.max_working_time, succ_transfer, pred_transfer, vacation
                ),
            });
        }
        let corrected_max = available.checked_sub(claimed).ok_or_else(out_of_range)?;

        Ok(Self {
            employee,
            profession,
            year_month,
            entries,
            succ_transfer,
            pred_transfer,
            corrected_max,
        })
    }

    /// The employee the sheet belongs to.
    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// The contract the sheet is recorded against.
    pub fn profession(&self) -> &Profession {
        &self.profession
    }

    /// The month covered.
    pub fn year_month(&self) -> YearMonth {
        self.year_month
    }

    /// Entries in ascending (date, start) order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Time carried over into the following month.
    pub fn succ_transfer(&self) -> Duration {
        self.succ_transfer
    }

    /// Time carried over from the preceding month.
    pub fn pred_transfer(&self) -> Duration {
        self.pred_transfer
    }

    /// Sum of working time over non-vacation entries.
    pub fn total_work_time(&self) -> Duration {
        self.entries
            .iter()
            .filter(|e| !e.is_vacation())
            .map(Entry::working_time)
            .sum()
    }

    /// Sum of working time over vacation entries.
    pub fn total_vacation_time(&self) -> Duration {
        vacation_time(&self.entries)
    }

    /// The monthly cap adjusted for transfers and vacation.
    ///
    /// Never negative for a constructed sheet.
    pub fn corrected_max_working_time(&self) -> Duration {
        self.corrected_max
    }
}

fn vacation_time(entries: &[Entry]) -> Duration {
    entries
        .iter()
        .filter(|e| e.is_vacation())
        .map(Entry::working_time)
        .sum()
}
