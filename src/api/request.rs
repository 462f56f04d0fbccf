//! Request types for the compliance check API.
//!
//! This module defines the JSON request structures for the `/check` endpoint
//! and their conversion into domain values. The body carries the two
//! documents a timesheet is built from: the "global" document describing the
//! employee and their contract, and the "month" document listing the entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ExportFormat;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ClockTime, Duration, Employee, Entry, Profession, TimeSheet, WorkingArea, YearMonth,
};

/// Request body for the `/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Employee and contract.
    pub global: GlobalDocument,
    /// The month's entries.
    pub month: MonthDocument,
    /// The export target; selects the row limit.
    #[serde(default)]
    pub export: ExportFormat,
    /// Holiday region code, e.g. "BW". Defaults to the configured region.
    #[serde(default)]
    pub region: Option<String>,
    /// Language of the rendered messages. Defaults to "de".
    #[serde(default)]
    pub language: Option<String>,
}

/// Employee and contract information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalDocument {
    /// The employee's full name.
    pub name: String,
    /// The employee's staff number.
    pub staff_id: u64,
    /// Name of the department. May be empty, which the check reports.
    #[serde(default)]
    pub department: String,
    /// Contractual working time per month, as `H:MM`.
    pub working_time: Duration,
    /// Hourly wage.
    pub wage: Decimal,
    /// The sector the contract belongs to.
    pub working_area: WorkingArea,
}

/// The entries of one month and its carried-over time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthDocument {
    /// The year.
    pub year: i32,
    /// The month number, 1 to 12.
    pub month: u32,
    /// Time carried over from the preceding month.
    #[serde(default)]
    pub pred_transfer: Duration,
    /// Time carried over into the succeeding month.
    #[serde(default)]
    pub succ_transfer: Duration,
    /// The work entries, in any order.
    #[serde(default)]
    pub entries: Vec<EntryRequest>,
}

/// A single entry in a month document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// The activity performed.
    pub action: String,
    /// Day of the month.
    pub day: u32,
    /// Start time, `HH:MM`.
    pub start: ClockTime,
    /// End time, `HH:MM`.
    pub end: ClockTime,
    /// Pause taken, `H:MM`.
    #[serde(default)]
    pub pause: Duration,
    /// Whether the entry records vacation.
    #[serde(default)]
    pub vacation: bool,
}

impl GlobalDocument {
    /// Splits the document into the employee and their profession.
    pub fn into_parts(self) -> (Employee, Profession) {
        (
            Employee::new(self.name, self.staff_id),
            Profession::new(
                self.department,
                self.working_area,
                self.working_time,
                self.wage,
            ),
        )
    }
}

impl MonthDocument {
    /// Builds the timesheet, running every construction check.
    ///
    /// # Errors
    ///
    /// Fails on an invalid month, a day that does not exist in that month,
    /// an inconsistent entry, or a violated timesheet invariant.
    pub fn into_timesheet(
        self,
        employee: Employee,
        profession: Profession,
    ) -> EngineResult<TimeSheet> {
        let year_month = YearMonth::new(self.year, self.month)?;

        let entries = self
            .entries
            .into_iter()
            .map(|entry| {
                let date = year_month
                    .day(entry.day)
                    .ok_or_else(|| EngineError::InvalidTimeSheet {
                        message: format!("day {} does not exist in {}", entry.day, year_month),
                    })?;
                Entry::new(
                    entry.action,
                    date,
                    entry.start,
                    entry.end,
                    entry.pause,
                    entry.vacation,
                )
            })
            .collect::<EngineResult<Vec<_>>>()?;

        TimeSheet::new(
            employee,
            profession,
            year_month,
            entries,
            self.succ_transfer,
            self.pred_transfer,
        )
    }
}
