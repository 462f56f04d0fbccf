//! Employee and profession models.
//!
//! This module defines who a timesheet belongs to ([`Employee`]) and the
//! contract it is recorded against ([`Profession`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Duration;

/// The area of employment a contract falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkingArea {
    /// Großforschungsbereich (large-scale research sector).
    Gf,
    /// Universitätsbereich (university sector).
    Ub,
}

/// Represents the person a timesheet is kept for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Full name as printed on the sheet.
    pub name: String,
    /// Staff number.
    pub id: u64,
}

impl Employee {
    /// Creates a new employee.
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// The employment contract a timesheet is recorded against.
///
/// # Examples
///
/// ```
/// use milog_engine::models::{Duration, Profession, WorkingArea};
/// use rust_decimal::Decimal;
///
/// let profession = Profession::new(
///     "Fakultät für Informatik",
///     WorkingArea::Ub,
///     Duration::hm(40, 0),
///     Decimal::new(1200, 2),
/// );
/// assert!(profession.has_department());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    /// Name of the department, printed on the sheet.
    pub department_name: String,
    /// The sector the contract belongs to.
    pub working_area: WorkingArea,
    /// Contractual working time per month.
    pub max_working_time: Duration,
    /// Hourly wage.
    pub wage: Decimal,
}

impl Profession {
    /// Creates a new profession.
    pub fn new(
        department_name: impl Into<String>,
        working_area: WorkingArea,
        max_working_time: Duration,
        wage: Decimal,
    ) -> Self {
        Self {
            department_name: department_name.into(),
            working_area,
            max_working_time,
            wage,
        }
    }

    /// Returns true if a department name is present.
    pub fn has_department(&self) -> bool {
        !self.department_name.is_empty()
    }
}
