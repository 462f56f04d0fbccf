//! Core data models for the MiLoG compliance engine.
//!
//! This module contains the value types and the timesheet aggregate every
//! rule reads. All of them are built once and never mutated.

mod clock_time;
mod duration;
mod employee;
mod entry;
mod holiday;
mod timesheet;

pub use clock_time::ClockTime;
pub use duration::{Duration, Sign};
pub use employee::{Employee, Profession, WorkingArea};
pub use entry::Entry;
pub use holiday::Holiday;
pub use timesheet::{TimeSheet, YearMonth};
