//! Compliance engine for monthly timesheets under the German minimum wage act
//! (MiLoG).
//!
//! This crate checks a month of working time entries against the statutory
//! rules: monthly and daily working time caps, mandatory pauses, permitted
//! hours of day, Sunday and public holiday work, overlapping entries, and the
//! constraints of the exported document. Public holidays are looked up from a
//! remote calendar, see [`holiday`].

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod holiday;
pub mod messages;
pub mod models;
pub mod validation;
