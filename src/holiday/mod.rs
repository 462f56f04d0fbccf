//! Public holiday lookup.
//!
//! The validation engine only needs to ask "is this date a public holiday?".
//! That question is the [`HolidayProvider`] capability. The production
//! provider is a [`HolidayCalendar`]: it pulls a whole year for one region
//! through a [`HolidayFetcher`] (normally [`HttpHolidayFetcher`]) on first use
//! and answers every later question from memory. [`FixedHolidays`] is an
//! in-memory table for tests and offline use.

mod calendar;
mod fixed;
mod http;

use std::future::Future;

use chrono::NaiveDate;

use crate::models::Holiday;

pub use calendar::HolidayCalendar;
pub use fixed::FixedHolidays;
pub use http::{DEFAULT_FETCH_TIMEOUT, HttpHolidayFetcher, parse_holiday_response};

/// Errors from fetching or consulting a holiday calendar.
///
/// An empty calendar is not an error; these variants all mean the answer is
/// unknown.
#[derive(Debug, thiserror::Error)]
pub enum HolidayFetchError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The holiday API returned a non-2xx status code.
    #[error("Holiday API returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body was not the expected JSON shape.
    #[error("Malformed holiday API response: {message}")]
    MalformedBody {
        /// Description of the parse failure.
        message: String,
    },

    /// The date asked about lies outside the calendar's year.
    #[error("Date {date} lies outside the holiday calendar for {year}")]
    OutOfScope {
        /// The date that was asked about.
        date: NaiveDate,
        /// The year the calendar covers.
        year: i32,
    },
}

/// Answers whether dates are public holidays.
pub trait HolidayProvider {
    /// Returns true if `date` is a public holiday.
    fn is_holiday(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<bool, HolidayFetchError>> + Send;

    /// Returns every holiday the provider knows about, in date order.
    fn holidays(&self) -> impl Future<Output = Result<&[Holiday], HolidayFetchError>> + Send;
}

/// Loads the holidays of one year in one region from some source.
pub trait HolidayFetcher {
    /// Fetches all holidays of `year` in `region`.
    fn fetch(
        &self,
        year: i32,
        region: &str,
    ) -> impl Future<Output = Result<Vec<Holiday>, HolidayFetchError>> + Send;
}
