//! HTTP client for the public holiday API.
//!
//! The API answers `GET <base>?jahr=<year>&nur_land=<region>` with a JSON
//! object mapping each holiday's name to its date:
//!
//! ```text
//! {
//!   "Neujahrstag":      { "datum": "2019-01-01", "hinweis": "" },
//!   "1. Weihnachtstag": { "datum": "2019-12-25", "hinweis": "" }
//! }
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use super::{HolidayFetchError, HolidayFetcher};
use crate::models::Holiday;

/// HTTP request timeout for a single holiday fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One value of the API's name-to-date object. `hinweis` (a free-text note)
/// is ignored.
#[derive(Debug, Deserialize)]
struct ApiHoliday {
    datum: NaiveDate,
}

/// Parses a holiday API response body into holidays sorted by date.
///
/// # Example
///
/// ```
/// use milog_engine::holiday::parse_holiday_response;
///
/// let body = r#"{"1. Weihnachtstag": {"datum": "2019-12-25", "hinweis": ""}}"#;
/// let holidays = parse_holiday_response(body).unwrap();
/// assert_eq!(holidays[0].description, "1. Weihnachtstag");
/// assert!(parse_holiday_response("[]").is_err());
/// ```
pub fn parse_holiday_response(body: &str) -> Result<Vec<Holiday>, HolidayFetchError> {
    let parsed: BTreeMap<String, ApiHoliday> =
        serde_json::from_str(body).map_err(|e| HolidayFetchError::MalformedBody {
            message: e.to_string(),
        })?;

    let mut holidays: Vec<Holiday> = parsed
        .into_iter()
        .map(|(name, entry)| Holiday::new(entry.datum, name))
        .collect();
    holidays.sort_by_key(|h| h.date);
    Ok(holidays)
}

/// Fetches holiday calendars over HTTP.
#[derive(Debug, Clone)]
pub struct HttpHolidayFetcher {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpHolidayFetcher {
    /// Creates a fetcher for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a fetcher reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Replaces the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl HolidayFetcher for HttpHolidayFetcher {
    async fn fetch(&self, year: i32, region: &str) -> Result<Vec<Holiday>, HolidayFetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("jahr", year.to_string()), ("nur_land", region.to_string())])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HolidayFetchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        parse_holiday_response(&body)
    }
}
