//! Application state for the compliance check API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::holiday::{HolidayCalendar, HttpHolidayFetcher};

/// Shared application state.
///
/// Holds the loaded configuration and one HTTP client that every request's
/// holiday calendar reuses.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Connection pool for the holiday API.
    client: reqwest::Client,
    /// Base URL of the holiday API.
    holiday_api_url: String,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Creates a state reusing an existing HTTP client.
    pub fn with_client(config: ConfigLoader, client: reqwest::Client) -> Self {
        let holiday_api_url = config.holiday_api().api_url.clone();
        Self {
            config: Arc::new(config),
            client,
            holiday_api_url,
        }
    }

    /// Points holiday lookups at another API base URL.
    pub fn with_holiday_api_url(mut self, url: impl Into<String>) -> Self {
        self.holiday_api_url = url.into();
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Builds an empty holiday calendar for `year` in `region`.
    pub fn holiday_calendar(&self, year: i32, region: &str) -> HolidayCalendar<HttpHolidayFetcher> {
        let fetcher = HttpHolidayFetcher::with_client(self.client.clone(), &self.holiday_api_url)
            .with_timeout(self.config.holiday_api().timeout());
        HolidayCalendar::new(year, region, fetcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::load("./config/milog").unwrap())
    }

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_holiday_calendar_uses_configured_url() {
        let state = create_test_state();
        let calendar = state.holiday_calendar(2019, "BW");

        assert_eq!(calendar.year(), 2019);
        assert_eq!(calendar.region(), "BW");
        assert!(!calendar.is_loaded());
    }

    #[test]
    fn test_holiday_api_url_override() {
        let state = create_test_state().with_holiday_api_url("http://127.0.0.1:9/api/");
        assert_eq!(state.holiday_api_url, "http://127.0.0.1:9/api/");
    }
}
