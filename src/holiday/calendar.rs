//! Per-year, per-region holiday calendar with a lazily filled cache.

use chrono::{Datelike, NaiveDate};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use super::{HolidayFetchError, HolidayFetcher, HolidayProvider};
use crate::models::Holiday;

/// The holidays of one year in one region.
///
/// The first query fetches the full year through the wrapped
/// [`HolidayFetcher`]; every later query is answered from memory for the
/// lifetime of the calendar. A failed fetch leaves the cache empty, so the
/// next query tries again.
///
/// # Example
///
/// ```no_run
/// use milog_engine::holiday::{HolidayCalendar, HolidayProvider, HttpHolidayFetcher};
/// use chrono::NaiveDate;
///
/// # async fn run() -> Result<(), milog_engine::holiday::HolidayFetchError> {
/// let calendar = HolidayCalendar::new(
///     2019,
///     "BW",
///     HttpHolidayFetcher::new("https://feiertage-api.de/api/"),
/// );
/// let christmas = NaiveDate::from_ymd_opt(2019, 12, 25).unwrap();
/// assert!(calendar.is_holiday(christmas).await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HolidayCalendar<F> {
    year: i32,
    region: String,
    fetcher: F,
    cache: OnceCell<Vec<Holiday>>,
}

impl<F: HolidayFetcher + Sync> HolidayCalendar<F> {
    /// Creates a calendar for `year` in `region`. Nothing is fetched yet.
    pub fn new(year: i32, region: impl Into<String>, fetcher: F) -> Self {
        Self {
            year,
            region: region.into(),
            fetcher,
            cache: OnceCell::new(),
        }
    }

    /// The year this calendar covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The region code this calendar covers.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns true once the year has been fetched.
    pub fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }

    async fn cached(&self) -> Result<&[Holiday], HolidayFetchError> {
        if self.cache.initialized() {
            debug!(year = self.year, region = %self.region, "Holiday cache hit");
        }

        let holidays = self
            .cache
            .get_or_try_init(|| async {
                debug!(year = self.year, region = %self.region, "Fetching holiday calendar");
                match self.fetcher.fetch(self.year, &self.region).await {
                    Ok(holidays) => {
                        info!(
                            year = self.year,
                            region = %self.region,
                            count = holidays.len(),
                            "Holiday calendar loaded"
                        );
                        Ok(holidays)
                    }
                    Err(err) => {
                        warn!(
                            year = self.year,
                            region = %self.region,
                            error = %err,
                            "Holiday calendar fetch failed"
                        );
                        Err(err)
                    }
                }
            })
            .await?;

        Ok(holidays)
    }
}

impl<F: HolidayFetcher + Send + Sync> HolidayProvider for HolidayCalendar<F> {
    async fn is_holiday(&self, date: NaiveDate) -> Result<bool, HolidayFetchError> {
        if date.year() != self.year {
            return Err(HolidayFetchError::OutOfScope {
                date,
                year: self.year,
            });
        }
        Ok(self.cached().await?.iter().any(|h| h.date == date))
    }

    async fn holidays(&self) -> Result<&[Holiday], HolidayFetchError> {
        self.cached().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Serves a fixed Baden-Württemberg 2019 list and counts calls.
    struct CountingFetcher {
        calls: AtomicUsize,
        failures_left: AtomicUsize,
    }

    impl CountingFetcher {
        fn new() -> Self {
            Self::failing_first(0)
        }

        fn failing_first(failures: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                failures_left: AtomicUsize::new(failures),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl HolidayFetcher for CountingFetcher {
        async fn fetch(&self, year: i32, region: &str) -> Result<Vec<Holiday>, HolidayFetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(HolidayFetchError::HttpStatus(503));
            }
            assert_eq!((year, region), (2019, "BW"));
            Ok(vec![
                Holiday::new(date(2019, 1, 1), "Neujahrstag"),
                Holiday::new(date(2019, 1, 6), "Heilige Drei Könige"),
                Holiday::new(date(2019, 11, 1), "Allerheiligen"),
                Holiday::new(date(2019, 12, 25), "1. Weihnachtstag"),
                Holiday::new(date(2019, 12, 26), "2. Weihnachtstag"),
            ])
        }
    }

    #[tokio::test]
    async fn test_christmas_is_holiday_in_bw() {
        let calendar = HolidayCalendar::new(2019, "BW", CountingFetcher::new());
        assert!(calendar.is_holiday(date(2019, 12, 25)).await.unwrap());
        assert!(calendar.is_holiday(date(2019, 12, 26)).await.unwrap());
        assert!(!calendar.is_holiday(date(2019, 12, 27)).await.unwrap());
    }

    #[tokio::test]
    async fn test_fetches_only_once() {
        let calendar = HolidayCalendar::new(2019, "BW", CountingFetcher::new());
        assert!(!calendar.is_loaded());

        calendar.is_holiday(date(2019, 12, 25)).await.unwrap();
        calendar.is_holiday(date(2019, 12, 26)).await.unwrap();
        calendar.is_holiday(date(2019, 3, 4)).await.unwrap();
        assert_eq!(calendar.holidays().await.unwrap().len(), 5);

        assert!(calendar.is_loaded());
        assert_eq!(calendar.fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_retried_on_next_query() {
        let calendar = HolidayCalendar::new(2019, "BW", CountingFetcher::failing_first(1));

        let err = calendar.is_holiday(date(2019, 11, 1)).await.unwrap_err();
        assert!(matches!(err, HolidayFetchError::HttpStatus(503)));
        assert!(!calendar.is_loaded());

        assert!(calendar.is_holiday(date(2019, 11, 1)).await.unwrap());
        assert_eq!(calendar.fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_date_outside_year_is_out_of_scope() {
        let calendar = HolidayCalendar::new(2019, "BW", CountingFetcher::new());
        let err = calendar.is_holiday(date(2020, 1, 1)).await.unwrap_err();
        assert!(matches!(err, HolidayFetchError::OutOfScope { year: 2019, .. }));
        assert_eq!(calendar.fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_accessors() {
        let calendar = HolidayCalendar::new(2019, "BW", CountingFetcher::new());
        assert_eq!(calendar.year(), 2019);
        assert_eq!(calendar.region(), "BW");
    }
}
