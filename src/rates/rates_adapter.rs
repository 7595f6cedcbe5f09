//! Adapter that converts provider failures into absent results.

use std::sync::Arc;

use chrono::NaiveDate;
use log::error;

use super::rates_model::{RateSeries, RateSnapshot};
use crate::providers::{ProviderError, RateProvider};

/// Wraps a [`RateProvider`] so callers never see a raised fetch error: every
/// failure collapses to `None` with a logged diagnostic. A dependency outage
/// and "no data for that currency" are observably identical here; the caller
/// decides whether absence is a client error or a dependency error.
pub struct RateAdapter {
    provider: Arc<dyn RateProvider>,
}

impl RateAdapter {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch_latest(&self, base: &str, symbols: &[String]) -> Option<RateSnapshot> {
        self.provider
            .latest(base, symbols)
            .await
            .map_err(|e| self.log_failure("latest", &e))
            .ok()
    }

    pub async fn fetch_historical(
        &self,
        date: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Option<RateSnapshot> {
        self.provider
            .historical(date, base, symbols)
            .await
            .map_err(|e| self.log_failure("historical", &e))
            .ok()
    }

    pub async fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Option<RateSeries> {
        self.provider
            .range(start, end, base, symbols)
            .await
            .map_err(|e| self.log_failure("range", &e))
            .ok()
    }

    pub async fn fetch_time_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        symbols: &[String],
    ) -> Option<RateSeries> {
        self.provider
            .time_series(start, end, symbols)
            .await
            .map_err(|e| self.log_failure("time_series", &e))
            .ok()
    }

    fn log_failure(&self, operation: &str, err: &ProviderError) {
        error!(
            "rate provider {} {} fetch failed (status {}): {}",
            self.provider.id(),
            operation,
            err.status_code(),
            err
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::ExchangeRate;
    use async_trait::async_trait;

    /// Provider double that either answers with a fixed snapshot or fails
    /// with a fixed status.
    struct StubProvider {
        fail_with: Option<u16>,
    }

    fn stub_snapshot() -> RateSnapshot {
        RateSnapshot {
            base: "EUR".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 4, 5).unwrap(),
            rates: vec![ExchangeRate {
                currency: "USD".to_string(),
                rate: 1.1,
            }],
        }
    }

    #[async_trait]
    impl RateProvider for StubProvider {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn latest(
            &self,
            _base: &str,
            _symbols: &[String],
        ) -> Result<RateSnapshot, ProviderError> {
            match self.fail_with {
                Some(status) => Err(ProviderError::Status {
                    status,
                    message: "Request failed".to_string(),
                }),
                None => Ok(stub_snapshot()),
            }
        }

        async fn historical(
            &self,
            _date: NaiveDate,
            _base: &str,
            _symbols: &[String],
        ) -> Result<RateSnapshot, ProviderError> {
            self.latest("EUR", &[]).await
        }

        async fn range(
            &self,
            start: NaiveDate,
            end: NaiveDate,
            _base: &str,
            _symbols: &[String],
        ) -> Result<RateSeries, ProviderError> {
            match self.fail_with {
                Some(status) => Err(ProviderError::Status {
                    status,
                    message: "Request failed".to_string(),
                }),
                None => Ok(RateSeries {
                    start_date: start,
                    end_date: end,
                    base: "EUR".to_string(),
                    rates_by_date: Default::default(),
                }),
            }
        }

        async fn time_series(
            &self,
            start: NaiveDate,
            end: NaiveDate,
            symbols: &[String],
        ) -> Result<RateSeries, ProviderError> {
            self.range(start, end, "EUR", symbols).await
        }
    }

    #[tokio::test]
    async fn test_fetch_latest_returns_snapshot_on_success() {
        let adapter = RateAdapter::new(Arc::new(StubProvider { fail_with: None }));
        let snapshot = adapter.fetch_latest("EUR", &["USD".to_string()]).await;
        assert_eq!(snapshot, Some(stub_snapshot()));
    }

    #[tokio::test]
    async fn test_fetch_latest_collapses_provider_error_to_none() {
        // HTTP 403 from the provider must yield absence, not a raised error.
        let adapter = RateAdapter::new(Arc::new(StubProvider {
            fail_with: Some(403),
        }));
        let snapshot = adapter.fetch_latest("EUR", &["USD".to_string()]).await;
        assert!(snapshot.is_none());
    }

    #[tokio::test]
    async fn test_fetch_range_collapses_provider_error_to_none() {
        let adapter = RateAdapter::new(Arc::new(StubProvider {
            fail_with: Some(500),
        }));
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        assert!(adapter
            .fetch_range(start, end, "EUR", &["USD".to_string()])
            .await
            .is_none());
        assert!(adapter
            .fetch_time_series(start, end, &["USD".to_string()])
            .await
            .is_none());
    }
}
