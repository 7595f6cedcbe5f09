//! Rate provider trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::provider_errors::ProviderError;
use crate::rates::{RateSeries, RateSnapshot};

/// Trait for remote exchange-rate providers.
///
/// Implement this trait to add support for a new rate feed. The adapter and
/// the exchange service depend only on this seam, so tests substitute a fake
/// provider.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logging.
    fn id(&self) -> &'static str;

    /// Fetch the latest rates for `base` against `symbols`.
    async fn latest(&self, base: &str, symbols: &[String])
        -> Result<RateSnapshot, ProviderError>;

    /// Fetch the rates recorded on `date`.
    async fn historical(
        &self,
        date: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Result<RateSnapshot, ProviderError>;

    /// Fetch one dated rate set per available day in `[start, end]`
    /// inclusive. Days the provider has no data for are simply absent.
    async fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Result<RateSeries, ProviderError>;

    /// Like [`range`](Self::range) but in the provider's default base
    /// currency.
    async fn time_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        symbols: &[String],
    ) -> Result<RateSeries, ProviderError>;
}
