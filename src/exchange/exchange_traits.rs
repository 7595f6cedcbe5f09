//! Exchange service trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::exchange_model::ConversionOutcome;
use crate::errors::Result;
use crate::ledger::TransactionRecord;
use crate::rates::RateSnapshot;

/// Trait defining the caller-facing contract consumed by the HTTP layer.
///
/// Absent rates and unknown transactions come back as `None`; validation and
/// storage failures come back as distinguishable errors for the caller to
/// map onto wire-level statuses.
#[async_trait]
pub trait ExchangeServiceTrait: Send + Sync {
    /// Converts `source_amount` into each of `target_currencies` at the
    /// latest rates and records the conversion. `Ok(None)` when no rates are
    /// available.
    async fn convert(
        &self,
        source_amount: f64,
        source_currency: &str,
        target_currencies: &[String],
    ) -> Result<Option<ConversionOutcome>>;

    /// The latest rate snapshot for `source_currency` against
    /// `target_currencies`, or `None` when unavailable.
    async fn get_exchange_rates(
        &self,
        source_currency: &str,
        target_currencies: &[String],
    ) -> Option<RateSnapshot>;

    /// The recorded transaction with `id`, if any.
    fn get_transaction(&self, id: &str) -> Result<Option<TransactionRecord>>;

    /// Recorded transactions dated within `[start, end]` inclusive.
    fn get_transactions_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionRecord>>;
}
