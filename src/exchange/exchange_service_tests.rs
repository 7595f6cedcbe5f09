use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::conversion::ConversionResult;
use crate::errors::{Error, StorageError};
use crate::exchange::{ExchangeService, ExchangeServiceTrait};
use crate::ledger::{
    MemoryTransactionStore, TransactionLedger, TransactionLedgerTrait, TransactionRecord,
};
use crate::providers::{ProviderError, RateProvider};
use crate::rates::{ExchangeRate, RateSeries, RateSnapshot};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn symbols(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

// --- Mock RateProvider ---
struct MockRateProvider {
    rates: Vec<(&'static str, f64)>,
    fail_with: Option<u16>,
}

impl MockRateProvider {
    fn healthy(rates: &[(&'static str, f64)]) -> Self {
        Self {
            rates: rates.to_vec(),
            fail_with: None,
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            rates: Vec::new(),
            fail_with: Some(status),
        }
    }

    fn snapshot(&self, base: &str) -> RateSnapshot {
        RateSnapshot {
            base: base.to_string(),
            date: date(2023, 4, 5),
            rates: self
                .rates
                .iter()
                .map(|(currency, rate)| ExchangeRate {
                    currency: currency.to_string(),
                    rate: *rate,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl RateProvider for MockRateProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn latest(
        &self,
        base: &str,
        _symbols: &[String],
    ) -> Result<RateSnapshot, ProviderError> {
        match self.fail_with {
            Some(status) => Err(ProviderError::Status {
                status,
                message: "Request failed".to_string(),
            }),
            None => Ok(self.snapshot(base)),
        }
    }

    async fn historical(
        &self,
        _date: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Result<RateSnapshot, ProviderError> {
        self.latest(base, symbols).await
    }

    async fn range(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
        _base: &str,
        _symbols: &[String],
    ) -> Result<RateSeries, ProviderError> {
        unimplemented!()
    }

    async fn time_series(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
        _symbols: &[String],
    ) -> Result<RateSeries, ProviderError> {
        unimplemented!()
    }
}

// --- Ledger over an unreachable store ---
struct FailingLedger;

impl TransactionLedgerTrait for FailingLedger {
    fn record(&self, _result: ConversionResult) -> crate::errors::Result<String> {
        Err(StorageError::Unavailable("store unreachable".to_string()).into())
    }

    fn get_by_id(&self, _id: &str) -> crate::errors::Result<Option<TransactionRecord>> {
        Err(StorageError::Unavailable("store unreachable".to_string()).into())
    }

    fn list_by_date_range(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> crate::errors::Result<Vec<TransactionRecord>> {
        Err(StorageError::Unavailable("store unreachable".to_string()).into())
    }
}

fn service_with(provider: MockRateProvider) -> (ExchangeService, Arc<TransactionLedger>) {
    let ledger = Arc::new(TransactionLedger::new(Arc::new(MemoryTransactionStore::new())).unwrap());
    let service = ExchangeService::new(Arc::new(provider), ledger.clone());
    (service, ledger)
}

#[tokio::test]
async fn test_convert_computes_amounts_and_records_transaction() {
    // Base EUR echoed in the rates object must be excluded from the outcome.
    let provider = MockRateProvider::healthy(&[("EUR", 1.0), ("USD", 1.1), ("GBP", 0.86)]);
    let (service, _ledger) = service_with(provider);

    let outcome = service
        .convert(100.0, "EUR", &symbols(&["USD", "GBP"]))
        .await
        .unwrap()
        .expect("rates available");

    assert_eq!(outcome.amounts.len(), 2);
    assert_eq!(outcome.amounts["USD"], 100.0 * 1.1);
    assert_eq!(outcome.amounts["GBP"], 100.0 * 0.86);

    let record = service
        .get_transaction(&outcome.transaction_id)
        .unwrap()
        .expect("transaction resolvable via fresh id");
    assert_eq!(record.source_currency, "EUR");
    assert_eq!(record.source_amount, 100.0);
    assert_eq!(record.amounts, outcome.amounts);
}

#[tokio::test]
async fn test_convert_keeps_base_when_explicitly_requested() {
    let provider = MockRateProvider::healthy(&[("EUR", 1.0), ("USD", 1.1)]);
    let (service, _ledger) = service_with(provider);

    let outcome = service
        .convert(100.0, "EUR", &symbols(&["EUR", "USD"]))
        .await
        .unwrap()
        .expect("rates available");

    assert_eq!(outcome.amounts.len(), 2);
    assert_eq!(outcome.amounts["EUR"], 100.0);
    assert_eq!(outcome.amounts["USD"], 100.0 * 1.1);
}

#[tokio::test]
async fn test_convert_to_base_only_returns_identity_amount() {
    let provider = MockRateProvider::healthy(&[("EUR", 1.0)]);
    let (service, _ledger) = service_with(provider);

    let outcome = service
        .convert(100.0, "EUR", &symbols(&["EUR"]))
        .await
        .unwrap()
        .expect("rates available");

    assert_eq!(outcome.amounts.len(), 1);
    assert_eq!(outcome.amounts["EUR"], 100.0);
}

#[tokio::test]
async fn test_convert_propagates_ledger_storage_failure() {
    let provider = MockRateProvider::healthy(&[("USD", 1.1)]);
    let service = ExchangeService::new(Arc::new(provider), Arc::new(FailingLedger));

    let error = service
        .convert(100.0, "EUR", &symbols(&["USD"]))
        .await
        .unwrap_err();
    assert!(matches!(error, Error::Storage(_)));
}

#[tokio::test]
async fn test_convert_returns_none_when_provider_fails() {
    let (service, ledger) = service_with(MockRateProvider::failing(403));

    let outcome = service
        .convert(100.0, "EUR", &symbols(&["USD"]))
        .await
        .unwrap();
    assert!(outcome.is_none());

    // Nothing recorded on a failed fetch.
    let records = ledger
        .list_by_date_range(date(2023, 1, 1), date(2023, 12, 31))
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_convert_rejects_invalid_amount() {
    let provider = MockRateProvider::healthy(&[("USD", 1.1)]);
    let (service, _ledger) = service_with(provider);

    let error = service
        .convert(-1.0, "EUR", &symbols(&["USD"]))
        .await
        .unwrap_err();
    assert!(matches!(error, Error::Validation(_)));
}

#[tokio::test]
async fn test_convert_with_no_matching_targets_is_validation_error() {
    // Provider answered, but nothing matches the caller-selected targets:
    // an empty rate set cannot be converted.
    let provider = MockRateProvider::healthy(&[("EUR", 1.0)]);
    let (service, _ledger) = service_with(provider);

    let error = service
        .convert(100.0, "EUR", &symbols(&["USD"]))
        .await
        .unwrap_err();
    assert!(matches!(error, Error::Validation(_)));
}

#[tokio::test]
async fn test_get_exchange_rates_passes_snapshot_through() {
    let provider = MockRateProvider::healthy(&[("USD", 1.1)]);
    let (service, _ledger) = service_with(provider);

    let snapshot = service
        .get_exchange_rates("EUR", &symbols(&["USD"]))
        .await
        .expect("rates available");
    assert_eq!(snapshot.base, "EUR");
    assert_eq!(snapshot.rate_for("USD"), Some(1.1));
}

#[tokio::test]
async fn test_get_exchange_rates_absent_on_provider_failure() {
    let (service, _ledger) = service_with(MockRateProvider::failing(500));
    assert!(service
        .get_exchange_rates("EUR", &symbols(&["USD"]))
        .await
        .is_none());
}

#[tokio::test]
async fn test_get_transactions_in_range_via_service() {
    let provider = MockRateProvider::healthy(&[("USD", 1.1)]);
    let (service, _ledger) = service_with(provider);

    let outcome = service
        .convert(50.0, "EUR", &symbols(&["USD"]))
        .await
        .unwrap()
        .unwrap();

    let records = service
        .get_transactions_in_range(date(2023, 4, 5), date(2023, 4, 5))
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, outcome.transaction_id);
}
