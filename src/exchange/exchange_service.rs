//! Caller-facing exchange service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::exchange_model::ConversionOutcome;
use super::exchange_traits::ExchangeServiceTrait;
use crate::conversion::ConversionCalculator;
use crate::errors::Result;
use crate::ledger::{TransactionLedgerTrait, TransactionRecord};
use crate::providers::RateProvider;
use crate::rates::{RateAdapter, RateSnapshot};

/// Ties the rate adapter, conversion calculator and transaction ledger
/// together behind the caller-facing contract.
pub struct ExchangeService {
    adapter: RateAdapter,
    ledger: Arc<dyn TransactionLedgerTrait>,
}

impl ExchangeService {
    /// Creates a new ExchangeService with injected dependencies.
    pub fn new(
        provider: Arc<dyn RateProvider>,
        ledger: Arc<dyn TransactionLedgerTrait>,
    ) -> Self {
        Self {
            adapter: RateAdapter::new(provider),
            ledger,
        }
    }
}

#[async_trait]
impl ExchangeServiceTrait for ExchangeService {
    async fn convert(
        &self,
        source_amount: f64,
        source_currency: &str,
        target_currencies: &[String],
    ) -> Result<Option<ConversionOutcome>> {
        let snapshot = match self
            .adapter
            .fetch_latest(source_currency, target_currencies)
            .await
        {
            Some(snapshot) => snapshot,
            None => return Ok(None),
        };

        // Keep only the caller-selected targets; some feeds echo the base
        // currency itself in the rates object even when it was not asked
        // for. A base listed among the targets stays.
        let snapshot = snapshot
            .retain_currencies(|currency| target_currencies.iter().any(|t| t == currency));

        let result = ConversionCalculator::apply(&snapshot, source_amount)?;
        let amounts = result.amounts.clone();
        let transaction_id = self.ledger.record(result)?;
        debug!(
            "converted {} {} into {} target(s) as transaction {}",
            source_amount,
            source_currency,
            amounts.len(),
            transaction_id
        );

        Ok(Some(ConversionOutcome {
            amounts,
            transaction_id,
        }))
    }

    async fn get_exchange_rates(
        &self,
        source_currency: &str,
        target_currencies: &[String],
    ) -> Option<RateSnapshot> {
        self.adapter
            .fetch_latest(source_currency, target_currencies)
            .await
    }

    fn get_transaction(&self, id: &str) -> Result<Option<TransactionRecord>> {
        self.ledger.get_by_id(id)
    }

    fn get_transactions_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionRecord>> {
        self.ledger.list_by_date_range(start, end)
    }
}
