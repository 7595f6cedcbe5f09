//! Domain models for exchange rates.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One currency-to-rate pair. Immutable value; `rate` is positive and
/// finite, enforced where provider data enters the system.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub currency: String,
    pub rate: f64,
}

/// One provider response for a single date: a dated set of currency->rate
/// pairs for a base currency. Currency codes are unique and ordered by code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    pub base: String,
    pub date: NaiveDate,
    pub rates: Vec<ExchangeRate>,
}

impl RateSnapshot {
    /// The rate for `currency`, if present.
    pub fn rate_for(&self, currency: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|r| r.currency == currency)
            .map(|r| r.rate)
    }

    /// Consumes the snapshot, keeping only rates whose currency satisfies
    /// `keep`.
    pub fn retain_currencies(mut self, keep: impl Fn(&str) -> bool) -> Self {
        self.rates.retain(|r| keep(&r.currency));
        self
    }
}

/// Dated rate sets over an inclusive date range. Every key lies within
/// `[start_date, end_date]`; dates need not be contiguous (the provider may
/// omit non-trading days).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateSeries {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base: String,
    pub rates_by_date: BTreeMap<NaiveDate, Vec<ExchangeRate>>,
}
