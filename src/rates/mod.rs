//! Rates module - exchange-rate domain models and the provider adapter.

mod rates_adapter;
mod rates_model;

pub use rates_adapter::RateAdapter;
pub use rates_model::{ExchangeRate, RateSeries, RateSnapshot};
