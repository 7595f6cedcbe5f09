//! Exchange module - the caller-facing service consumed by the HTTP layer.

mod exchange_model;
mod exchange_service;
mod exchange_traits;

#[cfg(test)]
mod exchange_service_tests;

pub use exchange_model::ConversionOutcome;
pub use exchange_service::ExchangeService;
pub use exchange_traits::ExchangeServiceTrait;
