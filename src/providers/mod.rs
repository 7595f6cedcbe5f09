//! Rate providers module - the client seam to the remote exchange-rate feed.

mod fixer_provider;
mod models;
mod provider_errors;
mod provider_traits;

pub use fixer_provider::FixerProvider;
pub use provider_errors::ProviderError;
pub use provider_traits::RateProvider;
