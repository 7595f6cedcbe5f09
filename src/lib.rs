//! fx-ledger - currency conversion core.
//!
//! This crate contains the core business logic for the exchange-rate
//! service: a rate-provider client behind an async trait, an adapter that
//! normalizes provider failures into absent results, a pure conversion
//! calculator, and a persisted transaction ledger. It is storage-agnostic:
//! the ledger talks to any key-value store implementing
//! [`ledger::TransactionStore`].
//!
//! The HTTP routing layer (endpoints, request parsing, authentication) is an
//! external consumer of [`exchange::ExchangeService`] and lives outside this
//! crate.

pub mod conversion;
pub mod errors;
pub mod exchange;
pub mod ledger;
pub mod providers;
pub mod rates;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
