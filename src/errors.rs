//! Core error types for the exchange-rate service.
//!
//! Provider-specific and storage-specific failures are wrapped here so the
//! rest of the crate can use one `Result` alias. "Not found" is expressed as
//! `Ok(None)` by the query interfaces, never as an error variant.

use chrono::NaiveDate;
use thiserror::Error;

use crate::providers::ProviderError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the exchange-rate service.
///
/// Callers map `Validation` to client-side errors and `Provider`/`Storage`
/// to server-side errors; the wire-level status code is decided by the HTTP
/// layer, not here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Provider operation failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Rate snapshot contains no rates")]
    EmptyRates,

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// Persistent-store failures. Fatal for the current request; not retried.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Store unreachable: {0}")]
    Unavailable(String),

    #[error("Record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Date index unavailable: {0}")]
    Index(String),
}
