//! Ledger trait definitions.

use chrono::NaiveDate;

use super::ledger_model::TransactionRecord;
use crate::conversion::ConversionResult;
use crate::errors::{Result, StorageError};

/// Key-value seam to the persistent record store.
///
/// Any store with per-key atomic `set`/`get` satisfies the ledger's needs:
/// records are written once under a fresh random key and never updated, so
/// no multi-key transactions are required. `keys` exists so the ledger can
/// rebuild its date index at construction.
pub trait TransactionStore: Send + Sync {
    fn set(&self, key: &str, value: String) -> std::result::Result<(), StorageError>;
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;
    fn keys(&self) -> std::result::Result<Vec<String>, StorageError>;
}

/// Trait defining the contract for transaction ledger operations.
///
/// `get_by_id` and `list_by_date_range` are independent single-purpose
/// lookups; supplying either an id or a date range (never both) is the
/// caller's contract, not enforced here.
pub trait TransactionLedgerTrait: Send + Sync {
    /// Persists `result` under a fresh opaque id and returns the id.
    fn record(&self, result: ConversionResult) -> Result<String>;

    /// Exact-key lookup. Unknown ids are `Ok(None)`, never an error.
    fn get_by_id(&self, id: &str) -> Result<Option<TransactionRecord>>;

    /// Every record whose date lies in `[start, end]` inclusive, ordered by
    /// date (insertion order within a date).
    fn list_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionRecord>>;
}
