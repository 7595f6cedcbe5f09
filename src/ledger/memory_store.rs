//! In-memory transaction store backed by a concurrent map.

use dashmap::DashMap;

use super::ledger_traits::TransactionStore;
use crate::errors::StorageError;

/// DashMap-backed store: per-key atomic set/get, no expiration. Suits tests
/// and single-process deployments; external key-value stores implement
/// [`TransactionStore`] outside this crate.
#[derive(Default)]
pub struct MemoryTransactionStore {
    records: DashMap<String, String>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.records.insert(key.to_string(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.records.get(key).map(|entry| entry.value().clone()))
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.records.iter().map(|entry| entry.key().clone()).collect())
    }
}
