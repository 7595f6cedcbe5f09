//! Transaction ledger service.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

use super::ledger_model::TransactionRecord;
use super::ledger_traits::{TransactionLedgerTrait, TransactionStore};
use crate::conversion::ConversionResult;
use crate::errors::{Result, StorageError, ValidationError};

/// Append-only ledger of conversion records.
///
/// Records are persisted as JSON under a random id and never updated in
/// place. Date-range queries run against a sorted secondary index
/// (date -> ids) rather than scanning every stored key per query; the index
/// is seeded by one full scan at construction, the only use of
/// [`TransactionStore::keys`].
pub struct TransactionLedger {
    store: Arc<dyn TransactionStore>,
    date_index: RwLock<BTreeMap<NaiveDate, Vec<String>>>,
}

impl std::fmt::Debug for TransactionLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionLedger")
            .field("date_index", &self.date_index)
            .finish_non_exhaustive()
    }
}

impl TransactionLedger {
    /// Builds the ledger over `store`, scanning existing records once to
    /// seed the date index.
    pub fn new(store: Arc<dyn TransactionStore>) -> Result<Self> {
        let mut index: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        for key in store.keys()? {
            if let Some(raw) = store.get(&key)? {
                let record: TransactionRecord =
                    serde_json::from_str(&raw).map_err(StorageError::Serialization)?;
                index.entry(record.date).or_default().push(key);
            }
        }
        debug!("transaction ledger indexed {} date(s)", index.len());
        Ok(Self {
            store,
            date_index: RwLock::new(index),
        })
    }

    fn load(&self, id: &str) -> Result<Option<TransactionRecord>> {
        match self.store.get(id)? {
            Some(raw) => {
                let record = serde_json::from_str(&raw).map_err(StorageError::Serialization)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

impl TransactionLedgerTrait for TransactionLedger {
    fn record(&self, result: ConversionResult) -> Result<String> {
        // v4 uuid: cryptographically random, URL-safe, 122 bits of entropy.
        // Collisions are not checked against existing keys (accepted risk at
        // this scale).
        let id = Uuid::new_v4().to_string();
        let record = TransactionRecord::from_conversion(id.clone(), result);
        let raw = serde_json::to_string(&record).map_err(StorageError::Serialization)?;
        self.store.set(&id, raw)?;

        let mut index = self
            .date_index
            .write()
            .map_err(|e| StorageError::Index(e.to_string()))?;
        index.entry(record.date).or_default().push(id.clone());

        debug!("recorded transaction {} dated {}", id, record.date);
        Ok(id)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<TransactionRecord>> {
        self.load(id)
    }

    fn list_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionRecord>> {
        if start > end {
            return Err(ValidationError::InvalidDateRange { start, end }.into());
        }

        let ids: Vec<String> = {
            let index = self
                .date_index
                .read()
                .map_err(|e| StorageError::Index(e.to_string()))?;
            index
                .range(start..=end)
                .flat_map(|(_, ids)| ids.iter().cloned())
                .collect()
        };

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(record) = self.load(&id)? {
                records.push(record);
            }
        }
        Ok(records)
    }
}
