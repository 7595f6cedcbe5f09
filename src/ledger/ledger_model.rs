//! Domain model for persisted transaction records.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::conversion::ConversionResult;

/// One persisted conversion. Created exactly once by the ledger, queryable
/// immediately, never updated. The serialized form is self-describing JSON;
/// `date` serializes as zero-padded ISO-8601 (`YYYY-MM-DD`), which keeps the
/// stored format comparable lexicographically.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub date: NaiveDate,
    pub source_currency: String,
    pub source_amount: f64,
    pub amounts: HashMap<String, f64>,
}

impl TransactionRecord {
    pub fn from_conversion(id: String, result: ConversionResult) -> Self {
        Self {
            id,
            date: result.date,
            source_currency: result.source_currency,
            source_amount: result.source_amount,
            amounts: result.amounts,
        }
    }
}
