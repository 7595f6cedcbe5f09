//! Domain model for conversion results.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The outcome of applying one rate snapshot to a source amount: one
/// computed amount per target currency. Never mutated after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub source_currency: String,
    pub source_amount: f64,
    pub date: NaiveDate,
    pub amounts: HashMap<String, f64>,
}
