//! Caller-facing result models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What a successful conversion hands back to the caller: the computed
/// per-target amounts and the id of the recorded transaction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOutcome {
    pub amounts: HashMap<String, f64>,
    pub transaction_id: String,
}
