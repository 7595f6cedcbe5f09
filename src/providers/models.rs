//! Wire models for the rate provider's JSON responses.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// Response body of the `latest` and historical-date endpoints.
#[derive(Debug, Deserialize)]
pub(super) struct DatedRatesResponse {
    pub base: String,
    pub date: NaiveDate,
    /// Currency code to rate. An empty object is a valid response.
    pub rates: HashMap<String, f64>,
}

/// Response body of the `timeseries` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TimeSeriesResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base: String,
    /// Date string (`YYYY-MM-DD`) to per-currency rates. Keys are parsed
    /// and range-checked by the client, not by serde.
    pub rates: HashMap<String, HashMap<String, f64>>,
}
