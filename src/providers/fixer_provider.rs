//! Fixer-style exchange-rate provider client.
//!
//! Issues HTTP GETs against a fixer.io-compatible API and parses the JSON
//! bodies into the domain models. Every request is keyed by an `access_key`
//! query parameter. Four query shapes are supported: latest rates, a
//! point-in-time historical date, a dated range with an explicit base, and a
//! time series in the provider's default base.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use super::models::{DatedRatesResponse, TimeSeriesResponse};
use super::provider_errors::ProviderError;
use super::provider_traits::RateProvider;
use crate::rates::{ExchangeRate, RateSeries, RateSnapshot};

/// Provider id constant
const PROVIDER_ID: &str = "FIXER";

/// Default API endpoint.
const DEFAULT_BASE_URL: &str = "https://data.fixer.io/api";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for a fixer.io-compatible rate feed.
pub struct FixerProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FixerProvider {
    /// Create a new provider client with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a non-default endpoint (test doubles, proxies).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn latest_url(&self, base: &str, symbols: &[String]) -> String {
        format!(
            "{}/latest?access_key={}&base={}&symbols={}",
            self.base_url,
            self.api_key,
            base,
            symbols.join(",")
        )
    }

    fn historical_url(&self, date: NaiveDate, base: &str, symbols: &[String]) -> String {
        format!(
            "{}/{}?access_key={}&base={}&symbols={}",
            self.base_url,
            date.format("%Y-%m-%d"),
            self.api_key,
            base,
            symbols.join(",")
        )
    }

    fn timeseries_url(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        base: Option<&str>,
        symbols: &[String],
    ) -> String {
        let mut url = format!(
            "{}/timeseries?access_key={}&start_date={}&end_date={}",
            self.base_url,
            self.api_key,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );
        if let Some(base) = base {
            url.push_str(&format!("&base={}", base));
        }
        url.push_str(&format!("&symbols={}", symbols.join(",")));
        url
    }

    /// GET `url` and return the raw body of a 200 response.
    async fn get_body(&self, url: &str) -> Result<String, ProviderError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status.as_u16() != 200 {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: format!("Request failed with status code {}", status.as_u16()),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl RateProvider for FixerProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest(
        &self,
        base: &str,
        symbols: &[String],
    ) -> Result<RateSnapshot, ProviderError> {
        let body = self.get_body(&self.latest_url(base, symbols)).await?;
        parse_snapshot(&body)
    }

    async fn historical(
        &self,
        date: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Result<RateSnapshot, ProviderError> {
        let body = self
            .get_body(&self.historical_url(date, base, symbols))
            .await?;
        parse_snapshot(&body)
    }

    async fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        base: &str,
        symbols: &[String],
    ) -> Result<RateSeries, ProviderError> {
        let body = self
            .get_body(&self.timeseries_url(start, end, Some(base), symbols))
            .await?;
        parse_series(&body)
    }

    async fn time_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        symbols: &[String],
    ) -> Result<RateSeries, ProviderError> {
        let body = self
            .get_body(&self.timeseries_url(start, end, None, symbols))
            .await?;
        parse_series(&body)
    }
}

/// Turns a wire `rates` object into validated entries, ordered by currency
/// code (JSON objects carry no stable order). Zero entries is valid.
fn parse_rate_entries(rates: HashMap<String, f64>) -> Result<Vec<ExchangeRate>, ProviderError> {
    let mut entries = Vec::with_capacity(rates.len());
    for (currency, rate) in rates {
        if currency.is_empty() {
            return Err(ProviderError::Parse(
                "empty currency code in rates object".to_string(),
            ));
        }
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ProviderError::Parse(format!(
                "invalid rate {} for currency {}",
                rate, currency
            )));
        }
        entries.push(ExchangeRate { currency, rate });
    }
    entries.sort_by(|a, b| a.currency.cmp(&b.currency));
    Ok(entries)
}

fn parse_snapshot(body: &str) -> Result<RateSnapshot, ProviderError> {
    let response: DatedRatesResponse = serde_json::from_str(body)?;
    Ok(RateSnapshot {
        base: response.base,
        date: response.date,
        rates: parse_rate_entries(response.rates)?,
    })
}

fn parse_series(body: &str) -> Result<RateSeries, ProviderError> {
    let response: TimeSeriesResponse = serde_json::from_str(body)?;
    let mut rates_by_date = BTreeMap::new();
    for (date_str, rates) in response.rates {
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| ProviderError::Parse(format!("invalid date key {}: {}", date_str, e)))?;
        if date < response.start_date || date > response.end_date {
            return Err(ProviderError::Parse(format!(
                "date key {} outside series range {}..={}",
                date, response.start_date, response.end_date
            )));
        }
        rates_by_date.insert(date, parse_rate_entries(rates)?);
    }
    Ok(RateSeries {
        start_date: response.start_date,
        end_date: response.end_date,
        base: response.base,
        rates_by_date,
    })
}
