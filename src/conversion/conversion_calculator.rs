//! Pure conversion arithmetic.

use std::collections::HashMap;

use super::conversion_model::ConversionResult;
use crate::errors::ValidationError;
use crate::rates::RateSnapshot;

/// Computes per-target amounts from a rate snapshot. Deterministic, no I/O.
/// Amounts are plain `f64` products with no rounding applied; display
/// formatting is a presentation concern.
pub struct ConversionCalculator;

impl ConversionCalculator {
    /// Applies `snapshot` to `amount`, producing one amount per rate entry.
    ///
    /// Fails if `amount` is not a finite positive number or if the snapshot
    /// carries no rates (nothing to compute).
    pub fn apply(
        snapshot: &RateSnapshot,
        amount: f64,
    ) -> Result<ConversionResult, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount(format!(
                "amount must be a finite positive number, got {}",
                amount
            )));
        }
        if snapshot.rates.is_empty() {
            return Err(ValidationError::EmptyRates);
        }

        let mut amounts = HashMap::with_capacity(snapshot.rates.len());
        for rate in &snapshot.rates {
            amounts.insert(rate.currency.clone(), amount * rate.rate);
        }

        Ok(ConversionResult {
            source_currency: snapshot.base.clone(),
            source_amount: amount,
            date: snapshot.date,
            amounts,
        })
    }
}
