//! Conversion module - pure conversion arithmetic over rate snapshots.

mod conversion_calculator;
mod conversion_model;

pub use conversion_calculator::ConversionCalculator;
pub use conversion_model::ConversionResult;
