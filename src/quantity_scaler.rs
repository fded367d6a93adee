//! # Quantity Scaler
//!
//! Scales recipe quantities from a recipe's native serving count to the
//! serving count requested for a prep plan. No rounding happens here; the
//! formatter and consolidator round downstream.

use crate::ingredient_model::{IngredientRecord, QuantityInput};
use crate::quantity_parser::parse_quantity;

/// Multiply a quantity by a serving ratio
///
/// # Examples
///
/// ```rust
/// use ingredient_consolidation::quantity_scaler::scale_quantity;
///
/// assert_eq!(scale_quantity(&"2".into(), 1.5), 3.0);
/// assert_eq!(scale_quantity(&"1/2".into(), 3.0), 1.5);
/// ```
pub fn scale_quantity(quantity: &QuantityInput, ratio: f64) -> f64 {
    parse_quantity(quantity) * ratio
}

/// Ratio between requested and native servings
///
/// Returns `None` when the native serving count is missing or unusable
/// (zero, negative, non-finite) or the requested count is unusable.
pub fn checked_serving_ratio(requested: f64, native: Option<f64>) -> Option<f64> {
    let native = native.filter(|n| n.is_finite() && *n > 0.0)?;
    if !requested.is_finite() || requested < 0.0 {
        return None;
    }
    Some(requested / native)
}

/// [`checked_serving_ratio`], falling back to 1 (no scaling)
pub fn serving_ratio(requested: f64, native: Option<f64>) -> f64 {
    checked_serving_ratio(requested, native).unwrap_or(1.0)
}

/// Copy of `record` with its quantity scaled by `ratio`
pub fn scale_record(record: &IngredientRecord, ratio: f64) -> IngredientRecord {
    IngredientRecord {
        quantity: QuantityInput::Number(scale_quantity(&record.quantity, ratio)),
        ..record.clone()
    }
}
