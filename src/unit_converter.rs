//! # Unit Converter
//!
//! Converts quantities between units of the same category through the
//! registry's base-unit rates. Cross-category conversion is not possible
//! without ingredient densities, so it yields `None`.

use crate::ingredient_model::QuantityInput;
use crate::quantity_parser::parse_quantity;
use crate::unit_registry::{get_conversion_rate, get_unit_category, normalize_unit};

/// Convert a quantity from one unit to another
///
/// Returns `None` when the units belong to different categories. Identical
/// units (after normalization) return the parsed quantity untouched.
///
/// # Examples
///
/// ```rust
/// use ingredient_consolidation::unit_converter::convert_unit;
///
/// let tbsp = convert_unit(&"1".into(), "cup", "tbsp").unwrap();
/// assert!((tbsp - 16.0).abs() < 0.01);
/// assert_eq!(convert_unit(&"1".into(), "cup", "lb"), None);
/// ```
pub fn convert_unit(quantity: &QuantityInput, from_unit: &str, to_unit: &str) -> Option<f64> {
    convert_amount(parse_quantity(quantity), from_unit, to_unit)
}

/// [`convert_unit`] for an already-parsed amount
pub fn convert_amount(amount: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    if normalize_unit(from_unit) == normalize_unit(to_unit) {
        return Some(amount);
    }

    if get_unit_category(from_unit) != get_unit_category(to_unit) {
        return None;
    }

    Some(amount * get_conversion_rate(from_unit) / get_conversion_rate(to_unit))
}

/// Whether two units can be grouped together
///
/// An empty unit is compatible with anything, since a missing unit says
/// nothing about the dimension.
pub fn are_units_compatible(unit1: &str, unit2: &str) -> bool {
    if unit1.trim().is_empty() || unit2.trim().is_empty() {
        return true;
    }
    get_unit_category(unit1) == get_unit_category(unit2)
}
