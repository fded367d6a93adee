//! # Unit Registry
//!
//! Static table of every unit spelling the consolidation engine understands.
//! Each alias maps to a [`UnitCategory`] and a conversion rate to that
//! category's base unit (milliliter, gram, piece).
//!
//! Plurals are not stemmed: every plural spelling is registered explicitly.
//! Unknown units behave like a bare count (`Count`, rate 1).

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Physical dimension of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Base unit: milliliter
    Volume,
    /// Base unit: gram
    Weight,
    /// Base unit: piece
    Count,
}

impl UnitCategory {
    /// Name of the category's base unit
    pub fn base_unit(&self) -> &'static str {
        match self {
            UnitCategory::Volume => "ml",
            UnitCategory::Weight => "g",
            UnitCategory::Count => "piece",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitCategory::Volume => write!(f, "volume"),
            UnitCategory::Weight => write!(f, "weight"),
            UnitCategory::Count => write!(f, "count"),
        }
    }
}

/// A registered unit spelling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    pub alias: &'static str,
    pub category: UnitCategory,
    /// Multiplier to the category's base unit
    pub rate_to_base: f64,
}

/// Volume units, in milliliters
pub const VOLUME_UNITS: &[(&str, f64)] = &[
    ("ml", 1.0),
    ("milliliter", 1.0),
    ("milliliters", 1.0),
    ("millilitre", 1.0),
    ("millilitres", 1.0),
    ("l", 1000.0),
    ("liter", 1000.0),
    ("liters", 1000.0),
    ("litre", 1000.0),
    ("litres", 1000.0),
    ("tsp", 4.92892),
    ("teaspoon", 4.92892),
    ("teaspoons", 4.92892),
    ("tbsp", 14.7868),
    ("tablespoon", 14.7868),
    ("tablespoons", 14.7868),
    ("fl oz", 29.5735),
    ("fluid ounce", 29.5735),
    ("fluid ounces", 29.5735),
    ("cup", 236.588),
    ("cups", 236.588),
    ("pint", 473.176),
    ("pints", 473.176),
    ("pt", 473.176),
    ("quart", 946.353),
    ("quarts", 946.353),
    ("qt", 946.353),
    ("gallon", 3785.41),
    ("gallons", 3785.41),
    ("gal", 3785.41),
];

/// Weight units, in grams
pub const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("mg", 0.001),
    ("milligram", 0.001),
    ("milligrams", 0.001),
    ("g", 1.0),
    ("gram", 1.0),
    ("grams", 1.0),
    ("kg", 1000.0),
    ("kilogram", 1000.0),
    ("kilograms", 1000.0),
    ("oz", 28.3495),
    ("ounce", 28.3495),
    ("ounces", 28.3495),
    ("lb", 453.592),
    ("lbs", 453.592),
    ("pound", 453.592),
    ("pounds", 453.592),
];

/// Count units, in pieces
pub const COUNT_UNITS: &[(&str, f64)] = &[
    ("", 1.0),
    ("piece", 1.0),
    ("pieces", 1.0),
    ("item", 1.0),
    ("items", 1.0),
    ("whole", 1.0),
    ("clove", 1.0),
    ("cloves", 1.0),
    ("slice", 1.0),
    ("slices", 1.0),
    ("can", 1.0),
    ("cans", 1.0),
    ("package", 1.0),
    ("packages", 1.0),
    ("pkg", 1.0),
    ("bunch", 1.0),
    ("bunches", 1.0),
    ("head", 1.0),
    ("heads", 1.0),
    ("stalk", 1.0),
    ("stalks", 1.0),
    ("sprig", 1.0),
    ("sprigs", 1.0),
    ("pinch", 1.0),
    ("pinches", 1.0),
    ("dash", 1.0),
    ("dashes", 1.0),
    ("dozen", 12.0),
];

lazy_static! {
    /// Alias lookup; on a collision the first category registered wins (volume, weight, count)
    static ref UNIT_REGISTRY: HashMap<&'static str, UnitEntry> = {
        let mut map = HashMap::new();
        let tables = [
            (UnitCategory::Volume, VOLUME_UNITS),
            (UnitCategory::Weight, WEIGHT_UNITS),
            (UnitCategory::Count, COUNT_UNITS),
        ];

        for (category, table) in tables {
            for &(alias, rate_to_base) in table {
                map.entry(alias).or_insert(UnitEntry {
                    alias,
                    category,
                    rate_to_base,
                });
            }
        }

        map
    };
}

/// Lower-case and trim a unit spelling before lookup
pub fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Look up a unit spelling
pub fn lookup_unit(unit: &str) -> Option<&'static UnitEntry> {
    UNIT_REGISTRY.get(normalize_unit(unit).as_str())
}

/// Whether the registry knows this spelling (the empty string counts as known)
pub fn is_registered_unit(unit: &str) -> bool {
    lookup_unit(unit).is_some()
}

/// Category of a unit; unrecognized units are `Count`
///
/// # Examples
///
/// ```rust
/// use ingredient_consolidation::unit_registry::{get_unit_category, UnitCategory};
///
/// assert_eq!(get_unit_category("Cups"), UnitCategory::Volume);
/// assert_eq!(get_unit_category("lb"), UnitCategory::Weight);
/// assert_eq!(get_unit_category("handful"), UnitCategory::Count);
/// ```
pub fn get_unit_category(unit: &str) -> UnitCategory {
    lookup_unit(unit).map_or(UnitCategory::Count, |entry| entry.category)
}

/// Rate to the category's base unit; unrecognized units are rate 1
pub fn get_conversion_rate(unit: &str) -> f64 {
    lookup_unit(unit).map_or(1.0, |entry| entry.rate_to_base)
}

/// Every registered alias, in registration order
pub fn registered_units() -> impl Iterator<Item = &'static str> {
    VOLUME_UNITS
        .iter()
        .chain(WEIGHT_UNITS)
        .chain(COUNT_UNITS)
        .map(|(alias, _)| *alias)
}
