//! # Ingredient Record Data Model
//!
//! This module defines the plain data structures exchanged with the
//! consolidation engine: the ingredient records callers hand in and the
//! consolidated entries handed back.
//!
//! ## Core Concepts
//!
//! - **QuantityInput**: A raw quantity as entered by a user (number, free text or missing)
//! - **IngredientRecord**: One ingredient line contributed by a planned meal
//! - **QuantityUnit**: A parsed amount paired with the unit it was written in
//! - **ConsolidatedEntry**: One grouped, display-ready line of a shopping list
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_consolidation::ingredient_model::IngredientRecord;
//!
//! let flour = IngredientRecord::new("Flour", "1 1/2")
//!     .with_unit("cup")
//!     .with_category("pantry")
//!     .used_in("Pancakes");
//!
//! assert_eq!(flour.unit.as_deref(), Some("cup"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A quantity as it arrives from user-entered recipe data
///
/// Deserializes from any JSON value: numbers and strings are kept, anything
/// else (`null`, booleans, arrays, objects) reads as `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum QuantityInput {
    /// Already numeric (e.g. `1.5`)
    Number(f64),
    /// Free text: integers, decimals, fractions, unicode glyphs, mixed numbers
    Text(String),
    /// Absent, `null`, or neither a number nor a string
    #[default]
    Missing,
}

impl<'de> Deserialize<'de> for QuantityInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map_or(QuantityInput::Missing, QuantityInput::Number),
            serde_json::Value::String(text) => QuantityInput::Text(text),
            _ => QuantityInput::Missing,
        })
    }
}

impl From<f64> for QuantityInput {
    fn from(value: f64) -> Self {
        QuantityInput::Number(value)
    }
}

impl From<i32> for QuantityInput {
    fn from(value: i32) -> Self {
        QuantityInput::Number(f64::from(value))
    }
}

impl From<&str> for QuantityInput {
    fn from(value: &str) -> Self {
        QuantityInput::Text(value.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(value: String) -> Self {
        QuantityInput::Text(value)
    }
}

impl<T: Into<QuantityInput>> From<Option<T>> for QuantityInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(QuantityInput::Missing, Into::into)
    }
}

impl fmt::Display for QuantityInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityInput::Number(n) => write!(f, "{}", n),
            QuantityInput::Text(text) => write!(f, "{}", text),
            QuantityInput::Missing => Ok(()),
        }
    }
}

/// One ingredient line contributed by a recipe
///
/// Records are never mutated by the consolidation engine; it builds new
/// output entries instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    /// Ingredient name as written (e.g. "Fresh Diced Onion")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Raw quantity
    #[serde(default)]
    pub quantity: QuantityInput,

    /// Unit as written (e.g. "cups", "Tbsp"), if any
    #[serde(default)]
    pub unit: Option<String>,

    /// Free-form grocery category (e.g. "produce")
    #[serde(default)]
    pub category: Option<String>,

    /// Grocery store this ingredient is bought at
    #[serde(default)]
    pub store: Option<String>,

    /// Names of the recipes contributing this line
    #[serde(default, deserialize_with = "null_as_empty")]
    pub used_in_meals: Vec<String>,
}

impl IngredientRecord {
    /// Create a record with a name and quantity, no unit
    pub fn new(name: &str, quantity: impl Into<QuantityInput>) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.into(),
            ..Default::default()
        }
    }

    /// Set the unit
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Set the grocery category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Set the grocery store
    pub fn with_store(mut self, store: &str) -> Self {
        self.store = Some(store.to_string());
        self
    }

    /// Record that a recipe uses this ingredient
    pub fn used_in(mut self, meal: &str) -> Self {
        self.used_in_meals.push(meal.to_string());
        self
    }

    /// Unit as written, or the empty string when absent
    pub fn unit_str(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }
}

/// A parsed amount together with the unit it was expressed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityUnit {
    pub quantity: f64,
    pub unit: String,
}

impl QuantityUnit {
    pub fn new(quantity: f64, unit: &str) -> Self {
        Self {
            quantity,
            unit: unit.to_string(),
        }
    }
}

/// One consolidated line of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedEntry {
    /// Name as written in the first record seen for this group
    pub name: String,

    /// Merged amount expressed in `unit`, rounded to two decimals
    pub quantity: f64,

    /// Unit of the first record seen for this group (normalized)
    pub unit: String,

    /// Grocery category of the first record seen, "Other" when absent
    pub category: String,

    /// Grocery store of the first record seen
    #[serde(default)]
    pub store: Option<String>,

    /// Human-friendly quantity, unit and any variant suffix (e.g. "2 cups + 3 clove")
    pub display_quantity: String,

    /// Every contributing raw amount, in input order
    pub original_units: Vec<QuantityUnit>,

    /// Amounts whose unit could not be merged into `unit`
    pub variants: Vec<QuantityUnit>,

    /// Contributing recipe names, deduplicated, first-seen order
    pub used_in_meals: Vec<String>,
}

impl ConsolidatedEntry {
    /// Whether some contributions could not be summed into `quantity`
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

impl fmt::Display for ConsolidatedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_quantity.is_empty() {
            write!(f, "{}", self.name)?;
        } else {
            write!(f, "{} {}", self.display_quantity, self.name)?;
        }

        if !self.used_in_meals.is_empty() {
            write!(f, " ({})", self.used_in_meals.join(", "))?;
        }

        Ok(())
    }
}

/// Deserialize `null` the same way as a missing field
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = IngredientRecord::new("Onion", "2")
            .with_unit("whole")
            .with_category("produce")
            .with_store("Market")
            .used_in("Soup")
            .used_in("Salad");

        assert_eq!(record.name, "Onion");
        assert_eq!(record.quantity, QuantityInput::Text("2".to_string()));
        assert_eq!(record.unit_str(), "whole");
        assert_eq!(record.category.as_deref(), Some("produce"));
        assert_eq!(record.store.as_deref(), Some("Market"));
        assert_eq!(record.used_in_meals, vec!["Soup", "Salad"]);
    }

    #[test]
    fn test_quantity_input_conversions() {
        assert_eq!(QuantityInput::from(1.5), QuantityInput::Number(1.5));
        assert_eq!(QuantityInput::from(2), QuantityInput::Number(2.0));
        assert_eq!(QuantityInput::from("½"), QuantityInput::Text("½".to_string()));
        assert_eq!(QuantityInput::from(None::<f64>), QuantityInput::Missing);
        assert_eq!(QuantityInput::from(Some("3")), QuantityInput::Text("3".to_string()));
    }

    #[test]
    fn test_missing_unit_reads_as_empty() {
        let record = IngredientRecord::new("Eggs", 3);
        assert_eq!(record.unit_str(), "");
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "name": "Milk",
            "quantity": "1 1/2",
            "unit": "cups",
            "category": "dairy",
            "store": null,
            "usedInMeals": ["Pancakes"]
        }"#;

        let record: IngredientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Milk");
        assert_eq!(record.quantity, QuantityInput::Text("1 1/2".to_string()));
        assert_eq!(record.unit.as_deref(), Some("cups"));
        assert_eq!(record.store, None);
        assert_eq!(record.used_in_meals, vec!["Pancakes"]);
    }

    #[test]
    fn test_deserialize_tolerates_nulls() {
        let json = r#"{"name": null, "quantity": null, "unit": null, "usedInMeals": null}"#;

        let record: IngredientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.quantity, QuantityInput::Missing);
        assert!(record.unit.is_none());
        assert!(record.used_in_meals.is_empty());
    }

    #[test]
    fn test_deserialize_numeric_quantity() {
        let record: IngredientRecord =
            serde_json::from_str(r#"{"name": "Butter", "quantity": 0.5, "unit": "cup"}"#).unwrap();
        assert_eq!(record.quantity, QuantityInput::Number(0.5));
    }

    #[test]
    fn test_deserialize_other_json_quantities_as_missing() {
        for quantity in ["true", "false", "[1, 2]", r#"{"amount": 2}"#] {
            let json = format!(r#"{{"name": "Salt", "quantity": {}}}"#, quantity);
            let record: IngredientRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record.quantity, QuantityInput::Missing, "quantity {}", quantity);
        }
    }

    #[test]
    fn test_quantity_serializes_as_plain_value() {
        assert_eq!(serde_json::to_value(QuantityInput::Number(1.5)).unwrap(), 1.5);
        assert_eq!(serde_json::to_value(QuantityInput::from("½")).unwrap(), "½");
        assert!(serde_json::to_value(QuantityInput::Missing).unwrap().is_null());
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = ConsolidatedEntry {
            name: "Flour".to_string(),
            quantity: 2.0,
            unit: "cup".to_string(),
            category: "pantry".to_string(),
            store: None,
            display_quantity: "2 cup".to_string(),
            original_units: vec![QuantityUnit::new(1.0, "cup"), QuantityUnit::new(1.0, "cup")],
            variants: Vec::new(),
            used_in_meals: vec!["Bread".to_string()],
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["displayQuantity"], "2 cup");
        assert_eq!(value["originalUnits"][0]["unit"], "cup");
        assert_eq!(value["usedInMeals"][0], "Bread");
        assert!(!entry.has_variants());
    }

    #[test]
    fn test_entry_display() {
        let entry = ConsolidatedEntry {
            name: "Garlic".to_string(),
            quantity: 2.0,
            unit: "clove".to_string(),
            category: "produce".to_string(),
            store: None,
            display_quantity: "2 clove + 1 tbsp".to_string(),
            original_units: Vec::new(),
            variants: vec![QuantityUnit::new(1.0, "tbsp")],
            used_in_meals: vec!["Pasta".to_string(), "Stir Fry".to_string()],
        };

        assert_eq!(entry.to_string(), "2 clove + 1 tbsp Garlic (Pasta, Stir Fry)");
        assert!(entry.has_variants());
    }
}
