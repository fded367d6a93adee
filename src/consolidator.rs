//! # Ingredient Consolidator
//!
//! Merges the ingredient records of many recipes into one shopping list.
//!
//! ## Algorithm
//!
//! A single pass over the records in input order:
//!
//! - Records are grouped by normalized name (see [`NameNormalizer`]).
//! - The first record of a group fixes the group's unit. Later records with a
//!   compatible unit are converted into it and summed.
//! - Records whose unit cannot be converted are kept aside as variants and
//!   shown next to the sum ("2 clove + 1 tbsp") instead of being dropped.
//! - Contributing recipe names are collected without duplicates.
//!
//! Groups come back in the order their first record appeared. The same
//! records in a different order can therefore carry a different unit label
//! (with an equivalent amount).

use crate::consolidation_config::{ConsolidationConfig, EmptyNamePolicy};
use crate::consolidation_errors::ConsolidationError;
use crate::ingredient_model::{ConsolidatedEntry, IngredientRecord, QuantityUnit};
use crate::name_normalizer::NameNormalizer;
use crate::quantity_formatter::{format_amount, round_to_hundredths};
use crate::quantity_parser::parse_quantity;
use crate::unit_converter::{are_units_compatible, convert_amount};
use crate::unit_registry::{get_unit_category, is_registered_unit, normalize_unit};
use log::{debug, info, trace, warn};
use std::collections::{HashMap, HashSet};

/// Category reported for groups whose first record has none
pub const DEFAULT_CATEGORY: &str = "Other";

/// Separator between the merged amount and each unmergeable variant
pub const VARIANT_SEPARATOR: &str = " + ";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Name(String),
    /// Empty-named record kept on its own, by input position
    Unnamed(usize),
}

/// Running state of one shopping-list line
#[derive(Debug)]
struct Group {
    name: String,
    quantity: f64,
    unit: String,
    category: Option<String>,
    store: Option<String>,
    original_units: Vec<QuantityUnit>,
    variants: Vec<QuantityUnit>,
    used_in_meals: Vec<String>,
}

impl Group {
    fn seed(record: &IngredientRecord, amount: f64, unit: String) -> Self {
        let mut group = Self {
            name: record.name.clone(),
            quantity: amount,
            original_units: vec![QuantityUnit::new(amount, &unit)],
            unit,
            category: record.category.clone(),
            store: record.store.clone(),
            variants: Vec::new(),
            used_in_meals: Vec::new(),
        };
        group.add_meals(&record.used_in_meals);
        group
    }

    fn merge(&mut self, record: &IngredientRecord, amount: f64, unit: String) {
        let contribution = QuantityUnit::new(amount, &unit);

        if !are_units_compatible(&self.unit, &unit) {
            debug!(
                "Keeping '{} {}' of '{}' as a variant: incompatible with '{}'",
                amount, unit, self.name, self.unit
            );
            self.variants.push(contribution.clone());
        } else if let Some(converted) = convert_amount(amount, &unit, &self.unit) {
            self.add_amount(converted);
        } else {
            // an empty unit passes the compatibility check but has no rate into a real unit
            debug!(
                "Could not convert '{} {}' into '{}' for '{}', keeping it as a variant",
                amount, unit, self.unit, self.name
            );
            self.variants.push(contribution.clone());
        }

        self.original_units.push(contribution);
        self.add_meals(&record.used_in_meals);
    }

    /// Sum saturates at `f64::MAX` so the total stays finite
    fn add_amount(&mut self, amount: f64) {
        let total = self.quantity + amount;
        if total.is_finite() {
            self.quantity = total;
        } else {
            warn!(
                "Total for '{}' overflows, capping it at the largest representable amount",
                self.name
            );
            self.quantity = f64::MAX;
        }
    }

    fn add_meals(&mut self, meals: &[String]) {
        for meal in meals {
            if !self.used_in_meals.contains(meal) {
                self.used_in_meals.push(meal.clone());
            }
        }
    }

    fn into_entry(self) -> ConsolidatedEntry {
        let display_quantity = self.display_quantity();
        ConsolidatedEntry {
            name: self.name,
            quantity: round_to_hundredths(self.quantity),
            unit: self.unit,
            category: self
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            store: self.store,
            display_quantity,
            original_units: self.original_units,
            variants: self.variants,
            used_in_meals: self.used_in_meals,
        }
    }

    fn display_quantity(&self) -> String {
        let mut parts = vec![append_unit(format_amount(self.quantity), &self.unit)];
        parts.extend(
            self.variants
                .iter()
                .map(|v| append_unit(format_amount(v.quantity), &v.unit)),
        );
        parts.join(VARIANT_SEPARATOR)
    }
}

fn append_unit(amount: String, unit: &str) -> String {
    if unit.is_empty() {
        amount
    } else {
        format!("{} {}", amount, unit)
    }
}

/// Groups and merges ingredient records into shopping-list entries
#[derive(Debug, Clone)]
pub struct IngredientConsolidator {
    normalizer: NameNormalizer,
    config: ConsolidationConfig,
}

impl IngredientConsolidator {
    /// Consolidator with the default configuration
    pub fn new() -> Self {
        Self {
            normalizer: NameNormalizer::new(),
            config: ConsolidationConfig::default(),
        }
    }

    /// Consolidator with a custom configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_consolidation::consolidation_config::ConsolidationConfig;
    /// use ingredient_consolidation::consolidator::IngredientConsolidator;
    ///
    /// let config = ConsolidationConfig {
    ///     extra_descriptors: vec!["large".to_string()],
    ///     ..Default::default()
    /// };
    /// let consolidator = IngredientConsolidator::with_config(config)?;
    /// # Ok::<(), ingredient_consolidation::consolidation_errors::ConsolidationError>(())
    /// ```
    pub fn with_config(config: ConsolidationConfig) -> Result<Self, ConsolidationError> {
        let normalizer = if !config.strip_descriptors {
            NameNormalizer::without_descriptors()
        } else {
            NameNormalizer::with_extra_descriptors(&config.extra_descriptors)?
        };

        debug!(
            "Creating IngredientConsolidator: strip_descriptors={}, extra_descriptors={}, empty_names={:?}",
            config.strip_descriptors,
            config.extra_descriptors.len(),
            config.empty_names
        );

        Ok(Self { normalizer, config })
    }

    /// The configuration in use
    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    /// Grouping key the consolidator would use for `name`
    pub fn normalize_name(&self, name: &str) -> String {
        self.normalizer.normalize(name)
    }

    /// Consolidate records into entries, in order of first appearance
    pub fn consolidate(&self, items: &[IngredientRecord]) -> Vec<ConsolidatedEntry> {
        let mut groups: Vec<Group> = Vec::new();
        let mut index: HashMap<GroupKey, usize> = HashMap::new();
        let mut unknown_units: HashSet<String> = HashSet::new();

        for (position, record) in items.iter().enumerate() {
            let normalized_name = self.normalizer.normalize(&record.name);
            let amount = parse_quantity(&record.quantity);
            let unit = normalize_unit(record.unit_str());

            trace!(
                "Record {}: '{}' -> key='{}', amount={}, unit='{}' ({})",
                position,
                record.name,
                normalized_name,
                amount,
                unit,
                get_unit_category(&unit)
            );

            if self.config.log_unknown_units
                && !is_registered_unit(&unit)
                && unknown_units.insert(unit.clone())
            {
                warn!(
                    "Unrecognized unit '{}' (ingredient '{}'), treating it as a count",
                    unit, record.name
                );
            }

            let key = match (normalized_name.is_empty(), self.config.empty_names) {
                (true, EmptyNamePolicy::Separate) => GroupKey::Unnamed(position),
                _ => GroupKey::Name(normalized_name),
            };

            match index.get(&key).copied() {
                Some(slot) => groups[slot].merge(record, amount, unit),
                None => {
                    index.insert(key, groups.len());
                    groups.push(Group::seed(record, amount, unit));
                }
            }
        }

        info!(
            "Consolidated {} ingredient records into {} entries",
            items.len(),
            groups.len()
        );

        groups.into_iter().map(Group::into_entry).collect()
    }
}

impl Default for IngredientConsolidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Consolidate records with the default configuration
///
/// # Examples
///
/// ```rust
/// use ingredient_consolidation::consolidator::consolidate_ingredients;
/// use ingredient_consolidation::ingredient_model::IngredientRecord;
///
/// let items = vec![
///     IngredientRecord::new("Flour", "1").with_unit("cup"),
///     IngredientRecord::new("flour", "1").with_unit("cup"),
/// ];
/// let entries = consolidate_ingredients(&items);
///
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].quantity, 2.0);
/// assert_eq!(entries[0].display_quantity, "2 cup");
/// ```
pub fn consolidate_ingredients(items: &[IngredientRecord]) -> Vec<ConsolidatedEntry> {
    IngredientConsolidator::new().consolidate(items)
}
