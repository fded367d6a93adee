//! # Grocery List Module
//!
//! Arranges consolidated entries the way a shopper walks through them:
//! by store, then by grocery category within each store. Every level keeps
//! the order in which its first entry appeared.

use crate::consolidator::{consolidate_ingredients, IngredientConsolidator, DEFAULT_CATEGORY};
use crate::ingredient_model::{ConsolidatedEntry, IngredientRecord};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store name used for entries without an assigned store
pub const UNASSIGNED_STORE: &str = "Unassigned";

/// Entries sharing one grocery category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: String,
    pub items: Vec<ConsolidatedEntry>,
}

/// Entries bought at one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    pub store: String,
    pub categories: Vec<CategorySection>,
}

/// A consolidated shopping list grouped by store and category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GroceryList {
    pub stores: Vec<StoreSection>,
}

impl GroceryList {
    /// Consolidate `records` with the default configuration and group the result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_consolidation::grocery_list::GroceryList;
    /// use ingredient_consolidation::ingredient_model::IngredientRecord;
    ///
    /// let list = GroceryList::from_records(&[
    ///     IngredientRecord::new("Onion", 1).with_category("produce").with_store("Market"),
    ///     IngredientRecord::new("diced onion", 2).with_category("produce").with_store("Market"),
    ///     IngredientRecord::new("Milk", "1").with_unit("cup").with_category("dairy"),
    /// ]);
    ///
    /// assert_eq!(list.stores.len(), 2);
    /// assert_eq!(list.item_count(), 2);
    /// ```
    pub fn from_records(records: &[IngredientRecord]) -> Self {
        Self::from_entries(consolidate_ingredients(records))
    }

    /// Consolidate with a configured consolidator and group the result
    pub fn with_consolidator(
        consolidator: &IngredientConsolidator,
        records: &[IngredientRecord],
    ) -> Self {
        Self::from_entries(consolidator.consolidate(records))
    }

    /// Group already-consolidated entries
    pub fn from_entries(entries: Vec<ConsolidatedEntry>) -> Self {
        let mut stores: Vec<(String, Vec<ConsolidatedEntry>)> = Vec::new();

        for entry in entries {
            let store = entry
                .store
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(UNASSIGNED_STORE)
                .to_string();

            match stores.iter_mut().find(|(name, _)| *name == store) {
                Some((_, items)) => items.push(entry),
                None => stores.push((store, vec![entry])),
            }
        }

        debug!("Grouped grocery list into {} stores", stores.len());

        Self {
            stores: stores
                .into_iter()
                .map(|(store, items)| StoreSection {
                    store,
                    categories: group_by_category(items),
                })
                .collect(),
        }
    }

    /// Number of consolidated entries across all stores
    pub fn item_count(&self) -> usize {
        self.entries().count()
    }

    /// Every entry, store by store and category by category
    pub fn entries(&self) -> impl Iterator<Item = &ConsolidatedEntry> {
        self.stores
            .iter()
            .flat_map(|s| s.categories.iter())
            .flat_map(|c| c.items.iter())
    }

    /// Section for a store, if any entry is bought there
    pub fn store(&self, store: &str) -> Option<&StoreSection> {
        self.stores.iter().find(|s| s.store == store)
    }
}

impl StoreSection {
    /// Section for a category within this store
    pub fn category(&self, category: &str) -> Option<&CategorySection> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Group entries by grocery category, keeping first-seen order
pub fn group_by_category(entries: impl IntoIterator<Item = ConsolidatedEntry>) -> Vec<CategorySection> {
    let mut sections: Vec<CategorySection> = Vec::new();

    for entry in entries {
        let category = if entry.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            entry.category.clone()
        };

        match sections.iter_mut().find(|s| s.category == category) {
            Some(section) => section.items.push(entry),
            None => sections.push(CategorySection {
                category,
                items: vec![entry],
            }),
        }
    }

    sections
}

impl fmt::Display for GroceryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grocery List ({} items):", self.item_count())?;

        for store in &self.stores {
            writeln!(f, "{}", store.store)?;
            for section in &store.categories {
                writeln!(f, "  {}:", section.category)?;
                for item in &section.items {
                    writeln!(f, "    • {}", item)?;
                }
            }
        }

        Ok(())
    }
}
