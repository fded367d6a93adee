//! # Ingredient Consolidation
//!
//! Turns the ingredient lists of planned meals into one consolidated
//! shopping list: quantities are parsed from free text, names normalized,
//! compatible units converted and summed, and everything else kept visible
//! as variants.
//!
//! Every function in the engine is pure and total: malformed recipe data
//! degrades to zero quantities or count units instead of failing.

pub mod consolidation_config;
pub mod consolidation_errors;
pub mod consolidator;
pub mod grocery_list;
pub mod ingredient_model;
pub mod name_normalizer;
pub mod prep_plan;
pub mod quantity_formatter;
pub mod quantity_parser;
pub mod quantity_scaler;
pub mod record_loader;
pub mod unit_converter;
pub mod unit_registry;

// Re-export types for easier access
pub use consolidation_config::{ConsolidationConfig, EmptyNamePolicy};
pub use consolidation_errors::ConsolidationError;
pub use consolidator::{consolidate_ingredients, IngredientConsolidator};
pub use grocery_list::GroceryList;
pub use ingredient_model::{ConsolidatedEntry, IngredientRecord, QuantityInput, QuantityUnit};
pub use name_normalizer::normalize_ingredient_name;
pub use prep_plan::{PrepPlan, PrepPlanBuilder, PrepRecipe};
pub use quantity_formatter::format_quantity;
pub use quantity_parser::parse_quantity;
pub use quantity_scaler::scale_quantity;
pub use unit_converter::{are_units_compatible, convert_unit};
pub use unit_registry::{get_conversion_rate, get_unit_category, UnitCategory};
