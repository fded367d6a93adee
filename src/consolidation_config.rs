//! # Consolidation Configuration Module
//!
//! Options controlling how the consolidator groups ingredient records.
//! The defaults reproduce the standard grocery-list behavior.

/// What to do with records whose name normalizes to the empty string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyNamePolicy {
    /// All empty-named records share one group
    #[default]
    Merge,
    /// Every empty-named record gets its own group
    Separate,
}

/// Configuration for [`IngredientConsolidator`](crate::consolidator::IngredientConsolidator)
#[derive(Debug, Clone)]
pub struct ConsolidationConfig {
    /// Whether to strip preparation descriptors ("fresh", "diced", ...) from names
    pub strip_descriptors: bool,
    /// Additional whole-word descriptors stripped alongside the built-in ones
    pub extra_descriptors: Vec<String>,
    /// Grouping of records with empty names
    pub empty_names: EmptyNamePolicy,
    /// Whether to log a warning for unit spellings missing from the registry
    pub log_unknown_units: bool,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            strip_descriptors: true,
            extra_descriptors: Vec::new(),
            empty_names: EmptyNamePolicy::Merge,
            log_unknown_units: true,
        }
    }
}
