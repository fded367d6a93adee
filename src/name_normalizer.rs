//! # Name Normalizer
//!
//! Builds the grouping key for an ingredient name so that "Fresh Diced Onion"
//! and "onion" land in the same shopping-list line.

use crate::consolidation_errors::ConsolidationError;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Preparation and state descriptors that never fragment grouping
pub const DEFAULT_DESCRIPTORS: [&str; 9] = [
    "fresh", "dried", "frozen", "chopped", "diced", "minced", "sliced", "whole", "ground",
];

lazy_static! {
    static ref DEFAULT_DESCRIPTOR_REGEX: Regex = descriptor_regex(&DEFAULT_DESCRIPTORS[..])
        .expect("Default descriptor pattern should be valid");
}

/// Strips descriptor words and whitespace noise from ingredient names
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    /// Whole-word descriptor pattern; `None` keeps every word
    descriptors: Option<Regex>,
}

impl NameNormalizer {
    /// Normalizer removing the built-in descriptors
    pub fn new() -> Self {
        Self {
            descriptors: Some(DEFAULT_DESCRIPTOR_REGEX.clone()),
        }
    }

    /// Normalizer that only lower-cases and collapses whitespace
    pub fn without_descriptors() -> Self {
        Self { descriptors: None }
    }

    /// Normalizer removing the built-in descriptors plus `extra`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_consolidation::name_normalizer::NameNormalizer;
    ///
    /// let normalizer = NameNormalizer::with_extra_descriptors(&["large", "boneless"])?;
    /// assert_eq!(normalizer.normalize("2 Large Boneless Chicken Breasts"), "2 chicken breasts");
    /// # Ok::<(), ingredient_consolidation::consolidation_errors::ConsolidationError>(())
    /// ```
    pub fn with_extra_descriptors<S: AsRef<str>>(extra: &[S]) -> Result<Self, ConsolidationError> {
        if extra.is_empty() {
            return Ok(Self::new());
        }

        let mut words: Vec<String> = DEFAULT_DESCRIPTORS.iter().map(|w| w.to_string()).collect();
        for raw in extra {
            let word = raw.as_ref().trim();
            if word.is_empty() {
                return Err(ConsolidationError::InvalidDescriptor(raw.as_ref().to_string()));
            }
            words.push(word.to_lowercase());
        }

        Ok(Self {
            descriptors: Some(descriptor_regex(&words)?),
        })
    }

    /// Produce the grouping key for a name
    pub fn normalize(&self, name: &str) -> String {
        let collapsed = collapse_whitespace(&name.to_lowercase());

        let Some(pattern) = &self.descriptors else {
            return collapsed;
        };

        let stripped = pattern.replace_all(&collapsed, " ");
        let key = collapse_whitespace(&stripped);
        trace!("Normalized ingredient name '{}' -> '{}'", name, key);
        key
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a name with the built-in descriptor list
///
/// # Examples
///
/// ```rust
/// use ingredient_consolidation::name_normalizer::normalize_ingredient_name;
///
/// assert_eq!(normalize_ingredient_name("Fresh Diced Onion"), "onion");
/// assert_eq!(normalize_ingredient_name("  Olive   Oil "), "olive oil");
/// ```
pub fn normalize_ingredient_name(name: &str) -> String {
    NameNormalizer::new().normalize(name)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

fn descriptor_regex<S: AsRef<str>>(words: &[S]) -> Result<Regex, regex::Error> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w.as_ref()))
        .collect::<Vec<String>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
}
