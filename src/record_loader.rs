//! # Record Loader
//!
//! Reads ingredient records and prep recipes from JSON, in the same
//! camelCase shape the grocery-list and prep-plan callers exchange.

use crate::ingredient_model::IngredientRecord;
use crate::prep_plan::PrepRecipe;
use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Parse a JSON array of ingredient records
pub fn parse_ingredient_records(json: &str) -> Result<Vec<IngredientRecord>> {
    serde_json::from_str(json).context("Failed to parse ingredient records")
}

/// Read a JSON array of ingredient records from a file
pub fn load_ingredient_records(path: impl AsRef<Path>) -> Result<Vec<IngredientRecord>> {
    load_json(path.as_ref(), "ingredient records")
}

/// Read a JSON array of prep recipes from a file
pub fn load_prep_recipes(path: impl AsRef<Path>) -> Result<Vec<PrepRecipe>> {
    load_json(path.as_ref(), "prep recipes")
}

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} from {}", what, path.display()))?;

    let items: Vec<T> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} in {}", what, path.display()))?;

    info!("Loaded {} {} from {}", items.len(), what, path.display());
    Ok(items)
}
