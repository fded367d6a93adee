//! # Prep Plan Module
//!
//! Builds the shopping side of a multi-meal prep plan: every selected recipe
//! is scaled from its native serving count to the requested one, tagged with
//! its name, and the whole set is consolidated into one list.

use crate::consolidator::IngredientConsolidator;
use crate::grocery_list::{group_by_category, CategorySection};
use crate::ingredient_model::{ConsolidatedEntry, IngredientRecord};
use crate::quantity_scaler::{checked_serving_ratio, scale_record};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// A recipe selected for the prep plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepRecipe {
    pub name: String,
    /// Servings the ingredient quantities are written for
    #[serde(default)]
    pub servings: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
}

impl PrepRecipe {
    pub fn new(name: &str, servings: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            servings,
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, ingredient: IngredientRecord) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}

/// How a recipe was scaled in the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledRecipe {
    pub name: String,
    pub native_servings: Option<f64>,
    pub requested_servings: f64,
    /// Multiplier applied to every quantity; 1 when native servings are unknown
    pub ratio: f64,
}

/// Shopping side of a prep plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepPlan {
    pub recipes: Vec<ScaledRecipe>,
    pub shopping_list: Vec<ConsolidatedEntry>,
    pub by_category: Vec<CategorySection>,
}

/// Collects recipe selections and builds a [`PrepPlan`]
///
/// # Examples
///
/// ```rust
/// use ingredient_consolidation::ingredient_model::IngredientRecord;
/// use ingredient_consolidation::prep_plan::{PrepPlanBuilder, PrepRecipe};
///
/// let chili = PrepRecipe::new("Chili", Some(4.0))
///     .with_ingredient(IngredientRecord::new("Beans", "2").with_unit("cups"));
///
/// let plan = PrepPlanBuilder::new().add_recipe(chili, 6.0).build();
///
/// assert_eq!(plan.shopping_list[0].quantity, 3.0);
/// assert_eq!(plan.shopping_list[0].used_in_meals, vec!["Chili"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrepPlanBuilder {
    consolidator: IngredientConsolidator,
    selections: Vec<(PrepRecipe, f64)>,
}

impl PrepPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a configured consolidator
    pub fn with_consolidator(mut self, consolidator: IngredientConsolidator) -> Self {
        self.consolidator = consolidator;
        self
    }

    /// Select a recipe at the requested number of servings
    pub fn add_recipe(mut self, recipe: PrepRecipe, requested_servings: f64) -> Self {
        self.selections.push((recipe, requested_servings));
        self
    }

    /// Scale, tag and consolidate every selected recipe
    pub fn build(&self) -> PrepPlan {
        let mut recipes = Vec::with_capacity(self.selections.len());
        let mut scaled_ingredients = Vec::new();

        for (recipe, requested) in &self.selections {
            let ratio = checked_serving_ratio(*requested, recipe.servings).unwrap_or_else(|| {
                warn!(
                    "Cannot scale '{}' from {:?} to {} servings, using the original quantities",
                    recipe.name, recipe.servings, requested
                );
                1.0
            });

            for ingredient in &recipe.ingredients {
                let mut scaled = scale_record(ingredient, ratio);
                if !scaled.used_in_meals.contains(&recipe.name) {
                    scaled.used_in_meals.push(recipe.name.clone());
                }
                scaled_ingredients.push(scaled);
            }

            recipes.push(ScaledRecipe {
                name: recipe.name.clone(),
                native_servings: recipe.servings,
                requested_servings: *requested,
                ratio,
            });
        }

        let shopping_list = self.consolidator.consolidate(&scaled_ingredients);
        let by_category = group_by_category(shopping_list.iter().cloned());

        info!(
            "Built prep plan for {} recipes: {} shopping list entries",
            recipes.len(),
            shopping_list.len()
        );

        PrepPlan {
            recipes,
            shopping_list,
            by_category,
        }
    }
}
