//! # Grocery List Example
//!
//! Consolidates a week of meal-plan ingredients into a store-by-store
//! checklist, then builds a scaled prep plan from two recipes.
//!
//! Records are read from the JSON file given as the first argument, or from
//! `GROCERY_RECORDS_PATH` (a `.env` file is honored). Without either, a
//! built-in sample week is used. Set `RUST_LOG=debug` to see merge decisions.

use anyhow::Result;
use ingredient_consolidation::record_loader::load_ingredient_records;
use ingredient_consolidation::{GroceryList, IngredientRecord, PrepPlanBuilder, PrepRecipe};
use log::info;
use std::env;

fn sample_week() -> Vec<IngredientRecord> {
    vec![
        IngredientRecord::new("Yellow Onion", "1")
            .with_category("produce")
            .with_store("Farmers Market")
            .used_in("Chili"),
        IngredientRecord::new("Garlic", "3")
            .with_unit("cloves")
            .with_category("produce")
            .with_store("Farmers Market")
            .used_in("Chili"),
        IngredientRecord::new("Ground Beef", "1")
            .with_unit("lb")
            .with_category("meat")
            .with_store("Butcher")
            .used_in("Chili"),
        IngredientRecord::new("Milk", "1 1/2")
            .with_unit("cups")
            .with_category("dairy")
            .with_store("Grocer")
            .used_in("Pancakes"),
        IngredientRecord::new("minced garlic", "1")
            .with_unit("tbsp")
            .with_category("produce")
            .with_store("Farmers Market")
            .used_in("Stir Fry"),
        IngredientRecord::new("beef", "8")
            .with_unit("oz")
            .with_category("meat")
            .with_store("Butcher")
            .used_in("Stir Fry"),
        IngredientRecord::new("milk", "½")
            .with_unit("cup")
            .with_category("dairy")
            .with_store("Grocer")
            .used_in("Smoothie"),
        IngredientRecord::new("Salt", "to taste").used_in("Chili"),
    ]
}

fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    println!("🛒 Grocery List Example");
    println!("=======================\n");

    let records = match env::args().nth(1).or_else(|| env::var("GROCERY_RECORDS_PATH").ok()) {
        Some(path) => {
            info!("Reading ingredient records from {}", path);
            load_ingredient_records(&path)?
        }
        None => sample_week(),
    };

    let list = GroceryList::from_records(&records);
    println!("{}", list);

    println!("📋 Prep Plan: pancakes for 6, chili for 2");
    println!("-----------------------------------------");

    let pancakes = PrepRecipe::new("Pancakes", Some(4.0))
        .with_ingredient(IngredientRecord::new("Flour", "1 1/2").with_unit("cups"))
        .with_ingredient(IngredientRecord::new("Milk", "1 1/4").with_unit("cups"))
        .with_ingredient(IngredientRecord::new("Eggs", 1));
    let chili = PrepRecipe::new("Chili", Some(8.0))
        .with_ingredient(IngredientRecord::new("Ground Beef", "2").with_unit("lb"))
        .with_ingredient(IngredientRecord::new("Kidney Beans", "2").with_unit("cans"))
        .with_ingredient(IngredientRecord::new("Milk", "4").with_unit("tbsp"));

    let plan = PrepPlanBuilder::new()
        .add_recipe(pancakes, 6.0)
        .add_recipe(chili, 2.0)
        .build();

    for recipe in &plan.recipes {
        println!("  {} x{}", recipe.name, recipe.ratio);
    }
    println!();
    for entry in &plan.shopping_list {
        println!("  • {}", entry);
    }

    Ok(())
}
