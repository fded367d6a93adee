//! # Integration Tests
//!
//! End-to-end flows: records loaded from JSON files are consolidated into a
//! grocery list, and recipes are scaled into a prep-plan shopping list.

use ingredient_consolidation::grocery_list::UNASSIGNED_STORE;
use ingredient_consolidation::record_loader::{load_ingredient_records, load_prep_recipes};
use ingredient_consolidation::{
    ConsolidationConfig, EmptyNamePolicy, GroceryList, IngredientConsolidator, PrepPlanBuilder,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// A week of planned meals, as the grocery-list builder assembles it
const WEEK_RECORDS: &str = r#"[
    {"name": "Yellow Onion", "quantity": "1", "unit": null, "category": "produce", "store": "Farmers Market", "usedInMeals": ["Chili"]},
    {"name": "Garlic", "quantity": "3", "unit": "cloves", "category": "produce", "store": "Farmers Market", "usedInMeals": ["Chili"]},
    {"name": "Ground Beef", "quantity": "1", "unit": "lb", "category": "meat", "store": "Butcher", "usedInMeals": ["Chili"]},
    {"name": "Milk", "quantity": "1 1/2", "unit": "cups", "category": "dairy", "store": "Grocer", "usedInMeals": ["Pancakes"]},
    {"name": "minced garlic", "quantity": "1", "unit": "tbsp", "category": "produce", "store": "Farmers Market", "usedInMeals": ["Stir Fry"]},
    {"name": "beef", "quantity": "8", "unit": "oz", "category": "meat", "store": "Butcher", "usedInMeals": ["Stir Fry"]},
    {"name": "milk", "quantity": "½", "unit": "cup", "category": "dairy", "store": "Grocer", "usedInMeals": ["Pancakes", "Smoothie"]},
    {"name": "Salt", "quantity": "to taste", "unit": "", "usedInMeals": ["Chili"]},
    {"name": "yellow onion", "quantity": 2, "unit": "whole", "category": "produce", "store": "Farmers Market", "usedInMeals": ["Stir Fry"]}
]"#;

#[test]
fn test_grocery_list_from_json_file() {
    let file = write_json(WEEK_RECORDS);
    let records = load_ingredient_records(file.path()).unwrap();
    assert_eq!(records.len(), 9);

    let list = GroceryList::from_records(&records);
    assert_eq!(list.item_count(), 5);

    let market = list.store("Farmers Market").unwrap();
    let produce = market.category("produce").unwrap();

    let onion = &produce.items[0];
    assert_eq!(onion.name, "Yellow Onion");
    assert_eq!(onion.quantity, 3.0);
    assert_eq!(onion.used_in_meals, vec!["Chili", "Stir Fry"]);

    let garlic = &produce.items[1];
    assert_eq!(garlic.unit, "cloves");
    assert_eq!(garlic.quantity, 3.0);
    assert_eq!(garlic.display_quantity, "3 cloves + 1 tbsp");

    let beef = &list.store("Butcher").unwrap().categories[0].items[0];
    assert_eq!(beef.name, "Ground Beef");
    assert_eq!(beef.unit, "lb");
    assert_eq!(beef.quantity, 1.5);
    assert_eq!(beef.display_quantity, "1 ½ lb");

    let milk = &list.store("Grocer").unwrap().categories[0].items[0];
    assert_eq!(milk.quantity, 2.0);
    assert_eq!(milk.unit, "cups");
    assert_eq!(milk.used_in_meals, vec!["Pancakes", "Smoothie"]);

    let salt = &list.store(UNASSIGNED_STORE).unwrap().categories[0];
    assert_eq!(salt.category, "Other");
    assert_eq!(salt.items[0].display_quantity, "0");
}

#[test]
fn test_grocery_list_serializes_for_callers() {
    let file = write_json(WEEK_RECORDS);
    let records = load_ingredient_records(file.path()).unwrap();
    let list = GroceryList::from_records(&records);

    let json = serde_json::to_value(&list).unwrap();
    let garlic = &json["stores"][0]["categories"][0]["items"][1];

    assert_eq!(garlic["name"], "Garlic");
    assert_eq!(garlic["displayQuantity"], "3 cloves + 1 tbsp");
    assert_eq!(garlic["variants"][0]["unit"], "tbsp");
    assert_eq!(garlic["originalUnits"].as_array().unwrap().len(), 2);
    assert_eq!(garlic["usedInMeals"][1], "Stir Fry");
}

#[test]
fn test_configured_consolidator_keeps_unnamed_records_apart() {
    let records = ingredient_consolidation::record_loader::parse_ingredient_records(
        r#"[
            {"name": null, "quantity": "1", "unit": "cup"},
            {"name": "", "quantity": "2", "unit": "cup"},
            {"name": "Oats", "quantity": "1", "unit": "cup"}
        ]"#,
    )
    .unwrap();

    let merged = GroceryList::from_records(&records);
    assert_eq!(merged.item_count(), 2);

    let consolidator = IngredientConsolidator::with_config(ConsolidationConfig {
        empty_names: EmptyNamePolicy::Separate,
        ..Default::default()
    })
    .unwrap();
    let separate = GroceryList::with_consolidator(&consolidator, &records);
    assert_eq!(separate.item_count(), 3);
}

#[test]
fn test_prep_plan_from_json_file() {
    let file = write_json(
        r#"[
            {
                "name": "Overnight Oats",
                "servings": 1,
                "ingredients": [
                    {"name": "Rolled Oats", "quantity": "½", "unit": "cup", "category": "pantry"},
                    {"name": "Milk", "quantity": "½", "unit": "cup", "category": "dairy"}
                ]
            },
            {
                "name": "Banana Bread",
                "servings": 8,
                "ingredients": [
                    {"name": "Milk", "quantity": "1/4", "unit": "cup", "category": "dairy"},
                    {"name": "Sliced Banana", "quantity": "3", "category": "produce"}
                ]
            }
        ]"#,
    );

    let recipes = load_prep_recipes(file.path()).unwrap();
    assert_eq!(recipes.len(), 2);

    let mut builder = PrepPlanBuilder::new();
    builder = builder.add_recipe(recipes[0].clone(), 5.0);
    builder = builder.add_recipe(recipes[1].clone(), 16.0);
    let plan = builder.build();

    assert_eq!(plan.recipes[0].ratio, 5.0);
    assert_eq!(plan.recipes[1].ratio, 2.0);

    let names: Vec<&str> = plan.shopping_list.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Rolled Oats", "Milk", "Sliced Banana"]);

    // 0.5 x5 + 0.25 x2
    let milk = &plan.shopping_list[1];
    assert_eq!(milk.quantity, 3.0);
    assert_eq!(milk.used_in_meals, vec!["Overnight Oats", "Banana Bread"]);

    assert_eq!(plan.shopping_list[0].display_quantity, "2 ½ cup");
    assert_eq!(plan.shopping_list[2].quantity, 6.0);

    let categories: Vec<&str> = plan.by_category.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(categories, vec!["pantry", "dairy", "produce"]);
}
