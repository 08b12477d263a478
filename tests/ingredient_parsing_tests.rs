//! # Ingredient Parsing Tests
//!
//! Real ingredient lines as the recipe API returns them, run through the
//! full recipe preparation pipeline.

use forkify::provider::RecipeData;
use forkify::recipe::{prepare_recipe, FetchedRecipe, Ingredient, ServingsUpdate};

fn assert_ingredient(line: &str, count: Option<f64>, unit: &str, name: &str) {
    let parsed = Ingredient::parse(line);
    assert_eq!(parsed.count, count, "count for {line:?}");
    assert_eq!(parsed.unit, unit, "unit for {line:?}");
    assert_eq!(parsed.ingredient, name, "ingredient for {line:?}");
}

#[test]
fn test_api_ingredient_lines() {
    assert_ingredient(
        "4 1/2 cups (20.25 ounces) unbleached high-gluten, bread, or all-purpose flour, chilled",
        Some(4.5),
        "cup",
        "unbleached high-gluten, bread, or all-purpose flour, chilled",
    );
    assert_ingredient("1 3/4 cups water, ice cold (40F)", Some(1.75), "cup", "water, ice cold");
    assert_ingredient("1 teaspoon instant yeast", Some(1.0), "tsp", "instant yeast");
    assert_ingredient(
        "Semolina flour OR cornmeal for dusting",
        None,
        "",
        "semolina flour or cornmeal for dusting",
    );
    assert_ingredient("1-1/2 lb ground beef", Some(1.5), "pound", "ground beef");
    assert_ingredient("8 oz. cream cheese, softened", Some(8.0), "oz", "cream cheese, softened");
    assert_ingredient("Salt and pepper to taste", None, "", "salt and pepper to taste");
    assert_ingredient("2 large eggs", Some(2.0), "", "large eggs");
    assert_ingredient("250 g farine", Some(250.0), "g", "farine");
}

#[test]
fn test_unicode_fraction_lines() {
    assert_ingredient("¾ cup brown sugar", Some(0.75), "cup", "brown sugar");
    assert_ingredient("2½ Tablespoons butter", Some(2.5), "tbsp", "butter");
    assert_ingredient("⅓ cup milk", Some(1.0 / 3.0), "cup", "milk");
}

#[test]
fn test_unit_after_descriptor() {
    // The unit is found anywhere after the quantity
    assert_ingredient("2 heaping tablespoons cocoa", Some(2.0), "tbsp", "heaping cocoa");
}

#[test]
fn test_full_pipeline() {
    let data = RecipeData {
        id: "47746".to_string(),
        title: "Best Pizza Dough Ever".to_string(),
        author: "101 Cookbooks".to_string(),
        img: "http://forkify-api.herokuapp.com/images/best_pizza_dough_recipe1b20.jpg".to_string(),
        url: "http://www.101cookbooks.com/archives/001199.html".to_string(),
        ingredients: vec![
            "4 1/2 cups (20.25 ounces) unbleached high-gluten flour".to_string(),
            "1 3/4 teaspoons salt".to_string(),
            "1 teaspoon instant yeast".to_string(),
            "1/4 cup olive oil (optional)".to_string(),
            "1 3/4 cups water, ice cold (40F)".to_string(),
            "Semolina flour OR cornmeal for dusting".to_string(),
            "2 tablespoons sugar".to_string(),
        ],
        servings: None,
    };

    let mut recipe = prepare_recipe(FetchedRecipe::from_data(data));
    assert_eq!(recipe.servings(), 4);
    assert_eq!(recipe.time(), 45);
    assert_eq!(recipe.ingredients().len(), 7);

    recipe.update_servings(ServingsUpdate::Increase);
    recipe.update_servings(ServingsUpdate::Increase);
    assert_eq!(recipe.servings(), 6);
    assert_eq!(recipe.ingredients()[0].count, Some(6.75));
    assert_eq!(recipe.ingredients()[3].count, Some(0.375));
    assert_eq!(recipe.ingredients()[5].count, None);
}
