//! # Recipe Entity
//!
//! This module holds one recipe's data and turns its free-text ingredient lines
//! into structured ingredients.
//!
//! A recipe moves through three typed stages, so the parse-before-calc order
//! cannot be skipped:
//!
//! - **FetchedRecipe**: raw provider data, ingredient lines still unparsed
//! - **ParsedRecipe**: ingredients parsed through the unit converter
//! - **Recipe**: cook time and servings calculated; servings can be adjusted
//!
//! ## Usage
//!
//! ```rust
//! use forkify::provider::RecipeData;
//! use forkify::recipe::{prepare_recipe, FetchedRecipe, ServingsUpdate};
//!
//! let data = RecipeData {
//!     id: "47746".to_string(),
//!     title: "Best Pizza Dough Ever".to_string(),
//!     author: "101 Cookbooks".to_string(),
//!     img: "http://example.com/pizza.jpg".to_string(),
//!     url: "http://example.com/pizza".to_string(),
//!     ingredients: vec!["1 1/2 cups flour".to_string(), "pinch of salt".to_string()],
//!     servings: None,
//! };
//!
//! let mut recipe = prepare_recipe(FetchedRecipe::from_data(data));
//! assert_eq!(recipe.servings(), 4);
//! recipe.update_servings(ServingsUpdate::Increase);
//! assert_eq!(recipe.ingredients()[0].count, Some(1.875));
//! ```

use log::debug;
use std::fmt;

use crate::config::{DEFAULT_SERVINGS, INGREDIENTS_PER_PERIOD, MINUTES_PER_PERIOD};
use crate::errors::FetchError;
use crate::provider::{RecipeData, RecipeProvider};
use crate::unit_converter::{normalize_line, parse_unit, strip_notes, take_quantity};

/// A structured ingredient parsed from a recipe line
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    /// Amount, `None` when the line has no parseable quantity
    pub count: Option<f64>,
    /// Canonical unit ("cup", "tbsp", ...), empty when the line has none
    pub unit: String,
    /// Lower-cased ingredient name without parenthetical notes
    pub ingredient: String,
}

/// Direction of a serving-size adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsUpdate {
    Increase,
    Decrease,
}

/// Recipe data as returned by the provider, ingredients still raw text
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedRecipe {
    data: RecipeData,
}

/// Recipe whose ingredient lines have been parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecipe {
    data: RecipeData,
    ingredients: Vec<Ingredient>,
}

/// A recipe ready for display and serving adjustments
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    servings: u32,
    time: u32,
    ingredients: Vec<Ingredient>,
    base_servings: u32,
    base_counts: Vec<Option<f64>>,
}

impl Ingredient {
    /// Parse one free-text ingredient line.
    ///
    /// Never fails: a line without quantity or unit still yields an ingredient
    /// with `count: None` and an empty unit.
    pub fn parse(line: &str) -> Self {
        let normalized = normalize_line(line);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        let (count, consumed) = take_quantity(&tokens);
        let mut rest: Vec<&str> = tokens[consumed..].to_vec();

        let unit = match rest.iter().position(|token| parse_unit(token).is_some()) {
            Some(index) => {
                let token = rest.remove(index);
                parse_unit(token)
                    .map(|unit| unit.canonical().to_string())
                    .unwrap_or_default()
            }
            None => String::new(),
        };

        let ingredient = strip_notes(&rest.join(" ")).to_lowercase().trim().to_string();

        debug!(
            "Parsed ingredient line {:?} -> count={:?} unit={:?} ingredient={:?}",
            line, count, unit, ingredient
        );

        Self {
            count,
            unit,
            ingredient,
        }
    }
}

impl FetchedRecipe {
    /// Fetch a recipe by id from the provider
    pub async fn fetch<P: RecipeProvider>(provider: &P, id: &str) -> Result<Self, FetchError> {
        let data = provider.fetch_recipe_by_id(id).await?;
        debug!(
            "Fetched recipe {} with {} ingredient lines",
            data.id,
            data.ingredients.len()
        );
        Ok(Self { data })
    }

    /// Wrap already-retrieved provider data
    pub fn from_data(data: RecipeData) -> Self {
        Self { data }
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// Parse every raw ingredient line, in order
    pub fn parse_ingredients(self) -> ParsedRecipe {
        let ingredients = self
            .data
            .ingredients
            .iter()
            .map(|line| Ingredient::parse(line))
            .collect();

        ParsedRecipe {
            data: self.data,
            ingredients,
        }
    }
}

impl ParsedRecipe {
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Estimated cook time in minutes: 15 minutes per started group of 3
    /// ingredients, at least one group.
    pub fn calc_time(&self) -> u32 {
        let periods = self.ingredients.len().div_ceil(INGREDIENTS_PER_PERIOD).max(1);
        periods as u32 * MINUTES_PER_PERIOD
    }

    /// Servings from the provider when present, otherwise the default
    pub fn calc_servings(&self) -> u32 {
        self.data
            .servings
            .filter(|servings| *servings >= 1)
            .unwrap_or(DEFAULT_SERVINGS)
    }

    /// Finish preparation: calculate time, then servings
    pub fn into_ready(self) -> Recipe {
        let time = self.calc_time();
        let servings = self.calc_servings();
        let base_counts = self.ingredients.iter().map(|i| i.count).collect();

        Recipe {
            id: self.data.id,
            title: self.data.title,
            author: self.data.author,
            img: self.data.img,
            url: self.data.url,
            servings,
            time,
            ingredients: self.ingredients,
            base_servings: servings,
            base_counts,
        }
    }
}

/// Run the full preparation pipeline: parse ingredients, calculate time,
/// calculate servings.
pub fn prepare_recipe(fetched: FetchedRecipe) -> Recipe {
    fetched.parse_ingredients().into_ready()
}

impl Recipe {
    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Estimated cook time in minutes
    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Adjust servings by one and rescale every ingredient count.
    ///
    /// Counts are recomputed from the values captured when the recipe was
    /// prepared, so any sequence of adjustments returning to the original
    /// servings restores the original counts. Decreasing below one serving is
    /// a no-op. Returns whether servings changed.
    pub fn update_servings(&mut self, update: ServingsUpdate) -> bool {
        let new_servings = match update {
            ServingsUpdate::Increase => self.servings.saturating_add(1),
            ServingsUpdate::Decrease if self.servings > 1 => self.servings - 1,
            ServingsUpdate::Decrease => return false,
        };

        let ratio = new_servings as f64 / self.base_servings as f64;
        for (ingredient, base) in self.ingredients.iter_mut().zip(&self.base_counts) {
            ingredient.count = base.map(|count| count * ratio);
        }
        self.servings = new_servings;

        debug!("Recipe {} rescaled to {} servings", self.id, new_servings);
        true
    }
}

/// Format an amount for display: whole numbers without decimals, others
/// rounded to two places.
pub fn format_count(count: f64) -> String {
    if count.fract() == 0.0 {
        format!("{}", count as i64)
    } else {
        let rounded = format!("{:.2}", count);
        rounded.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(count) = self.count {
            write!(f, "{} ", format_count(count))?;
        }
        if !self.unit.is_empty() {
            write!(f, "{} ", self.unit)?;
        }
        write!(f, "{}", self.ingredient)
    }
}
