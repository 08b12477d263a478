//! Application state container owned by the controller

use crate::likes::Likes;
use crate::recipe::Recipe;
use crate::search::Search;
use crate::shopping_list::ShoppingList;

/// Everything the controller tracks between user actions.
///
/// Search and recipe flows each take a generation number before awaiting the
/// provider; a completion whose generation is no longer current belongs to a
/// superseded action and must be dropped.
#[derive(Default)]
pub struct AppState {
    pub search: Option<Search>,
    pub recipe: Option<Recipe>,
    pub list: Option<ShoppingList>,
    pub likes: Option<Likes>,
    search_generation: u64,
    recipe_generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin_search(&mut self) -> u64 {
        self.search_generation += 1;
        self.search_generation
    }

    pub(crate) fn is_current_search(&self, generation: u64) -> bool {
        self.search_generation == generation
    }

    pub(crate) fn begin_recipe(&mut self) -> u64 {
        self.recipe_generation += 1;
        self.recipe_generation
    }

    pub(crate) fn is_current_recipe(&self, generation: u64) -> bool {
        self.recipe_generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_supersede() {
        let mut state = AppState::new();
        let first = state.begin_recipe();
        let second = state.begin_recipe();

        assert!(!state.is_current_recipe(first));
        assert!(state.is_current_recipe(second));

        // Search and recipe generations are independent
        let search = state.begin_search();
        assert!(state.is_current_search(search));
        assert!(state.is_current_recipe(second));
    }
}
