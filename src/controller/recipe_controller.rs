//! Recipe selection and serving adjustment control flows

use tracing::{debug, error, info};

use super::{Controller, Input, Region, View};
use crate::provider::RecipeProvider;
use crate::recipe::{prepare_recipe, FetchedRecipe, ServingsUpdate};

impl<P, V, I> Controller<P, V, I>
where
    P: RecipeProvider,
    V: View,
    I: Input,
{
    /// Load and render the recipe named by the current selection.
    ///
    /// The recipe goes through the fixed pipeline fetch, parse ingredients,
    /// calculate time, calculate servings before it is stored and rendered.
    /// If another selection started while this fetch was pending, the result
    /// is dropped.
    pub async fn control_recipe(&self) {
        let raw_id = self.input.recipe_id();
        let id = raw_id.trim().trim_start_matches('#');
        if id.is_empty() {
            debug!("No recipe selected");
            return;
        }

        self.view.clear_recipe();
        self.view.render_loader(Region::Recipe);

        let generation = {
            let mut state = self.state();
            if state.search.is_some() {
                self.view.highlight_selected(id);
            }
            state.recipe = None;
            state.begin_recipe()
        };

        info!(recipe_id = %id, "Loading recipe");
        let fetched = FetchedRecipe::fetch(&self.provider, id).await;

        let mut state = self.state();
        if !state.is_current_recipe(generation) {
            debug!(recipe_id = %id, "Discarding recipe of a superseded selection");
            return;
        }

        self.view.clear_loader();
        match fetched {
            Ok(fetched) => {
                let recipe = prepare_recipe(fetched);
                let is_liked = state
                    .likes
                    .as_ref()
                    .is_some_and(|likes| likes.is_liked(&recipe.id));

                info!(
                    recipe_id = %recipe.id,
                    ingredients = recipe.ingredients().len(),
                    servings = recipe.servings(),
                    "Recipe ready"
                );
                self.view.render_recipe(&recipe, is_liked);
                state.recipe = Some(recipe);
            }
            Err(e) => {
                error!(recipe_id = %id, error = %e, "Failed to load recipe");
                self.view
                    .alert(&format!("Error processing recipe {id}: {e}"));
            }
        }
    }

    /// Adjust the current recipe's servings and re-render its ingredients
    pub fn control_servings(&self, update: ServingsUpdate) {
        let mut state = self.state();
        let Some(recipe) = state.recipe.as_mut() else {
            debug!("No recipe to rescale");
            return;
        };

        if recipe.update_servings(update) {
            self.view.update_servings_ingredients(recipe);
        }
    }
}
