//! Shopping list control flows

use tracing::{debug, info};

use super::{Controller, Input, View};
use crate::provider::RecipeProvider;
use crate::shopping_list::ShoppingList;

/// Count given to ingredients that carry no quantity
const UNQUANTIFIED_COUNT: f64 = 1.0;

impl<P, V, I> Controller<P, V, I>
where
    P: RecipeProvider,
    V: View,
    I: Input,
{
    /// Append every ingredient of the current recipe to the shopping list
    pub fn control_list(&self) {
        let mut guard = self.state();
        let state = &mut *guard;

        let Some(recipe) = state.recipe.as_ref() else {
            debug!("No recipe to add to the shopping list");
            return;
        };
        let list = state.list.get_or_insert_with(ShoppingList::new);

        for ingredient in recipe.ingredients() {
            let item = list.add_item(
                ingredient.count.unwrap_or(UNQUANTIFIED_COUNT),
                &ingredient.unit,
                &ingredient.ingredient,
            );
            self.view.render_list_item(&item);
        }

        info!(
            recipe_id = %recipe.id,
            added = recipe.ingredients().len(),
            total = list.len(),
            "Added recipe ingredients to shopping list"
        );
    }

    pub fn control_list_delete(&self, id: &str) {
        let mut state = self.state();
        let Some(list) = state.list.as_mut() else {
            return;
        };

        if list.delete_item(id) {
            self.view.delete_list_item(id);
        } else {
            debug!(item_id = %id, "Shopping list item not found");
        }
    }

    /// Apply a count typed into a list item; non-positive or unparseable
    /// values are ignored.
    pub fn control_list_count(&self, id: &str, value: &str) {
        let count = match value.trim().parse::<f64>() {
            Ok(count) if count.is_finite() && count > 0.0 => count,
            _ => {
                debug!(item_id = %id, value = %value, "Ignoring invalid item count");
                return;
            }
        };

        let mut state = self.state();
        if let Some(list) = state.list.as_mut() {
            list.update_count(id, count);
        }
    }
}
