//! Like toggle and likes restore control flows

use std::sync::Arc;
use tracing::{debug, error, info};

use super::{Controller, Input, View};
use crate::likes::Likes;
use crate::provider::RecipeProvider;

impl<P, V, I> Controller<P, V, I>
where
    P: RecipeProvider,
    V: View,
    I: Input,
{
    /// Like the current recipe, or unlike it if it is already liked
    pub fn control_like(&self) {
        let mut guard = self.state();
        let state = &mut *guard;

        let Some(recipe) = state.recipe.as_ref() else {
            debug!("No recipe to like");
            return;
        };
        if state.likes.is_none() {
            state.likes = Some(self.read_likes());
        }
        let Some(likes) = state.likes.as_mut() else {
            return;
        };

        let saved = if !likes.is_liked(&recipe.id) {
            let saved = likes
                .add_like(&recipe.id, &recipe.title, &recipe.author, &recipe.img)
                .map(|_| ());
            if let Some(like) = likes.get(&recipe.id) {
                self.view.toggle_like_btn(true);
                self.view.render_like(like);
            }
            info!(recipe_id = %recipe.id, "Recipe liked");
            saved
        } else {
            let saved = likes.delete_like(&recipe.id);
            self.view.toggle_like_btn(false);
            self.view.delete_like(&recipe.id);
            info!(recipe_id = %recipe.id, "Recipe unliked");
            saved
        };

        self.view.toggle_like_menu(likes.num_likes());

        if let Err(e) = saved {
            error!(recipe_id = %recipe.id, error = %e, "Failed to save likes");
            self.view.alert(&format!("Could not save your likes: {e}"));
        }
    }

    /// Restore liked recipes from the durable store and render them
    pub fn restore_likes(&self) {
        let likes = self.read_likes();

        self.view.toggle_like_menu(likes.num_likes());
        for like in likes.likes() {
            self.view.render_like(like);
        }

        self.state().likes = Some(likes);
    }

    /// Read the stored likes, alerting when the store cannot be read
    fn read_likes(&self) -> Likes {
        let mut likes = Likes::new(Arc::clone(&self.store));
        if let Err(e) = likes.read_storage() {
            error!(error = %e, "Failed to read stored likes");
            self.view.alert(&format!("Could not load your likes: {e}"));
        }
        likes
    }
}
