//! Collaborator traits for the rendering surface and the input getters.
//!
//! The controller hands plain data to a `View` and reads user input only
//! through `Input`; neither knows how the other side is drawn.

use crate::likes::Like;
use crate::recipe::Recipe;
use crate::search::ResultsPage;
use crate::shopping_list::ListItem;

/// Screen areas that can show a loading indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchResults,
    Recipe,
}

/// Rendering surface
pub trait View: Send + Sync {
    fn render_loader(&self, region: Region);
    fn clear_loader(&self);
    /// Blocking notification to the user
    fn alert(&self, message: &str);

    fn clear_search_input(&self);
    fn clear_results(&self);
    fn render_results(&self, page: &ResultsPage<'_>);
    fn highlight_selected(&self, id: &str);

    fn clear_recipe(&self);
    fn render_recipe(&self, recipe: &Recipe, is_liked: bool);
    fn update_servings_ingredients(&self, recipe: &Recipe);

    fn render_list_item(&self, item: &ListItem);
    fn delete_list_item(&self, id: &str);

    fn toggle_like_btn(&self, is_liked: bool);
    fn render_like(&self, like: &Like);
    fn delete_like(&self, id: &str);
    fn toggle_like_menu(&self, num_likes: usize);
}

/// Read-only user input getters
pub trait Input: Send + Sync {
    /// Current search box text
    fn search_query(&self) -> String;
    /// Currently selected recipe id (the URL fragment, `#` optional)
    fn recipe_id(&self) -> String;
}
