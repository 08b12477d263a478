//! Controller module sequencing entity operations for each user intent
//!
//! This module is split into several submodules:
//! - `state`: the application state container
//! - `view`: rendering surface and input collaborator traits
//! - `events`: typed user intents
//! - `search_controller`, `recipe_controller`, `list_controller`,
//!   `like_controller`: one control flow each

pub mod events;
pub mod like_controller;
pub mod list_controller;
pub mod recipe_controller;
pub mod search_controller;
pub mod state;
pub mod view;

use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::config::DEFAULT_RESULTS_PER_PAGE;
use crate::provider::RecipeProvider;
use crate::recipe::ServingsUpdate;
use crate::storage::KeyValueStore;

pub use events::UiEvent;
pub use state::AppState;
pub use view::{Input, Region, View};

/// Owns the application state and runs one control flow per user intent.
///
/// Methods take `&self` so that flows suspended on the provider can overlap;
/// the state lock is never held across an await.
pub struct Controller<P, V, I> {
    provider: P,
    view: V,
    input: I,
    store: Arc<dyn KeyValueStore>,
    results_per_page: usize,
    state: Mutex<AppState>,
}

impl<P, V, I> Controller<P, V, I>
where
    P: RecipeProvider,
    V: View,
    I: Input,
{
    pub fn new(provider: P, view: V, input: I, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            provider,
            view,
            input,
            store,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            state: Mutex::new(AppState::new()),
        }
    }

    pub fn with_results_per_page(mut self, results_per_page: usize) -> Self {
        self.results_per_page = results_per_page.max(1);
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Read the current state
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state())
    }

    fn state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Route a user intent to its control flow
    pub async fn dispatch(&self, event: UiEvent) {
        debug!(event = ?event, "Dispatching UI event");
        match event {
            UiEvent::Load => self.on_load().await,
            UiEvent::SearchSubmitted => self.control_search().await,
            UiEvent::HashChanged => self.control_recipe().await,
            UiEvent::GoToPage(page) => self.control_pagination(page),
            UiEvent::ServingsDecrease => self.control_servings(ServingsUpdate::Decrease),
            UiEvent::ServingsIncrease => self.control_servings(ServingsUpdate::Increase),
            UiEvent::AddToList => self.control_list(),
            UiEvent::ToggleLike => self.control_like(),
            UiEvent::DeleteListItem { id } => self.control_list_delete(&id),
            UiEvent::ListCountChanged { id, value } => self.control_list_count(&id, &value),
        }
    }

    /// Application start: restore likes, then open the selected recipe if any
    pub async fn on_load(&self) {
        self.restore_likes();
        self.control_recipe().await;
    }
}
