//! Search and pagination control flows

use tracing::{debug, error, info};

use super::{Controller, Input, Region, View};
use crate::provider::RecipeProvider;
use crate::search::Search;

impl<P, V, I> Controller<P, V, I>
where
    P: RecipeProvider,
    V: View,
    I: Input,
{
    /// Run a search for the current search box text and render page 1.
    ///
    /// An empty query does nothing. Failures are alerted to the user. The
    /// previous results are dropped as soon as the new search starts, so
    /// pagination has nothing to show until the new results arrive.
    pub async fn control_search(&self) {
        let raw_query = self.input.search_query();
        let query = raw_query.trim();
        if query.is_empty() {
            debug!("Ignoring empty search query");
            return;
        }

        let generation = {
            let mut state = self.state();
            state.search = None;
            state.begin_search()
        };

        self.view.clear_search_input();
        self.view.clear_results();
        self.view.render_loader(Region::SearchResults);

        info!(query = %query, "Searching recipes");
        let mut search = Search::new(query);
        let outcome = search.fetch_results(&self.provider).await.map(|_| ());

        let mut state = self.state();
        if !state.is_current_search(generation) {
            debug!(query = %query, "Discarding results of a superseded search");
            return;
        }

        self.view.clear_loader();
        match outcome {
            Ok(()) => {
                info!(query = %query, results = search.results().len(), "Search completed");
                self.view.render_results(&search.page(1, self.results_per_page));
                state.search = Some(search);
            }
            Err(e) => {
                error!(query = %query, error = %e, "Search failed");
                self.view
                    .alert(&format!("Something went wrong with the search: {e}"));
            }
        }
    }

    /// Re-render the current results at `page`
    pub fn control_pagination(&self, page: usize) {
        let state = self.state();
        let Some(search) = state.search.as_ref() else {
            debug!(page, "No search to paginate");
            return;
        };

        self.view.clear_results();
        self.view.render_results(&search.page(page, self.results_per_page));
    }
}
