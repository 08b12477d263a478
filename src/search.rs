//! # Search Entity
//!
//! Holds one query and its result list, and slices the results into pages.

use log::debug;

use crate::errors::FetchError;
use crate::provider::RecipeProvider;

/// Short recipe record shown in the result list
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// A search query and its results
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub query: String,
    results: Vec<RecipeSummary>,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage<'a> {
    /// 1-based page number actually shown
    pub page: usize,
    /// Total number of pages
    pub pages: usize,
    pub results: &'a [RecipeSummary],
}

impl Search {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            results: Vec::new(),
        }
    }

    /// Fetch results for the query, replacing any previous results
    pub async fn fetch_results<P: RecipeProvider>(
        &mut self,
        provider: &P,
    ) -> Result<&[RecipeSummary], FetchError> {
        let results = provider.search_recipes(&self.query).await?;
        debug!("Search {:?} returned {} results", self.query, results.len());
        self.results = results;
        Ok(&self.results)
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    /// Slice out page `page` (1-based) of `per_page` results.
    ///
    /// Page 0 reads as page 1; pages past the end clamp to the last page.
    pub fn page(&self, page: usize, per_page: usize) -> ResultsPage<'_> {
        let per_page = per_page.max(1);
        let pages = self.results.len().div_ceil(per_page);
        let page = page.clamp(1, pages.max(1));

        let start = ((page - 1) * per_page).min(self.results.len());
        let end = (start + per_page).min(self.results.len());

        ResultsPage {
            page,
            pages,
            results: &self.results[start..end],
        }
    }
}

impl ResultsPage<'_> {
    /// Page number for a "previous" button, if any
    pub fn prev(&self) -> Option<usize> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// Page number for a "next" button, if any
    pub fn next(&self) -> Option<usize> {
        (self.page < self.pages).then(|| self.page + 1)
    }
}
