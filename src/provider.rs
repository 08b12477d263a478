//! # Recipe Data Provider
//!
//! This module defines the seam between the application core and the remote
//! recipe API, plus an HTTP implementation for the Forkify API.
//!
//! Every provider failure (transport, HTTP status, undecodable payload) is
//! normalized to a `FetchError`.

use serde::Deserialize;
use std::future::Future;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::FetchError;
use crate::search::RecipeSummary;

/// Full recipe record as delivered by a provider
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    /// Raw ingredient lines, in recipe order
    pub ingredients: Vec<String>,
    /// Servings when the source publishes them
    pub servings: Option<u32>,
}

/// Source of search results and recipe details
pub trait RecipeProvider: Send + Sync {
    /// Search recipes matching `query`
    fn search_recipes(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, FetchError>> + Send;

    /// Fetch one recipe's details
    fn fetch_recipe_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<RecipeData, FetchError>> + Send;
}

/// HTTP client for the Forkify recipe API
#[derive(Debug, Clone)]
pub struct ForkifyClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<ApiSummary>,
}

#[derive(Debug, Deserialize)]
struct ApiSummary {
    recipe_id: String,
    title: String,
    publisher: String,
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct RecipeResponse {
    recipe: Option<ApiRecipe>,
}

#[derive(Debug, Deserialize)]
struct ApiRecipe {
    recipe_id: String,
    title: String,
    publisher: String,
    image_url: String,
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    servings: Option<u32>,
}

impl From<ApiSummary> for RecipeSummary {
    fn from(api: ApiSummary) -> Self {
        Self {
            id: api.recipe_id,
            title: api.title,
            author: api.publisher,
            img: api.image_url,
        }
    }
}

impl From<ApiRecipe> for RecipeData {
    fn from(api: ApiRecipe) -> Self {
        Self {
            id: api.recipe_id,
            title: api.title,
            author: api.publisher,
            img: api.image_url,
            url: api.source_url,
            ingredients: api.ingredients,
            servings: api.servings,
        }
    }
}

impl ForkifyClient {
    /// Build a client from the application configuration
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }
}

impl RecipeProvider for ForkifyClient {
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        let url = format!("{}/search", self.base_url);
        debug!(query = %query, url = %url, "Requesting search results");

        let response = self.client.get(&url).query(&[("q", query)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(query = %query, status = status.as_u16(), "Search request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.recipes.into_iter().map(RecipeSummary::from).collect())
    }

    async fn fetch_recipe_by_id(&self, id: &str) -> Result<RecipeData, FetchError> {
        let url = format!("{}/get", self.base_url);
        debug!(recipe_id = %id, url = %url, "Requesting recipe");

        let response = self.client.get(&url).query(&[("rId", id)]).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            warn!(recipe_id = %id, status = status.as_u16(), "Recipe request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: RecipeResponse = response.json().await?;
        body.recipe
            .map(RecipeData::from)
            .ok_or_else(|| FetchError::NotFound(id.to_string()))
    }
}
