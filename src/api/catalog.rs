//! Catalog service
//!
//! Front door to the recipe API for the rest of the crate. Failures never
//! propagate: they are logged, reported as an error notice and turned into
//! an empty result, or into the bundled samples when fallback is enabled.

use std::sync::Arc;

use tracing::{debug, error};

use crate::models::{AlcoholicFilter, Cocktail};
use crate::services::{Notice, NoticeSink};

use super::client::CocktailApi;
use super::error::ApiError;
use super::samples::SampleCatalog;

const SEARCH_FAILED: &str = "Could not search for cocktails";
const LOOKUP_FAILED: &str = "Could not load the cocktail";
const RANDOM_FAILED: &str = "Could not load a random cocktail";
const CATEGORIES_FAILED: &str = "Could not load categories";
const FILTER_FAILED: &str = "Could not filter cocktails";

pub struct CatalogService {
    api: Arc<dyn CocktailApi>,
    notices: Arc<dyn NoticeSink>,
    fallback: Option<SampleCatalog>,
}

impl CatalogService {
    /// # Arguments
    /// * `api` - Recipe API implementation
    /// * `notices` - Where failures are reported
    /// * `fallback_to_samples` - Answer from the bundled samples when the API fails
    pub fn new(
        api: Arc<dyn CocktailApi>,
        notices: Arc<dyn NoticeSink>,
        fallback_to_samples: bool,
    ) -> Self {
        Self {
            api,
            notices,
            fallback: fallback_to_samples.then_some(SampleCatalog),
        }
    }

    fn recover<T>(
        &self,
        operation: &str,
        message: &str,
        result: Result<T, ApiError>,
        fallback: impl FnOnce(&SampleCatalog) -> T,
        empty: T,
    ) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                error!(operation, error = %e, "Recipe API request failed");
                self.notices.notify(Notice::error(message));
                match &self.fallback {
                    Some(samples) => {
                        debug!(operation, "Answering from sample catalog");
                        fallback(samples)
                    }
                    None => empty,
                }
            }
        }
    }

    /// Cocktails whose name contains `query`; a blank query returns nothing
    /// without a request
    pub async fn search(&self, query: &str) -> Vec<Cocktail> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let result = self.api.search_by_name(query).await;
        self.recover(
            "search_by_name",
            SEARCH_FAILED,
            result,
            |s| s.search_by_name(query),
            Vec::new(),
        )
    }

    pub async fn by_first_letter(&self, letter: char) -> Vec<Cocktail> {
        if !letter.is_alphanumeric() {
            return Vec::new();
        }
        let result = self.api.search_by_first_letter(letter).await;
        self.recover(
            "search_by_first_letter",
            SEARCH_FAILED,
            result,
            |s| s.search_by_first_letter(letter),
            Vec::new(),
        )
    }

    pub async fn details(&self, id: &str) -> Option<Cocktail> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        let result = self.api.lookup_by_id(id).await;
        self.recover(
            "lookup_by_id",
            LOOKUP_FAILED,
            result,
            |s| s.lookup_by_id(id),
            None,
        )
    }

    pub async fn random(&self) -> Option<Cocktail> {
        let result = self.api.random().await;
        self.recover("random", RANDOM_FAILED, result, SampleCatalog::random, None)
    }

    pub async fn categories(&self) -> Vec<String> {
        let result = self.api.list_categories().await;
        self.recover(
            "list_categories",
            CATEGORIES_FAILED,
            result,
            SampleCatalog::categories,
            Vec::new(),
        )
    }

    pub async fn by_category(&self, category: &str) -> Vec<Cocktail> {
        let category = category.trim();
        if category.is_empty() {
            return Vec::new();
        }
        let result = self.api.filter_by_category(category).await;
        self.recover(
            "filter_by_category",
            FILTER_FAILED,
            result,
            |s| s.filter_by_category(category),
            Vec::new(),
        )
    }

    pub async fn by_alcoholic(&self, filter: AlcoholicFilter) -> Vec<Cocktail> {
        let result = self.api.filter_by_alcoholic(filter).await;
        self.recover(
            "filter_by_alcoholic",
            FILTER_FAILED,
            result,
            |s| s.filter_by_alcoholic(filter),
            Vec::new(),
        )
    }

    pub async fn by_ingredient(&self, ingredient: &str) -> Vec<Cocktail> {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return Vec::new();
        }
        let result = self.api.search_by_ingredient(ingredient).await;
        self.recover(
            "search_by_ingredient",
            SEARCH_FAILED,
            result,
            |s| s.search_by_ingredient(ingredient),
            Vec::new(),
        )
    }
}
