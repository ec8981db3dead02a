//! Search session
//!
//! Holds the state of the search page: current results, the selected
//! category and alcohol filters, and the query the session was opened with.
//! Requests are never cancelled. Each one takes a ticket from a generation
//! counter and its response is applied only while that ticket is the latest,
//! so a slow response cannot overwrite the results of a newer request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::debug;

use crate::api::CatalogService;
use crate::models::{AlcoholicFilter, Cocktail};

/// Observable search state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub results: Vec<Cocktail>,
    pub loading: bool,
    pub selected_category: Option<String>,
    pub selected_alcoholic: Option<AlcoholicFilter>,
    pub query: Option<String>,
}

/// Which request `apply_filters` issues
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterRequest {
    Category(String),
    Alcoholic(AlcoholicFilter),
    Query(String),
    Clear,
}

pub struct SearchSession {
    catalog: Arc<CatalogService>,
    state: Mutex<SearchState>,
    generation: AtomicU64,
}

impl SearchSession {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self::with_query(catalog, None)
    }

    /// Session opened with an initial query (the `?q=` of the search page)
    pub fn with_query(catalog: Arc<CatalogService>, query: Option<String>) -> Self {
        let query = query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        Self {
            catalog,
            state: Mutex::new(SearchState {
                query,
                ..SearchState::default()
            }),
            generation: AtomicU64::new(0),
        }
    }

    fn state(&self) -> MutexGuard<'_, SearchState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SearchState {
        self.state().clone()
    }

    pub fn results(&self) -> Vec<Cocktail> {
        self.state().results.clone()
    }

    pub fn set_category(&self, category: Option<String>) {
        self.state().selected_category = category.filter(|c| !c.trim().is_empty());
    }

    pub fn set_alcoholic(&self, filter: Option<AlcoholicFilter>) {
        self.state().selected_alcoholic = filter;
    }

    /// Start a request: new ticket, results cleared, loading on
    fn begin(&self) -> u64 {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state();
        state.results.clear();
        state.loading = true;
        ticket
    }

    /// Apply a response if `ticket` is still the latest request
    fn finish(&self, ticket: u64, results: Vec<Cocktail>) -> bool {
        let mut state = self.state();
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "Discarding stale search response");
            return false;
        }
        state.results = results;
        state.loading = false;
        true
    }

    /// Search by name and remember the query
    ///
    /// Returns whether this response was applied.
    pub async fn search(&self, query: &str) -> bool {
        let query = query.trim().to_string();
        self.state().query = (!query.is_empty()).then(|| query.clone());
        let ticket = self.begin();
        let results = self.catalog.search(&query).await;
        self.finish(ticket, results)
    }

    pub async fn search_by_ingredient(&self, ingredient: &str) -> bool {
        let ticket = self.begin();
        let results = self.catalog.by_ingredient(ingredient).await;
        self.finish(ticket, results)
    }

    fn filter_request(&self) -> FilterRequest {
        let state = self.state();
        if let Some(category) = &state.selected_category {
            FilterRequest::Category(category.clone())
        } else if let Some(filter) = state.selected_alcoholic {
            FilterRequest::Alcoholic(filter)
        } else if let Some(query) = &state.query {
            FilterRequest::Query(query.clone())
        } else {
            FilterRequest::Clear
        }
    }

    /// Run the selected filter
    ///
    /// A category wins over an alcohol filter; with neither, the session's
    /// query is searched again, and with no query the results are cleared.
    pub async fn apply_filters(&self) -> bool {
        let request = self.filter_request();
        debug!(?request, "Applying search filters");

        let ticket = self.begin();
        let results = match request {
            FilterRequest::Category(category) => self.catalog.by_category(&category).await,
            FilterRequest::Alcoholic(filter) => self.catalog.by_alcoholic(filter).await,
            FilterRequest::Query(query) => self.catalog.search(&query).await,
            FilterRequest::Clear => Vec::new(),
        };
        self.finish(ticket, results)
    }

    /// Drop both filters and fall back to the query (or nothing)
    pub async fn clear_filters(&self) -> bool {
        {
            let mut state = self.state();
            state.selected_category = None;
            state.selected_alcoholic = None;
        }
        self.apply_filters().await
    }
}

#[cfg(test)]
mod tests;
