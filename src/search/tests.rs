//! Search session tests

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::*;
use crate::api::{ApiError, CocktailApi};
use crate::services::NoticeQueue;

// ===== Helper Functions =====

/// Records every call; names containing "slow" answer after a delay
#[derive(Default)]
struct ScriptedApi {
    calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: String, name: &str) -> Result<Vec<Cocktail>, ApiError> {
        self.calls.lock().unwrap().push(call);
        if name.contains("slow") {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        Ok(vec![Cocktail::new(name, name)])
    }
}

#[async_trait]
impl CocktailApi for ScriptedApi {
    async fn search_by_name(&self, name: &str) -> Result<Vec<Cocktail>, ApiError> {
        self.answer(format!("s={}", name), name).await
    }
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Cocktail>, ApiError> {
        self.answer(format!("f={}", letter), &letter.to_string()).await
    }
    async fn lookup_by_id(&self, id: &str) -> Result<Option<Cocktail>, ApiError> {
        Ok(self.answer(format!("i={}", id), id).await?.into_iter().next())
    }
    async fn random(&self) -> Result<Option<Cocktail>, ApiError> {
        Ok(self.answer("random".into(), "random").await?.into_iter().next())
    }
    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        Ok(vec!["Cocktail".into()])
    }
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Cocktail>, ApiError> {
        self.answer(format!("c={}", category), category).await
    }
    async fn filter_by_alcoholic(&self, filter: AlcoholicFilter) -> Result<Vec<Cocktail>, ApiError> {
        self.answer(format!("a={}", filter.as_query()), filter.as_query()).await
    }
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Cocktail>, ApiError> {
        self.answer(format!("ing={}", ingredient), ingredient).await
    }
}

fn session_with(query: Option<&str>) -> (SearchSession, Arc<ScriptedApi>) {
    let api = Arc::new(ScriptedApi::default());
    let catalog = CatalogService::new(api.clone(), Arc::new(NoticeQueue::new()), false);
    let session = SearchSession::with_query(Arc::new(catalog), query.map(String::from));
    (session, api)
}

fn result_ids(session: &SearchSession) -> Vec<String> {
    session.results().into_iter().map(|c| c.id).collect()
}

// ===== Tests =====

#[tokio::test]
async fn test_search_stores_results_and_query() {
    let (session, api) = session_with(None);

    assert!(session.search(" negroni ").await);

    let state = session.snapshot();
    assert_eq!(state.query.as_deref(), Some("negroni"));
    assert!(!state.loading);
    assert_eq!(result_ids(&session), vec!["negroni"]);
    assert_eq!(api.calls(), vec!["s=negroni"]);
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let (session, _api) = session_with(None);

    let (slow, fast) = tokio::join!(session.search("slow gin"), session.search("fast gin"));

    assert!(!slow);
    assert!(fast);
    assert_eq!(result_ids(&session), vec!["fast gin"]);
    assert!(!session.snapshot().loading);
}

#[tokio::test]
async fn test_newer_filter_wins_over_slow_search() {
    let (session, _api) = session_with(None);
    session.set_category(Some("Shot".into()));

    let (search, filter) = tokio::join!(session.search("slow"), session.apply_filters());

    assert!(!search);
    assert!(filter);
    assert_eq!(result_ids(&session), vec!["Shot"]);
}

#[tokio::test]
async fn test_category_takes_precedence_over_alcoholic() {
    let (session, api) = session_with(Some("rum"));
    session.set_category(Some("Cocktail".into()));
    session.set_alcoholic(Some(AlcoholicFilter::NonAlcoholic));

    session.apply_filters().await;

    assert_eq!(api.calls(), vec!["c=Cocktail"]);
}

#[tokio::test]
async fn test_alcoholic_filter_without_category() {
    let (session, api) = session_with(None);
    session.set_alcoholic(Some(AlcoholicFilter::NonAlcoholic));

    session.apply_filters().await;

    assert_eq!(api.calls(), vec!["a=Non_Alcoholic"]);
    assert_eq!(result_ids(&session), vec!["Non_Alcoholic"]);
}

#[tokio::test]
async fn test_apply_without_filters_reruns_query() {
    let (session, api) = session_with(Some("rum"));

    session.apply_filters().await;

    assert_eq!(api.calls(), vec!["s=rum"]);
}

#[tokio::test]
async fn test_clear_filters_without_query_clears_results() {
    let (session, api) = session_with(None);
    session.set_category(Some("Cocktail".into()));
    session.apply_filters().await;
    assert_eq!(result_ids(&session).len(), 1);

    session.clear_filters().await;

    let state = session.snapshot();
    assert!(state.results.is_empty());
    assert!(state.selected_category.is_none());
    assert!(state.selected_alcoholic.is_none());
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_clear_filters_with_query_searches_again() {
    let (session, api) = session_with(Some("rum"));
    session.set_alcoholic(Some(AlcoholicFilter::Alcoholic));

    session.clear_filters().await;

    assert_eq!(api.calls(), vec!["s=rum"]);
    assert_eq!(result_ids(&session), vec!["rum"]);
}

#[tokio::test]
async fn test_ingredient_search() {
    let (session, api) = session_with(None);

    session.search_by_ingredient("Gin").await;

    assert_eq!(api.calls(), vec!["ing=Gin"]);
}

#[test]
fn test_blank_initial_query_is_none() {
    let (session, _api) = session_with(Some("   "));
    assert!(session.snapshot().query.is_none());
}
