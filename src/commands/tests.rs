//! Command facade tests over in-memory storage and a canned catalog

use std::sync::Arc;

use async_trait::async_trait;

use super::*;
use crate::api::{ApiError, CocktailApi, SampleCatalog};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{AlcoholicFilter, Cocktail, DiaryRatings, RatingDimension, RatingSubmission};
use crate::ratings::SortOption;
use crate::services::NoticeLevel;
use crate::storage::{KeyValueStore, MemoryStore, FAVORITES_KEY};

// ===== Helper Functions =====

/// Always-successful API answering from the bundled samples
struct CannedApi;

#[async_trait]
impl CocktailApi for CannedApi {
    async fn search_by_name(&self, name: &str) -> Result<Vec<Cocktail>, ApiError> {
        Ok(SampleCatalog.search_by_name(name))
    }
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Cocktail>, ApiError> {
        Ok(SampleCatalog.search_by_first_letter(letter))
    }
    async fn lookup_by_id(&self, id: &str) -> Result<Option<Cocktail>, ApiError> {
        Ok(SampleCatalog.lookup_by_id(id))
    }
    async fn random(&self) -> Result<Option<Cocktail>, ApiError> {
        Ok(SampleCatalog.lookup_by_id("11003"))
    }
    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        Ok(SampleCatalog.categories())
    }
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Cocktail>, ApiError> {
        Ok(SampleCatalog.filter_by_category(category))
    }
    async fn filter_by_alcoholic(&self, filter: AlcoholicFilter) -> Result<Vec<Cocktail>, ApiError> {
        Ok(SampleCatalog.filter_by_alcoholic(filter))
    }
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Cocktail>, ApiError> {
        Ok(SampleCatalog.search_by_ingredient(ingredient))
    }
}

fn setup_with(storage: Arc<MemoryStore>) -> AppState {
    AppState::new(AppConfig::default(), storage, Arc::new(CannedApi))
}

fn setup() -> (AppState, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::new());
    (setup_with(storage.clone()), storage)
}

fn overall(value: f64) -> RatingSubmission {
    RatingSubmission::single(RatingDimension::Overall, value)
}

// ===== Favorites =====

#[tokio::test]
async fn test_add_favorite_fetches_and_persists() {
    let (state, storage) = setup();

    assert!(add_favorite(&state, "11007").await.unwrap());
    assert!(is_favorite(&state, "11007").unwrap());
    assert!(storage.get(FAVORITES_KEY).unwrap().unwrap().contains("Margarita"));

    // Second add is a no-op
    assert!(!add_favorite(&state, "11007").await.unwrap());
    assert_eq!(list_favorites(&state).unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_unknown_cocktail_is_not_found() {
    let (state, _) = setup();
    let err = add_favorite(&state, "404").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_toggle_favorite() {
    let (state, _) = setup();

    assert!(toggle_favorite(&state, "11001").await.unwrap());
    assert!(!toggle_favorite(&state, "11001").await.unwrap());
    assert!(!is_favorite(&state, "11001").unwrap());
}

#[tokio::test]
async fn test_favorites_survive_restart() {
    let storage = Arc::new(MemoryStore::new());
    {
        let state = setup_with(storage.clone());
        add_favorite(&state, "11003").await.unwrap();
        rate_favorite(&state, "11003", &overall(4.0)).unwrap();
    }

    let state = setup_with(storage);
    let entry = get_favorite(&state, "11003").unwrap();
    assert_eq!(entry.ratings.overall, 4.0);
    assert_eq!(entry.ratings.count, 1);
}

#[tokio::test]
async fn test_rate_errors() {
    let (state, _) = setup();

    let err = rate_favorite(&state, "11007", &overall(5.0)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    add_favorite(&state, "11007").await.unwrap();
    let err = rate_favorite(&state, "11007", &RatingSubmission::default()).unwrap_err();
    assert_eq!(err.code(), "INVALID_INPUT");
}

#[tokio::test]
async fn test_top_rated_and_dashboard() {
    let (state, _) = setup();
    for id in ["11007", "11001", "11003"] {
        add_favorite(&state, id).await.unwrap();
    }
    rate_favorite(&state, "11007", &overall(4.0)).unwrap();
    rate_favorite(&state, "11001", &overall(2.0)).unwrap();
    rate_favorite(&state, "11003", &RatingSubmission::single(RatingDimension::Bitter, 5.0)).unwrap();

    let top: Vec<String> = get_top_rated(&state, Some(2))
        .unwrap()
        .into_iter()
        .map(|e| e.cocktail.id)
        .collect();
    assert_eq!(top, vec!["11007", "11001"]);

    let bitter = get_top_by_dimension(&state, RatingDimension::Bitter, None).unwrap();
    assert_eq!(bitter.len(), 3);
    assert_eq!(bitter[0].name(), "Negroni");

    // Rated on bitter only, still counted as rated
    let all = get_top_rated(&state, None).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].name(), "Negroni");

    let dashboard = get_dashboard(&state, "o", SortOption::NameAsc).unwrap();
    let names: Vec<&str> = dashboard.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Negroni", "Old Fashioned"]);
}

// ===== Catalog =====

#[tokio::test]
async fn test_search_and_filters() {
    let (state, _) = setup();

    let found = search_cocktails(&state, "negroni").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(search_state(&state).query.as_deref(), Some("negroni"));

    let filtered = filter_cocktails(&state, Some("Cocktail".into()), None).await.unwrap();
    assert_eq!(filtered.len(), 2);

    let cleared = clear_filters(&state).await.unwrap();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared[0].name, "Negroni");
}

#[tokio::test]
async fn test_blank_search_is_rejected() {
    let (state, _) = setup();

    let err = search_cocktails(&state, "  ").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(search_by_ingredient(&state, "").await.is_err());
    assert!(cocktails_by_letter(&state, '?').await.is_err());
    assert!(state.drain_notices().is_empty());
}

#[tokio::test]
async fn test_featured_cocktails_are_distinct() {
    let (state, _) = setup();
    let featured = featured_cocktails(&state).await.unwrap();
    assert_eq!(featured.len(), 1);
}

#[tokio::test]
async fn test_get_cocktail() {
    let (state, _) = setup();
    assert_eq!(get_cocktail(&state, "11001").await.unwrap().name, "Old Fashioned");
    assert!(matches!(
        get_cocktail(&state, "0").await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert_eq!(list_categories(&state).await.unwrap().len(), 11);
}

// ===== Identity and diary =====

#[tokio::test]
async fn test_diary_requires_login() {
    let (state, _) = setup();

    let err = add_diary_entry(&state, "11007", "", DiaryRatings::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotLoggedIn));
    assert!(matches!(list_diary(&state).unwrap_err(), AppError::NotLoggedIn));
}

#[tokio::test]
async fn test_diary_flow() {
    let (state, _) = setup();
    let user = login(&state, "  Ada ").unwrap();
    assert_eq!(user.display_name, "Ada");
    assert_eq!(current_user(&state), Some(user));

    let ratings = DiaryRatings {
        flavor: 4.0,
        presentation: 5.0,
        overall: 4.5,
    };
    add_diary_entry(&state, "11007", "Salty", ratings).await.unwrap();
    add_diary_entry(&state, "11003", "", DiaryRatings::default()).await.unwrap();

    let diary = list_diary(&state).unwrap();
    assert_eq!(diary.len(), 2);
    assert_eq!(diary[0].cocktail_name, "Negroni");
    assert_eq!(diary[1].notes, "Salty");
    assert_eq!(diary[1].ratings, ratings);

    logout(&state).unwrap();
    assert!(current_user(&state).is_none());
}

#[tokio::test]
async fn test_diary_rejects_out_of_range_ratings() {
    let (state, _) = setup();
    login(&state, "Ada").unwrap();

    let ratings = DiaryRatings {
        flavor: 6.0,
        ..DiaryRatings::default()
    };
    let err = add_diary_entry(&state, "11007", "", ratings).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_blank_login_is_invalid_input() {
    let (state, _) = setup();

    let err = login(&state, "   ").unwrap_err();
    assert_eq!(err.code(), "INVALID_INPUT");

    let notices = state.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
}
