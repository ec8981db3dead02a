//! Recipe browsing commands

use crate::error::AppError;
use crate::models::{AlcoholicFilter, Cocktail};
use crate::search::SearchState;

use super::state::AppState;

/// Number of random draws for the featured list
pub const FEATURED_DRAWS: usize = 4;

fn require(value: &str, what: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(value.to_string())
}

/// Search cocktails by name
pub async fn search_cocktails(state: &AppState, query: &str) -> Result<Vec<Cocktail>, AppError> {
    let query = require(query, "search query")?;
    state.search.search(&query).await;
    Ok(state.search.results())
}

/// Select filters and run them
///
/// A category takes precedence over the alcohol filter; with neither, the
/// last query is searched again.
pub async fn filter_cocktails(
    state: &AppState,
    category: Option<String>,
    alcoholic: Option<AlcoholicFilter>,
) -> Result<Vec<Cocktail>, AppError> {
    state.search.set_category(category);
    state.search.set_alcoholic(alcoholic);
    state.search.apply_filters().await;
    Ok(state.search.results())
}

pub async fn clear_filters(state: &AppState) -> Result<Vec<Cocktail>, AppError> {
    state.search.clear_filters().await;
    Ok(state.search.results())
}

pub async fn search_by_ingredient(
    state: &AppState,
    ingredient: &str,
) -> Result<Vec<Cocktail>, AppError> {
    let ingredient = require(ingredient, "ingredient")?;
    state.search.search_by_ingredient(&ingredient).await;
    Ok(state.search.results())
}

pub fn search_state(state: &AppState) -> SearchState {
    state.search.snapshot()
}

pub async fn cocktails_by_letter(state: &AppState, letter: char) -> Result<Vec<Cocktail>, AppError> {
    if !letter.is_alphanumeric() {
        return Err(AppError::InvalidInput(format!(
            "'{}' is not a letter or digit",
            letter
        )));
    }
    Ok(state.catalog.by_first_letter(letter).await)
}

/// Full recipe by ID
pub async fn get_cocktail(state: &AppState, cocktail_id: &str) -> Result<Cocktail, AppError> {
    let cocktail_id = require(cocktail_id, "cocktail ID")?;
    state
        .catalog
        .details(&cocktail_id)
        .await
        .ok_or_else(|| AppError::not_found(format!("cocktail {}", cocktail_id)))
}

pub async fn random_cocktail(state: &AppState) -> Result<Option<Cocktail>, AppError> {
    Ok(state.catalog.random().await)
}

/// Up to `FEATURED_DRAWS` distinct random cocktails
pub async fn featured_cocktails(state: &AppState) -> Result<Vec<Cocktail>, AppError> {
    let mut featured: Vec<Cocktail> = Vec::with_capacity(FEATURED_DRAWS);
    for _ in 0..FEATURED_DRAWS {
        if let Some(cocktail) = state.catalog.random().await {
            if !featured.iter().any(|c| c.id == cocktail.id) {
                featured.push(cocktail);
            }
        }
    }
    Ok(featured)
}

pub async fn list_categories(state: &AppState) -> Result<Vec<String>, AppError> {
    Ok(state.catalog.categories().await)
}
