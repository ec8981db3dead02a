//! Favorites, ratings and leaderboard commands

use crate::error::AppError;
use crate::models::{Cocktail, FavoriteEntry, RatingAggregate, RatingDimension, RatingSubmission};
use crate::ratings::{dashboard_view, top_by_dimension, SortOption};

use super::state::AppState;

/// Save a cocktail by ID, fetching its full record
///
/// Returns `false` if it was already saved.
pub async fn add_favorite(state: &AppState, cocktail_id: &str) -> Result<bool, AppError> {
    let existing = state
        .favorites()?
        .by_id(cocktail_id)
        .map(|entry| entry.cocktail.clone());

    let cocktail = match existing {
        Some(cocktail) => cocktail,
        None => state
            .catalog
            .details(cocktail_id)
            .await
            .ok_or_else(|| AppError::not_found(format!("cocktail {}", cocktail_id)))?,
    };

    save_favorite(state, cocktail)
}

/// Save an already fetched cocktail
pub fn save_favorite(state: &AppState, cocktail: Cocktail) -> Result<bool, AppError> {
    Ok(state.favorites()?.add(cocktail))
}

/// Returns whether the cocktail was saved
pub fn remove_favorite(state: &AppState, cocktail_id: &str) -> Result<bool, AppError> {
    Ok(state.favorites()?.remove(cocktail_id))
}

/// Flip a cocktail's saved state; returns the new state
pub async fn toggle_favorite(state: &AppState, cocktail_id: &str) -> Result<bool, AppError> {
    if is_favorite(state, cocktail_id)? {
        remove_favorite(state, cocktail_id)?;
        Ok(false)
    } else {
        add_favorite(state, cocktail_id).await?;
        Ok(true)
    }
}

pub fn is_favorite(state: &AppState, cocktail_id: &str) -> Result<bool, AppError> {
    Ok(state.favorites()?.is_favorite(cocktail_id))
}

pub fn list_favorites(state: &AppState) -> Result<Vec<FavoriteEntry>, AppError> {
    Ok(state.favorites()?.favorites().to_vec())
}

pub fn get_favorite(state: &AppState, cocktail_id: &str) -> Result<FavoriteEntry, AppError> {
    state
        .favorites()?
        .by_id(cocktail_id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("favorite {}", cocktail_id)))
}

/// Fold a rating into a saved cocktail's aggregate
pub fn rate_favorite(
    state: &AppState,
    cocktail_id: &str,
    submission: &RatingSubmission,
) -> Result<RatingAggregate, AppError> {
    let mut favorites = state.favorites()?;
    if !favorites.is_favorite(cocktail_id) {
        return Err(AppError::not_found(format!("favorite {}", cocktail_id)));
    }

    favorites.rate(cocktail_id, submission).ok_or_else(|| {
        AppError::InvalidInput("a rating needs at least one numeric value".to_string())
    })
}

/// Best rated favorites; `limit` defaults to the configured length
pub fn get_top_rated(state: &AppState, limit: Option<usize>) -> Result<Vec<FavoriteEntry>, AppError> {
    let limit = limit.unwrap_or(state.config.top_rated_limit);
    Ok(state.favorites()?.top_rated(limit))
}

pub fn get_top_by_dimension(
    state: &AppState,
    dimension: RatingDimension,
    limit: Option<usize>,
) -> Result<Vec<FavoriteEntry>, AppError> {
    let limit = limit.unwrap_or(state.config.top_rated_limit);
    Ok(top_by_dimension(state.favorites()?.favorites(), dimension, limit))
}

/// Favorites filtered by name and sorted for the dashboard
pub fn get_dashboard(
    state: &AppState,
    filter_text: &str,
    sort: SortOption,
) -> Result<Vec<FavoriteEntry>, AppError> {
    Ok(dashboard_view(state.favorites()?.favorites(), filter_text, sort))
}
