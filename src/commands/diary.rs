//! Tasting diary commands

use crate::error::AppError;
use crate::models::{Cocktail, DiaryEntry, DiaryRatings, MAX_RATING};

use super::state::AppState;

fn validate_ratings(ratings: &DiaryRatings) -> Result<(), AppError> {
    let values = [
        ("flavor", ratings.flavor),
        ("presentation", ratings.presentation),
        ("overall", ratings.overall),
    ];
    for (name, value) in values {
        if !(0.0..=MAX_RATING).contains(&value) {
            return Err(AppError::InvalidInput(format!(
                "{} rating must be between 0 and {}",
                name, MAX_RATING
            )));
        }
    }
    Ok(())
}

/// Resolve a cocktail from the favorites, else from the catalog
async fn find_cocktail(state: &AppState, cocktail_id: &str) -> Result<Cocktail, AppError> {
    let saved = state
        .favorites()?
        .by_id(cocktail_id)
        .map(|entry| entry.cocktail.clone());
    if let Some(cocktail) = saved {
        return Ok(cocktail);
    }

    state
        .catalog
        .details(cocktail_id)
        .await
        .ok_or_else(|| AppError::not_found(format!("cocktail {}", cocktail_id)))
}

/// Write a tasting note for the logged-in user
pub async fn add_diary_entry(
    state: &AppState,
    cocktail_id: &str,
    notes: &str,
    ratings: DiaryRatings,
) -> Result<DiaryEntry, AppError> {
    validate_ratings(&ratings)?;
    if state.identity.current().is_none() {
        return Err(AppError::NotLoggedIn);
    }

    let cocktail = find_cocktail(state, cocktail_id.trim()).await?;
    let mut diary = state.diary()?;
    Ok(diary.record(&cocktail, notes.trim(), ratings))
}

/// The logged-in user's diary, most recent first
pub fn list_diary(state: &AppState) -> Result<Vec<DiaryEntry>, AppError> {
    Ok(state.diary()?.list().to_vec())
}
