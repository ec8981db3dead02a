//! Favorite entry data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cocktail::Cocktail;
use super::rating::RatingAggregate;

/// A cocktail saved to the user's collection
///
/// Serialized flat, the cocktail's wire fields next to `isFavorite`,
/// `ratings` and `addedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(flatten)]
    pub cocktail: Cocktail,
    #[serde(rename = "isFavorite", default = "default_is_favorite")]
    pub is_favorite: bool,
    #[serde(default)]
    pub ratings: RatingAggregate,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

fn default_is_favorite() -> bool {
    true
}

impl FavoriteEntry {
    /// Wrap a cocktail with a zeroed aggregate
    pub fn new(cocktail: Cocktail, added_at: DateTime<Utc>) -> Self {
        Self {
            cocktail,
            is_favorite: true,
            ratings: RatingAggregate::default(),
            added_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.cocktail.id
    }

    pub fn name(&self) -> &str {
        &self.cocktail.name
    }
}
