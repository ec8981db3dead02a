//! Favorites and ratings store
//!
//! Owns the user's saved cocktails and their rating aggregates. The whole
//! collection is re-serialized to the key-value store after every mutation
//! and hydrated from it on construction.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::models::{Cocktail, FavoriteEntry, RatingAggregate, RatingSubmission};
use crate::ratings::{top_rated, DEFAULT_TOP_LIMIT};
use crate::storage::{load_json, save_json, KeyValueStore, StorageError, FAVORITES_KEY};

use super::notice::{Notice, NoticeSink};

/// Favorites collection, in insertion order
pub struct FavoritesStore {
    favorites: Vec<FavoriteEntry>,
    storage: Arc<dyn KeyValueStore>,
    notices: Arc<dyn NoticeSink>,
}

impl FavoritesStore {
    /// Create the store and hydrate it from `storage`
    ///
    /// A missing key means an empty collection. A malformed stored value is
    /// logged and also leaves the collection empty.
    pub fn load(storage: Arc<dyn KeyValueStore>, notices: Arc<dyn NoticeSink>) -> Self {
        let favorites = match load_json::<Vec<FavoriteEntry>>(storage.as_ref(), FAVORITES_KEY) {
            Ok(Some(favorites)) => {
                info!(count = favorites.len(), "Loaded favorites");
                favorites
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                error!(error = %e, "Error parsing saved favorites, starting empty");
                Vec::new()
            }
        };

        Self {
            favorites,
            storage,
            notices,
        }
    }

    /// Save a cocktail to the collection
    ///
    /// Returns `false` (with an info notice) if it is already saved; the
    /// existing entry is left untouched.
    pub fn add(&mut self, cocktail: Cocktail) -> bool {
        if self.is_favorite(&cocktail.id) {
            self.notices
                .notify(Notice::info("Cocktail already in your collection"));
            return false;
        }

        debug!(id = %cocktail.id, name = %cocktail.name, "Adding favorite");
        self.favorites.push(FavoriteEntry::new(cocktail, Utc::now()));
        self.persist();
        self.notices
            .notify(Notice::success("Cocktail added to your collection"));
        true
    }

    /// Remove a cocktail from the collection; returns whether it was present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|entry| entry.id() != id);
        if self.favorites.len() == before {
            debug!(id, "Remove ignored, not a favorite");
            return false;
        }

        self.persist();
        self.notices
            .notify(Notice::success("Cocktail removed from your collection"));
        true
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|entry| entry.id() == id)
    }

    /// Fold a rating submission into a favorite's aggregate
    ///
    /// Returns the updated aggregate, or `None` when no favorite matches or
    /// the submission carries no usable value.
    pub fn rate(&mut self, id: &str, submission: &RatingSubmission) -> Option<RatingAggregate> {
        let Some(entry) = self.favorites.iter_mut().find(|entry| entry.id() == id) else {
            debug!(id, "Rating ignored, not a favorite");
            return None;
        };

        if !entry.ratings.record(submission) {
            return None;
        }

        let updated = entry.ratings;
        self.persist();
        self.notices.notify(Notice::success("Rating submitted!"));
        Some(updated)
    }

    /// Rated favorites, best `overall` first
    pub fn top_rated(&self, limit: usize) -> Vec<FavoriteEntry> {
        top_rated(&self.favorites, limit)
    }

    /// `top_rated` with the default limit
    pub fn top_rated_default(&self) -> Vec<FavoriteEntry> {
        self.top_rated(DEFAULT_TOP_LIMIT)
    }

    pub fn by_id(&self, id: &str) -> Option<&FavoriteEntry> {
        self.favorites.iter().find(|entry| entry.id() == id)
    }

    /// The whole collection, in insertion order
    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            warn!(error = %e, "Failed to save favorites");
            self.notices
                .notify(Notice::error("Could not save your collection"));
        }
    }

    fn try_persist(&self) -> Result<(), StorageError> {
        save_json(self.storage.as_ref(), FAVORITES_KEY, &self.favorites)
    }
}

#[cfg(test)]
mod tests;
