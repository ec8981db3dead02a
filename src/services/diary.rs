//! Per-user tasting diary
//!
//! Append-only: entries are prepended (most recent first) and the list is
//! persisted under a user-scoped key. There is no update or delete.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::{Cocktail, DiaryEntry, DiaryRatings};
use crate::storage::{diary_key, load_json, save_json, KeyValueStore};

use super::notice::{Notice, NoticeSink};

/// One user's diary
pub struct DiaryStore {
    user_id: String,
    entries: Vec<DiaryEntry>,
    storage: Arc<dyn KeyValueStore>,
    notices: Arc<dyn NoticeSink>,
}

impl DiaryStore {
    /// Load `user_id`'s diary; malformed stored data yields an empty diary
    pub fn load(
        user_id: &str,
        storage: Arc<dyn KeyValueStore>,
        notices: Arc<dyn NoticeSink>,
    ) -> Self {
        let key = diary_key(user_id);
        let entries = match load_json::<Vec<DiaryEntry>>(storage.as_ref(), &key) {
            Ok(Some(entries)) => {
                info!(user_id, count = entries.len(), "Loaded diary");
                entries
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                error!(user_id, error = %e, "Error parsing saved diary, starting empty");
                Vec::new()
            }
        };

        Self {
            user_id: user_id.to_string(),
            entries,
            storage,
            notices,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Insert an entry at the front and persist the diary
    pub fn append(&mut self, entry: DiaryEntry) {
        self.entries.insert(0, entry);

        let key = diary_key(&self.user_id);
        if let Err(e) = save_json(self.storage.as_ref(), &key, &self.entries) {
            warn!(user_id = %self.user_id, error = %e, "Failed to save diary");
            self.notices.notify(Notice::error("Could not save your diary"));
        }
    }

    /// Build a new entry for `cocktail` and append it
    pub fn record(&mut self, cocktail: &Cocktail, notes: &str, ratings: DiaryRatings) -> DiaryEntry {
        let entry = DiaryEntry {
            id: format!("entry_{}", Uuid::new_v4().simple()),
            date: Utc::now(),
            cocktail_id: cocktail.id.clone(),
            cocktail_name: cocktail.name.clone(),
            notes: notes.to_string(),
            ratings,
        };

        self.append(entry.clone());
        self.notices
            .notify(Notice::success("Added to your cocktail diary"));
        entry
    }

    /// Entries, most recent first
    pub fn list(&self) -> &[DiaryEntry] {
        &self.entries
    }
}
