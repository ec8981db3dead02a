//! Tasting diary data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rating snapshot stored with a diary entry, each value 0..=5
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryRatings {
    pub flavor: f64,
    pub presentation: f64,
    pub overall: f64,
}

/// One tasting note; never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    /// Entry ID (`entry_<uuid>`)
    pub id: String,
    /// When the note was written
    pub date: DateTime<Utc>,
    pub cocktail_id: String,
    pub cocktail_name: String,
    /// Free-text note, may be empty
    pub notes: String,
    pub ratings: DiaryRatings,
}
