//! Leaderboard and dashboard orderings over the favorites collection

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{FavoriteEntry, RatingDimension};

/// Default number of leaderboard entries
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Rated entries ordered by `overall` mean, highest first
///
/// Entries without any submission are excluded. The sort is stable, so
/// ties keep collection order.
pub fn top_rated(entries: &[FavoriteEntry], limit: usize) -> Vec<FavoriteEntry> {
    top_by_dimension(entries, RatingDimension::Overall, limit)
}

/// Rated entries ordered by one dimension's mean, highest first
///
/// Every entry with at least one submission is ranked, whichever
/// dimensions its submissions carried.
pub fn top_by_dimension(
    entries: &[FavoriteEntry],
    dimension: RatingDimension,
    limit: usize,
) -> Vec<FavoriteEntry> {
    let mut ranked: Vec<&FavoriteEntry> = entries
        .iter()
        .filter(|e| e.ratings.count > 0)
        .collect();

    ranked.sort_by(|a, b| {
        b.ratings
            .get(dimension)
            .partial_cmp(&a.ratings.get(dimension))
            .unwrap_or(Ordering::Equal)
    });

    ranked.into_iter().take(limit).cloned().collect()
}

/// Dashboard sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
    RatingHigh,
    RatingLow,
}

impl SortOption {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::NameAsc => "Name A-Z",
            Self::NameDesc => "Name Z-A",
            Self::RatingHigh => "Rating High-Low",
            Self::RatingLow => "Rating Low-High",
        }
    }
}

impl std::str::FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "rating-high" => Ok(Self::RatingHigh),
            "rating-low" => Ok(Self::RatingLow),
            other => Err(format!("unknown sort option '{}'", other)),
        }
    }
}

/// Dashboard listing: name filter (case-insensitive substring) then sort
pub fn dashboard_view(
    entries: &[FavoriteEntry],
    filter_text: &str,
    sort: SortOption,
) -> Vec<FavoriteEntry> {
    let needle = filter_text.trim().to_lowercase();
    let mut view: Vec<FavoriteEntry> = entries
        .iter()
        .filter(|e| needle.is_empty() || e.name().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    view.sort_by(|a, b| match sort {
        SortOption::Newest => b.added_at.cmp(&a.added_at),
        SortOption::Oldest => a.added_at.cmp(&b.added_at),
        SortOption::NameAsc => compare_names(a, b),
        SortOption::NameDesc => compare_names(b, a),
        SortOption::RatingHigh => b
            .ratings
            .overall
            .partial_cmp(&a.ratings.overall)
            .unwrap_or(Ordering::Equal),
        SortOption::RatingLow => a
            .ratings
            .overall
            .partial_cmp(&b.ratings.overall)
            .unwrap_or(Ordering::Equal),
    });

    view
}

fn compare_names(a: &FavoriteEntry, b: &FavoriteEntry) -> Ordering {
    a.name()
        .to_lowercase()
        .cmp(&b.name().to_lowercase())
        .then_with(|| a.name().cmp(b.name()))
}
