//! Rating data models
//!
//! Flavor dimensions, the per-favorite running aggregate, and the partial
//! submission a user sends when rating a cocktail.

use serde::{Deserialize, Serialize};

/// Lowest rating value
pub const MIN_RATING: f64 = 0.0;

/// Highest rating value
pub const MAX_RATING: f64 = 5.0;

/// Flavor dimension of a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingDimension {
    Sweet,
    Sour,
    Bitter,
    Strong,
    Overall,
}

impl RatingDimension {
    /// All dimensions in display order
    pub const ALL: [RatingDimension; 5] = [
        RatingDimension::Sweet,
        RatingDimension::Sour,
        RatingDimension::Bitter,
        RatingDimension::Strong,
        RatingDimension::Overall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sweet => "sweet",
            Self::Sour => "sour",
            Self::Bitter => "bitter",
            Self::Strong => "strong",
            Self::Overall => "overall",
        }
    }

    /// Human label used by rating forms
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sweet => "Sweetness",
            Self::Sour => "Sourness",
            Self::Bitter => "Bitterness",
            Self::Strong => "Strength",
            Self::Overall => "Overall",
        }
    }
}

impl std::str::FromStr for RatingDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown rating dimension '{}'", s))
    }
}

/// Running rating aggregate of a favorite
///
/// Each dimension holds a running mean over `count`, the number of
/// submissions folded in, whichever dimensions they carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub sweet: f64,
    pub sour: f64,
    pub bitter: f64,
    pub strong: f64,
    pub overall: f64,
    pub count: u32,
}

impl RatingAggregate {
    /// Mean for one dimension
    pub fn get(&self, dimension: RatingDimension) -> f64 {
        match dimension {
            RatingDimension::Sweet => self.sweet,
            RatingDimension::Sour => self.sour,
            RatingDimension::Bitter => self.bitter,
            RatingDimension::Strong => self.strong,
            RatingDimension::Overall => self.overall,
        }
    }

    pub(crate) fn set(&mut self, dimension: RatingDimension, value: f64) {
        match dimension {
            RatingDimension::Sweet => self.sweet = value,
            RatingDimension::Sour => self.sour = value,
            RatingDimension::Bitter => self.bitter = value,
            RatingDimension::Strong => self.strong = value,
            RatingDimension::Overall => self.overall = value,
        }
    }

    /// Whether at least one rating has been submitted
    pub fn is_rated(&self) -> bool {
        self.count > 0
    }
}

/// Partial rating submission; absent dimensions are left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweet: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
}

impl RatingSubmission {
    /// Submission carrying a single dimension
    pub fn single(dimension: RatingDimension, value: f64) -> Self {
        let mut submission = Self::default();
        submission.set(dimension, value);
        submission
    }

    /// Builder-style setter
    pub fn with(mut self, dimension: RatingDimension, value: f64) -> Self {
        self.set(dimension, value);
        self
    }

    pub fn get(&self, dimension: RatingDimension) -> Option<f64> {
        match dimension {
            RatingDimension::Sweet => self.sweet,
            RatingDimension::Sour => self.sour,
            RatingDimension::Bitter => self.bitter,
            RatingDimension::Strong => self.strong,
            RatingDimension::Overall => self.overall,
        }
    }

    pub fn set(&mut self, dimension: RatingDimension, value: f64) {
        let slot = match dimension {
            RatingDimension::Sweet => &mut self.sweet,
            RatingDimension::Sour => &mut self.sour,
            RatingDimension::Bitter => &mut self.bitter,
            RatingDimension::Strong => &mut self.strong,
            RatingDimension::Overall => &mut self.overall,
        };
        *slot = Some(value);
    }

    /// Supplied dimensions with their values, in display order
    pub fn entries(&self) -> impl Iterator<Item = (RatingDimension, f64)> + '_ {
        RatingDimension::ALL
            .into_iter()
            .filter_map(move |d| self.get(d).map(|v| (d, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}
