//! Rating input and rating display
//!
//! Two separate capabilities: `RatingInput` collects slider values and
//! produces a submission, `RatingDisplay` renders a stored value read-only.

use std::collections::BTreeMap;

use crate::models::{RatingDimension, RatingSubmission};

/// Number of stars in a display
pub const STAR_COUNT: u8 = 5;

/// Slider bounds for rating input
const SLIDER_MIN: u8 = 1;
const SLIDER_MAX: u8 = 5;
const SLIDER_DEFAULT: u8 = 3;

/// Rating form state, one slider per dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingInput {
    values: BTreeMap<&'static str, (RatingDimension, u8)>,
}

impl RatingInput {
    /// Form with every dimension at the default slider position
    pub fn new() -> Self {
        Self::for_dimensions(&RatingDimension::ALL)
    }

    /// Form restricted to some dimensions
    pub fn for_dimensions(dimensions: &[RatingDimension]) -> Self {
        let values = dimensions
            .iter()
            .map(|d| (d.as_str(), (*d, SLIDER_DEFAULT)))
            .collect();
        Self { values }
    }

    /// Move a slider; values snap to the 1..=5 range
    ///
    /// Returns the stored value, or `None` if the form has no such slider.
    pub fn set(&mut self, dimension: RatingDimension, value: u8) -> Option<u8> {
        let slot = self.values.get_mut(dimension.as_str())?;
        slot.1 = value.clamp(SLIDER_MIN, SLIDER_MAX);
        Some(slot.1)
    }

    pub fn value(&self, dimension: RatingDimension) -> Option<u8> {
        self.values.get(dimension.as_str()).map(|(_, v)| *v)
    }

    /// Submission carrying every slider in the form
    pub fn submission(&self) -> RatingSubmission {
        self.values
            .values()
            .fold(RatingSubmission::default(), |acc, (dimension, value)| {
                acc.with(*dimension, f64::from(*value))
            })
    }
}

impl Default for RatingInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only star display of a rating value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingDisplay {
    value: f64,
}

impl RatingDisplay {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Number of filled stars: star `n` is filled when `n <= round(value)`
    pub fn filled(&self) -> u8 {
        if self.value.is_nan() {
            return 0;
        }
        self.value.round().clamp(0.0, f64::from(STAR_COUNT)) as u8
    }

    /// Fill state of each star, first to last
    pub fn stars(&self) -> [bool; STAR_COUNT as usize] {
        let filled = self.filled();
        std::array::from_fn(|i| (i as u8) < filled)
    }

    /// Text rendering, e.g. `★★★☆☆`
    pub fn render(&self) -> String {
        self.stars()
            .iter()
            .map(|filled| if *filled { '★' } else { '☆' })
            .collect()
    }

    /// Stars followed by the numeric value, e.g. `★★★★☆ 3.8`
    pub fn render_with_value(&self) -> String {
        format!("{} {:.1}", self.render(), self.value)
    }
}
