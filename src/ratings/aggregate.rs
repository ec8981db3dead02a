//! Incremental rating aggregation
//!
//! Folds rating submissions into running per-dimension means without
//! keeping the individual submissions around.

use tracing::debug;

use crate::models::{RatingAggregate, RatingDimension, RatingSubmission, MAX_RATING, MIN_RATING};

/// Fold one observation into a running mean
///
/// Returns `(mean', count + 1)` where
/// `mean' = (mean * count + value) / (count + 1)`.
pub fn fold_mean(mean: f64, count: u32, value: f64) -> (f64, u32) {
    let next = count.saturating_add(1);
    let folded = (mean * f64::from(count) + value) / f64::from(next);
    (folded, next)
}

/// Clamp a submitted value into the rating range; NaN is rejected
pub fn normalize_rating(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(MIN_RATING, MAX_RATING))
}

impl RatingAggregate {
    /// Fold a submission into the aggregate
    ///
    /// Every supplied dimension is folded against the shared `count`;
    /// absent ones keep their previous mean. `count` grows by one per call,
    /// not per dimension. A submission with no usable value changes nothing.
    /// Returns whether the aggregate changed.
    pub fn record(&mut self, submission: &RatingSubmission) -> bool {
        let values: Vec<(RatingDimension, f64)> = submission
            .entries()
            .filter_map(|(dimension, value)| normalize_rating(value).map(|v| (dimension, v)))
            .collect();

        if values.is_empty() {
            debug!("Ignoring empty rating submission");
            return false;
        }

        let previous = self.count;
        for (dimension, value) in values {
            let (mean, _) = fold_mean(self.get(dimension), previous, value);
            self.set(dimension, mean);
        }
        self.count = previous.saturating_add(1);

        true
    }
}
