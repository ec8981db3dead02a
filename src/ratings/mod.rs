//! Rating aggregation, rankings and rating widgets
//!
//! ## Architecture
//!
//! - **Aggregation**: running per-dimension means folded one submission at a time
//! - **Leaderboard**: top-rated and per-dimension rankings, dashboard sorting
//! - **Widgets**: rating input and read-only rating display

pub mod aggregate;
pub mod leaderboard;
pub mod widget;


pub use aggregate::{fold_mean, normalize_rating};
pub use leaderboard::{dashboard_view, top_by_dimension, top_rated, SortOption, DEFAULT_TOP_LIMIT};
pub use widget::{RatingDisplay, RatingInput};
