//! Recipe catalog module
//!
//! - `client`: the `CocktailApi` trait and its HTTP implementation
//! - `catalog`: failure-tolerant service used by commands and search
//! - `samples`: bundled offline recipes

pub mod catalog;
pub mod client;
pub mod error;
pub mod samples;


pub use catalog::CatalogService;
pub use client::{CocktailApi, CocktailDbClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
pub use samples::{SampleCatalog, SAMPLE_CATEGORIES};
