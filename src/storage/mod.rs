//! Local storage module for Cocktail Cellar
//!
//! Provides the key-value persistence boundary and its backends,
//! following the Local First architecture principle.

mod database;
mod error;
mod keys;
mod kv;

pub use database::SqliteStore;
pub use error::StorageError;
pub use keys::*;
pub use kv::{load_json, save_json, KeyValueStore, MemoryStore};
