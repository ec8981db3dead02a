// Cocktail Cellar Library
// Local-first cocktail catalog: recipe search, favorites with flavor
// ratings, leaderboards and a per-user tasting diary

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod ratings;
pub mod search;
pub mod services;
pub mod storage;

/// Database file name inside the data directory
pub const DATABASE_FILENAME: &str = "cellar.db";

pub use commands::AppState;
pub use config::AppConfig;
pub use error::AppError;
