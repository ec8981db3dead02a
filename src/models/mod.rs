//! Cocktail Cellar data models
//!
//! Recipe records from the recipe API plus the locally owned favorites,
//! rating aggregates, diary entries and user identity.

pub mod cocktail;
pub mod diary;
pub mod favorite;
pub mod rating;
pub mod user;

pub use cocktail::*;
pub use diary::*;
pub use favorite::*;
pub use rating::*;
pub use user::*;
