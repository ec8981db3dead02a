//! Storage keys
//!
//! Kept identical to the keys the web client wrote to local storage.

/// Favorites collection
pub const FAVORITES_KEY: &str = "cocktailFavorites";

/// Current user ID
pub const CUSTOMER_ID_KEY: &str = "customerId";

/// Current user display name
pub const CUSTOMER_NAME_KEY: &str = "customerName";

/// Diary key for one user
pub fn diary_key(user_id: &str) -> String {
    format!("cocktailDiary_{}", user_id)
}
