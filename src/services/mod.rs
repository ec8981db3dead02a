//! Services module for Cocktail Cellar
//!
//! Owned, injectable stores for favorites, the tasting diary and the local
//! identity, plus the notice channel they report through.

pub mod diary;
pub mod favorites;
pub mod identity;
pub mod notice;

pub use diary::DiaryStore;
pub use favorites::FavoritesStore;
pub use identity::IdentityStore;
pub use notice::{Notice, NoticeLevel, NoticeQueue, NoticeSink};
