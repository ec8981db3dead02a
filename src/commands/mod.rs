//! Application commands
//!
//! The operations a front end invokes, each taking the shared `AppState`
//! and returning `Result<_, AppError>`.

mod catalog;
mod diary;
mod favorites;
mod identity;
mod state;

#[cfg(test)]
mod tests;

pub use catalog::*;
pub use diary::*;
pub use favorites::*;
pub use identity::*;
pub use state::AppState;
