//! Local user identity

use serde::{Deserialize, Serialize};

/// Locally generated identity; there is no authentication behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// `user_<epoch millis>`
    pub id: String,
    pub display_name: String,
}
