//! Local user identity
//!
//! "Logging in" only records a display name and a generated ID under two
//! storage keys; there is no authentication.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::models::UserIdentity;
use crate::storage::{KeyValueStore, StorageError, CUSTOMER_ID_KEY, CUSTOMER_NAME_KEY};

use super::notice::{Notice, NoticeSink};

pub struct IdentityStore {
    storage: Arc<dyn KeyValueStore>,
    notices: Arc<dyn NoticeSink>,
}

impl IdentityStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, notices: Arc<dyn NoticeSink>) -> Self {
        Self { storage, notices }
    }

    /// The logged-in user, if both keys are present
    pub fn current(&self) -> Option<UserIdentity> {
        let read = |key: &str| match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(e) => {
                warn!(key, error = %e, "Failed to read identity");
                None
            }
        };

        Some(UserIdentity {
            id: read(CUSTOMER_ID_KEY)?,
            display_name: read(CUSTOMER_NAME_KEY)?,
        })
    }

    /// Start a session under `display_name` with a freshly generated ID
    pub fn login(&self, display_name: &str) -> Result<UserIdentity, StorageError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            self.notices.notify(Notice::error("Please enter your name"));
            return Err(StorageError::InvalidInput(
                "display name must not be empty".to_string(),
            ));
        }

        let identity = UserIdentity {
            id: format!("user_{}", Utc::now().timestamp_millis()),
            display_name: display_name.to_string(),
        };

        self.storage.set(CUSTOMER_ID_KEY, &identity.id)?;
        self.storage.set(CUSTOMER_NAME_KEY, &identity.display_name)?;

        info!(user_id = %identity.id, "User logged in");
        self.notices
            .notify(Notice::success(format!("Welcome, {}!", identity.display_name)));
        Ok(identity)
    }

    /// Forget the current identity; diaries stay in storage
    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove(CUSTOMER_ID_KEY)?;
        self.storage.remove(CUSTOMER_NAME_KEY)?;
        self.notices.notify(Notice::success("Logged out successfully"));
        Ok(())
    }
}
