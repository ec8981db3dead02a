//! Local login commands

use crate::error::AppError;
use crate::models::UserIdentity;

use super::state::AppState;

pub fn login(state: &AppState, display_name: &str) -> Result<UserIdentity, AppError> {
    state.identity.login(display_name).map_err(Into::into)
}

pub fn logout(state: &AppState) -> Result<(), AppError> {
    state.identity.logout().map_err(Into::into)
}

pub fn current_user(state: &AppState) -> Option<UserIdentity> {
    state.identity.current()
}
