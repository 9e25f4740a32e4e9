use axum::{extract::FromRequestParts, http::request::Parts};
use mariecard_services::{Actor, SharedSecretGate};

use super::auth::FromRef;
use crate::{error::ApiError, state::AppState};

/// Caller holding the admin capability, checked through the configured gate.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser;

impl AdminUser {
    pub fn actor(&self) -> Actor {
        Actor::Admin
    }
}

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let presented = parts
            .headers
            .get(SharedSecretGate::HEADER)
            .and_then(|v| v.to_str().ok());

        if app_state.admin_gate.is_authorized(presented) {
            Ok(AdminUser)
        } else {
            Err(ApiError::Unauthorized("Admin authentication failed".to_string()))
        }
    }
}
