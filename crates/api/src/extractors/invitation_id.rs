use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use bson::oid::ObjectId;
use std::collections::HashMap;

use crate::error::ApiError;

/// Extracts the invitation id from the URL path parameter `{id}`
#[derive(Debug, Clone, Copy)]
pub struct InvitationId(pub ObjectId);

impl<S> FromRequestParts<S> for InvitationId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params): Path<HashMap<String, String>> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest("Missing path parameters".to_string()))?;

        let raw = params
            .get("id")
            .ok_or_else(|| ApiError::BadRequest("Missing id parameter".to_string()))?;

        let id = ObjectId::parse_str(raw)
            .map_err(|_| ApiError::BadRequest("Invalid invitation id format".to_string()))?;

        Ok(InvitationId(id))
    }
}
