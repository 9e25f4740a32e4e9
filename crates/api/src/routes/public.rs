use axum::{
    Json,
    extract::{Path, State},
};
use mariecard_db::models::ContentDocument;
use serde::Serialize;

use super::invitation::rfc3339;
use crate::{error::ApiError, extractors::auth::MaybeAuthUser, state::AppState};

#[derive(Debug, Serialize)]
pub struct PublicInvitationResponse {
    pub public_id: String,
    pub title: String,
    pub published_at: Option<String>,
    pub version: i64,
    pub content: ContentDocument,
}

#[derive(Debug, Serialize)]
pub struct PreviewContentResponse {
    pub content: Option<ContentDocument>,
    pub reason: Option<String>,
}

pub async fn invitation(
    State(state): State<AppState>,
    Path(public_id): Path<String>,
) -> Result<Json<PublicInvitationResponse>, ApiError> {
    let public = state.services.publication.public_content(&public_id).await?;

    Ok(Json(PublicInvitationResponse {
        public_id: public.public_id,
        title: public.title,
        published_at: public.published_at.map(rfc3339),
        version: public.version,
        content: public.content,
    }))
}

/// Denials come back as `reason` with status 200 so the preview page can
/// explain them.
pub async fn preview(
    State(state): State<AppState>,
    user: MaybeAuthUser,
    Path(token): Path<String>,
) -> Result<Json<PreviewContentResponse>, ApiError> {
    let resolution = state
        .services
        .preview
        .resolve(&token, user.user_id())
        .await?;

    Ok(Json(PreviewContentResponse {
        content: resolution.content,
        reason: resolution.reason.map(|reason| reason.as_str().to_string()),
    }))
}
