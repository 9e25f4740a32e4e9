use axum::{Json, extract::State};
use serde_json::Value;

use super::invitation::{
    ContentResponse, InvitationResponse, MetaResponse, PreviewResponse, PublishResponse,
    SaveResponse, StatusRequest, change_status_as, issue_preview_as, load_content_as, meta_as,
    publish_as, save_content_as, to_response,
};
use crate::{
    error::ApiError,
    extractors::{admin::AdminUser, invitation_id::InvitationId, json::JsonBody},
    state::AppState,
};

pub async fn list(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<Vec<InvitationResponse>>, ApiError> {
    let invitations = state.services.invitations.list(admin.actor()).await?;
    Ok(Json(invitations.into_iter().map(to_response).collect()))
}

pub async fn meta(
    State(state): State<AppState>,
    admin: AdminUser,
    InvitationId(id): InvitationId,
) -> Result<Json<MetaResponse>, ApiError> {
    meta_as(&state, admin.actor(), id).await
}

pub async fn load_content(
    State(state): State<AppState>,
    admin: AdminUser,
    InvitationId(id): InvitationId,
) -> Result<Json<ContentResponse>, ApiError> {
    load_content_as(&state, admin.actor(), id).await
}

pub async fn save_content(
    State(state): State<AppState>,
    admin: AdminUser,
    InvitationId(id): InvitationId,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<SaveResponse>, ApiError> {
    save_content_as(&state, admin.actor(), id, &body).await
}

pub async fn change_status(
    State(state): State<AppState>,
    admin: AdminUser,
    InvitationId(id): InvitationId,
    JsonBody(body): JsonBody<StatusRequest>,
) -> Result<Json<MetaResponse>, ApiError> {
    change_status_as(&state, admin.actor(), id, &body).await
}

pub async fn publish(
    State(state): State<AppState>,
    admin: AdminUser,
    InvitationId(id): InvitationId,
) -> Result<Json<PublishResponse>, ApiError> {
    publish_as(&state, admin.actor(), id).await
}

pub async fn issue_preview(
    State(state): State<AppState>,
    admin: AdminUser,
    InvitationId(id): InvitationId,
) -> Result<Json<PreviewResponse>, ApiError> {
    issue_preview_as(&state, admin.actor(), id).await
}
