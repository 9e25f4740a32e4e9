use axum::{
    Json,
    extract::State,
};
use mariecard_db::models::{ContentDocument, Invitation};
use mariecard_services::{
    Actor,
    invitations::InvitationMeta,
    preview::PreviewGrant,
    publication::{PublishOutcome, StatusAction},
    versions::ContentVersion,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::ApiError,
    extractors::{auth::AuthUser, invitation_id::InvitationId, json::JsonBody},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateInvitationRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub action: Option<String>,
}

impl StatusRequest {
    pub fn parse(&self) -> Result<StatusAction, ApiError> {
        match self.action.as_deref() {
            Some("expire") => Ok(StatusAction::Expire),
            Some("restore") => Ok(StatusAction::Restore),
            _ => Err(ApiError::BadRequest(
                "action must be \"expire\" or \"restore\"".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvitationResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub public_id: Option<String>,
    pub status: String,
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub id: String,
    pub public_id: Option<String>,
    pub status: String,
    pub published_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub version: i64,
    pub content: ContentDocument,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub version: i64,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub invitation_id: String,
    pub public_id: String,
    pub url: String,
    pub version: i64,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub token: String,
    pub preview_url: String,
    pub expires_at: String,
}

pub(crate) fn rfc3339(at: bson::DateTime) -> String {
    at.try_to_rfc3339_string().unwrap_or_default()
}

pub(crate) fn to_response(invitation: Invitation) -> InvitationResponse {
    InvitationResponse {
        id: invitation.id.map(|id| id.to_hex()).unwrap_or_default(),
        user_id: invitation.user_id.to_hex(),
        title: invitation.title,
        public_id: invitation.public_id,
        status: invitation.status.as_str().to_string(),
        published_at: invitation.published_at.map(rfc3339),
        created_at: rfc3339(invitation.created_at),
        updated_at: rfc3339(invitation.updated_at),
    }
}

pub(crate) fn to_meta(meta: InvitationMeta) -> MetaResponse {
    MetaResponse {
        id: meta.id.to_hex(),
        public_id: meta.public_id,
        status: meta.status.as_str().to_string(),
        published_at: meta.published_at.map(rfc3339),
    }
}

pub(crate) fn to_content(version: ContentVersion) -> ContentResponse {
    ContentResponse {
        version: version.version,
        content: version.content,
        created_at: rfc3339(version.created_at),
    }
}

pub(crate) fn to_publish(outcome: PublishOutcome) -> PublishResponse {
    PublishResponse {
        invitation_id: outcome.invitation_id.to_hex(),
        public_id: outcome.public_id,
        url: outcome.url,
        version: outcome.version,
    }
}

pub(crate) fn to_preview(grant: PreviewGrant) -> PreviewResponse {
    PreviewResponse {
        token: grant.token,
        preview_url: grant.preview_url,
        expires_at: rfc3339(grant.expires_at),
    }
}

pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<InvitationResponse>>, ApiError> {
    let invitations = state.services.invitations.list(auth.actor()).await?;
    Ok(Json(invitations.into_iter().map(to_response).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(body): JsonBody<CreateInvitationRequest>,
) -> Result<Json<InvitationResponse>, ApiError> {
    let invitation = state
        .services
        .invitations
        .create(auth.user_id, body.title)
        .await?;
    Ok(Json(to_response(invitation)))
}

pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    InvitationId(id): InvitationId,
) -> Result<Json<InvitationResponse>, ApiError> {
    let invitation = state.services.invitations.get(auth.actor(), id).await?;
    Ok(Json(to_response(invitation)))
}

pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    InvitationId(id): InvitationId,
) -> Result<Json<Value>, ApiError> {
    state.services.invitations.delete(auth.actor(), id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

pub async fn meta(
    State(state): State<AppState>,
    auth: AuthUser,
    InvitationId(id): InvitationId,
) -> Result<Json<MetaResponse>, ApiError> {
    meta_as(&state, auth.actor(), id).await
}

pub async fn load_content(
    State(state): State<AppState>,
    auth: AuthUser,
    InvitationId(id): InvitationId,
) -> Result<Json<ContentResponse>, ApiError> {
    load_content_as(&state, auth.actor(), id).await
}

pub async fn save_content(
    State(state): State<AppState>,
    auth: AuthUser,
    InvitationId(id): InvitationId,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<SaveResponse>, ApiError> {
    save_content_as(&state, auth.actor(), id, &body).await
}

pub async fn change_status(
    State(state): State<AppState>,
    auth: AuthUser,
    InvitationId(id): InvitationId,
    JsonBody(body): JsonBody<StatusRequest>,
) -> Result<Json<MetaResponse>, ApiError> {
    change_status_as(&state, auth.actor(), id, &body).await
}

pub async fn publish(
    State(state): State<AppState>,
    auth: AuthUser,
    InvitationId(id): InvitationId,
) -> Result<Json<PublishResponse>, ApiError> {
    publish_as(&state, auth.actor(), id).await
}

pub async fn create_and_publish(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<PublishResponse>, ApiError> {
    let outcome = state
        .services
        .publication
        .create_and_publish(auth.actor(), &body)
        .await?;
    Ok(Json(to_publish(outcome)))
}

pub async fn issue_preview(
    State(state): State<AppState>,
    auth: AuthUser,
    InvitationId(id): InvitationId,
) -> Result<Json<PreviewResponse>, ApiError> {
    issue_preview_as(&state, auth.actor(), id).await
}

// Shared with the admin mirrors, which act as `Actor::Admin`.

pub(crate) async fn meta_as(
    state: &AppState,
    actor: Actor,
    id: bson::oid::ObjectId,
) -> Result<Json<MetaResponse>, ApiError> {
    let meta = state.services.invitations.meta(actor, id).await?;
    Ok(Json(to_meta(meta)))
}

pub(crate) async fn load_content_as(
    state: &AppState,
    actor: Actor,
    id: bson::oid::ObjectId,
) -> Result<Json<ContentResponse>, ApiError> {
    let draft = state.services.invitations.load_draft(actor, id).await?;
    Ok(Json(to_content(draft)))
}

pub(crate) async fn save_content_as(
    state: &AppState,
    actor: Actor,
    id: bson::oid::ObjectId,
    body: &Value,
) -> Result<Json<SaveResponse>, ApiError> {
    let version = state.services.invitations.save_draft(actor, id, body).await?;
    Ok(Json(SaveResponse { version }))
}

pub(crate) async fn change_status_as(
    state: &AppState,
    actor: Actor,
    id: bson::oid::ObjectId,
    body: &StatusRequest,
) -> Result<Json<MetaResponse>, ApiError> {
    let action = body.parse()?;
    let meta = state
        .services
        .publication
        .transition(actor, id, action)
        .await?;
    Ok(Json(to_meta(meta)))
}

pub(crate) async fn publish_as(
    state: &AppState,
    actor: Actor,
    id: bson::oid::ObjectId,
) -> Result<Json<PublishResponse>, ApiError> {
    let outcome = state.services.publication.publish(actor, id).await?;
    Ok(Json(to_publish(outcome)))
}

pub(crate) async fn issue_preview_as(
    state: &AppState,
    actor: Actor,
    id: bson::oid::ObjectId,
) -> Result<Json<PreviewResponse>, ApiError> {
    let grant = state.services.preview.issue(actor, id).await?;
    Ok(Json(to_preview(grant)))
}
