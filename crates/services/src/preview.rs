use std::sync::Arc;

use bson::{DateTime, oid::ObjectId};
use chrono::Duration;
use mariecard_config::{AppSettings, PublicationSettings};
use mariecard_db::models::{ContentDocument, PreviewToken};
use serde::Serialize;
use tracing::{debug, info};

use crate::auth::Actor;
use crate::clock::Clock;
use crate::error::ServiceResult;
use crate::invitations::authorize;
use crate::repo::{InvitationRepo, PreviewTokenRepo};
use crate::versions::VersionStore;

#[derive(Debug, Clone, Serialize)]
pub struct PreviewGrant {
    pub token: String,
    pub preview_url: String,
    pub expires_at: DateTime,
}

/// Why a preview link did not resolve to content.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PreviewDenial {
    Unauthorized,
    NotFound,
    Forbidden,
    Expired,
}

impl PreviewDenial {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewDenial::Unauthorized => "unauthorized",
            PreviewDenial::NotFound => "not_found",
            PreviewDenial::Forbidden => "forbidden",
            PreviewDenial::Expired => "expired",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewResolution {
    pub content: Option<ContentDocument>,
    pub reason: Option<PreviewDenial>,
}

impl PreviewResolution {
    fn denied(reason: PreviewDenial) -> Self {
        Self {
            content: None,
            reason: Some(reason),
        }
    }
}

/// Short-lived, owner-only links to the current draft.
pub struct PreviewService {
    invitations: Arc<dyn InvitationRepo>,
    tokens: Arc<dyn PreviewTokenRepo>,
    versions: Arc<VersionStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    app: AppSettings,
    publication: PublicationSettings,
}

impl PreviewService {
    pub fn new(
        invitations: Arc<dyn InvitationRepo>,
        tokens: Arc<dyn PreviewTokenRepo>,
        versions: Arc<VersionStore>,
        clock: Arc<dyn Clock>,
        app: AppSettings,
        publication: PublicationSettings,
    ) -> Self {
        Self {
            invitations,
            tokens,
            versions,
            clock,
            ttl: Duration::seconds(publication.preview_ttl_secs as i64),
            app,
            publication,
        }
    }

    /// Mints a new token on every call. The token belongs to the
    /// invitation's owner even when an admin asks for it.
    pub async fn issue(&self, actor: Actor, invitation_id: ObjectId) -> ServiceResult<PreviewGrant> {
        let invitation = authorize(self.invitations.as_ref(), actor, invitation_id).await?;

        let now = self.clock.now();
        let token = PreviewToken {
            id: None,
            token: uuid::Uuid::new_v4().to_string(),
            invitation_id,
            user_id: invitation.user_id,
            expires_at: DateTime::from_chrono(now + self.ttl),
            created_at: DateTime::from_chrono(now),
        };
        self.tokens.insert(&token).await?;

        info!(%invitation_id, expires_at = %token.expires_at, "Issued preview token");
        Ok(PreviewGrant {
            preview_url: self.publication.preview_url(&self.app, &token.token),
            expires_at: token.expires_at,
            token: token.token,
        })
    }

    /// Denials are reported in order: no identity, unknown token, someone
    /// else's token, expired token.
    pub async fn resolve(
        &self,
        token: &str,
        requester: Option<ObjectId>,
    ) -> ServiceResult<PreviewResolution> {
        let Some(requester) = requester else {
            return Ok(PreviewResolution::denied(PreviewDenial::Unauthorized));
        };
        let Some(grant) = self.tokens.find_by_token(token).await? else {
            return Ok(PreviewResolution::denied(PreviewDenial::NotFound));
        };
        if grant.user_id != requester {
            return Ok(PreviewResolution::denied(PreviewDenial::Forbidden));
        }
        if grant.is_expired_at(self.clock.now_bson()) {
            debug!(invitation_id = %grant.invitation_id, "Preview token expired");
            return Ok(PreviewResolution::denied(PreviewDenial::Expired));
        }
        if self.invitations.find_by_id(grant.invitation_id).await?.is_none() {
            return Ok(PreviewResolution::denied(PreviewDenial::NotFound));
        }

        let draft = self.versions.load_or_seed_draft(grant.invitation_id).await?;
        Ok(PreviewResolution {
            content: Some(draft.content),
            reason: None,
        })
    }
}
