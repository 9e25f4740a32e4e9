//! Publishing, the archive/restore state machine and the public reader.
//!
//! Every step goes through single-row store operations. A publish that dies
//! between the snapshot append and the status flip leaves an extra snapshot
//! behind; publishing again completes it.

use std::sync::Arc;

use bson::{DateTime, oid::ObjectId};
use mariecard_config::{AppSettings, PublicationSettings};
use mariecard_db::models::{
    ContentDocument, Invitation, InvitationFilter, InvitationPatch, InvitationStatus, Lineage,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::auth::Actor;
use crate::clock::Clock;
use crate::content::{normalize, resolve_title, validate};
use crate::dao::base::DaoError;
use crate::error::{ServiceError, ServiceResult};
use crate::invitations::{InvitationMeta, authorize};
use crate::public_id::PublicIdService;
use crate::repo::InvitationRepo;
use crate::versions::VersionStore;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusAction {
    Expire,
    Restore,
}

impl StatusAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusAction::Expire => "expire",
            StatusAction::Restore => "restore",
        }
    }
}

/// `published -> archived` on expire, `archived -> published` on restore.
/// Nothing ever returns to `draft`.
pub fn next_status(
    current: InvitationStatus,
    action: StatusAction,
) -> ServiceResult<InvitationStatus> {
    match (current, action) {
        (InvitationStatus::Published, StatusAction::Expire) => Ok(InvitationStatus::Archived),
        (InvitationStatus::Archived, StatusAction::Restore) => Ok(InvitationStatus::Published),
        (from, action) => Err(ServiceError::InvalidTransition {
            action: action.as_str(),
            from: from.as_str(),
        }),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishOutcome {
    pub invitation_id: ObjectId,
    pub public_id: String,
    pub url: String,
    pub version: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicInvitation {
    pub public_id: String,
    pub title: String,
    pub published_at: Option<DateTime>,
    pub version: i64,
    pub content: ContentDocument,
}

pub struct PublicationService {
    invitations: Arc<dyn InvitationRepo>,
    versions: Arc<VersionStore>,
    public_ids: Arc<PublicIdService>,
    clock: Arc<dyn Clock>,
    app: AppSettings,
    publication: PublicationSettings,
}

impl PublicationService {
    pub fn new(
        invitations: Arc<dyn InvitationRepo>,
        versions: Arc<VersionStore>,
        public_ids: Arc<PublicIdService>,
        clock: Arc<dyn Clock>,
        app: AppSettings,
        publication: PublicationSettings,
    ) -> Self {
        Self {
            invitations,
            versions,
            public_ids,
            clock,
            app,
            publication,
        }
    }

    /// Snapshots the latest draft into the published lineage and marks the
    /// invitation published.
    pub async fn publish(&self, actor: Actor, id: ObjectId) -> ServiceResult<PublishOutcome> {
        let invitation = authorize(self.invitations.as_ref(), actor, id).await?;

        let draft = self
            .versions
            .get_latest(id, Lineage::Draft)
            .await?
            .ok_or(ServiceError::NoDraft)?;

        let raw = draft.content.to_json().map_err(DaoError::from)?;
        let content = normalize(&raw, &self.versions.blank());
        let errors = validate(&content);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let public_id = self
            .public_ids
            .ensure(id, Some(invitation.user_id), invitation.public_id.as_deref())
            .await?;
        let version = self.versions.append(id, &content, Lineage::Published).await?;
        self.mark_published(&invitation, None).await?;

        info!(invitation_id = %id, %public_id, version, draft_version = draft.version, "Published invitation");
        Ok(self.outcome(id, public_id, version))
    }

    /// One-shot path used by the editor's "publish" button on a brand new
    /// invitation: the submitted content becomes draft v1 and published v1.
    pub async fn create_and_publish(
        &self,
        actor: Actor,
        raw: &Value,
    ) -> ServiceResult<PublishOutcome> {
        let owner = actor.user_id().ok_or(ServiceError::Unauthorized)?;

        let content = normalize(raw, &self.versions.blank());
        let errors = validate(&content);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }
        let title = resolve_title(&content);

        let now = self.clock.now_bson();
        let mut invitation = Invitation {
            id: None,
            user_id: owner,
            title: title.clone(),
            public_id: None,
            status: InvitationStatus::Draft,
            published_at: None,
            created_at: now,
            updated_at: now,
        };
        let id = self.invitations.insert(&invitation).await?;
        invitation.id = Some(id);

        let public_id = self.public_ids.ensure(id, Some(owner), None).await?;
        self.versions.append(id, &content, Lineage::Draft).await?;
        let version = self.versions.append(id, &content, Lineage::Published).await?;
        self.mark_published(&invitation, Some(title)).await?;

        info!(invitation_id = %id, %public_id, "Created and published invitation");
        Ok(self.outcome(id, public_id, version))
    }

    pub async fn expire(&self, actor: Actor, id: ObjectId) -> ServiceResult<InvitationMeta> {
        self.transition(actor, id, StatusAction::Expire).await
    }

    pub async fn restore(&self, actor: Actor, id: ObjectId) -> ServiceResult<InvitationMeta> {
        self.transition(actor, id, StatusAction::Restore).await
    }

    /// The update is guarded by the status read here, so a concurrent flip
    /// surfaces as `Conflict` instead of being overwritten.
    pub async fn transition(
        &self,
        actor: Actor,
        id: ObjectId,
        action: StatusAction,
    ) -> ServiceResult<InvitationMeta> {
        let invitation = authorize(self.invitations.as_ref(), actor, id).await?;
        let next = next_status(invitation.status, action)?;

        let now = self.clock.now_bson();
        let patch = InvitationPatch {
            status: Some(next),
            published_at: Some(match next {
                InvitationStatus::Published => Some(now),
                _ => None,
            }),
            ..Default::default()
        };
        let filter = InvitationFilter::by_id(id)
            .owned_by(actor.user_id())
            .in_status(invitation.status);

        let updated = self
            .invitations
            .update(filter, patch, now)
            .await?
            .ok_or(ServiceError::Conflict)?;

        info!(
            invitation_id = %id,
            action = action.as_str(),
            from = invitation.status.as_str(),
            to = next.as_str(),
            "Changed invitation status"
        );
        Ok(InvitationMeta::from(&updated))
    }

    /// What anonymous readers see: the latest published snapshot of a
    /// published invitation. Archived and unknown ids look the same.
    pub async fn public_content(&self, public_id: &str) -> ServiceResult<PublicInvitation> {
        let invitation = self
            .invitations
            .find_published_by_public_id(public_id)
            .await?
            .ok_or(ServiceError::NotFound("Invitation"))?;
        let id = invitation.id.ok_or(ServiceError::NotFound("Invitation"))?;

        let snapshot = self
            .versions
            .get_latest(id, Lineage::Published)
            .await?
            .ok_or(ServiceError::NotFound("Published content"))?;

        Ok(PublicInvitation {
            public_id: public_id.to_string(),
            title: invitation.title,
            published_at: invitation.published_at,
            version: snapshot.version,
            content: snapshot.content,
        })
    }

    async fn mark_published(
        &self,
        invitation: &Invitation,
        title: Option<String>,
    ) -> ServiceResult<Invitation> {
        let id = invitation.id.ok_or(ServiceError::NotFound("Invitation"))?;
        let now = self.clock.now_bson();
        let patch = InvitationPatch {
            title,
            status: Some(InvitationStatus::Published),
            published_at: Some(Some(now)),
            ..Default::default()
        };
        let filter = InvitationFilter::by_id(id).owned_by(Some(invitation.user_id));

        self.invitations
            .update(filter, patch, now)
            .await?
            .ok_or(ServiceError::NotFound("Invitation"))
    }

    fn outcome(&self, invitation_id: ObjectId, public_id: String, version: i64) -> PublishOutcome {
        PublishOutcome {
            invitation_id,
            url: self.publication.invitation_url(&self.app, &public_id),
            public_id,
            version,
        }
    }
}
