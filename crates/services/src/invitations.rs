use std::sync::Arc;

use bson::{DateTime, oid::ObjectId};
use mariecard_db::models::{Invitation, InvitationFilter, InvitationStatus, Lineage};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::auth::Actor;
use crate::clock::Clock;
use crate::content::{normalize, validate};
use crate::error::{ServiceError, ServiceResult};
use crate::repo::{ContentRepo, InvitationRepo};
use crate::versions::{ContentVersion, VersionStore};

/// Loads invitation `id` on behalf of `actor`.
///
/// Users only reach their own invitations through a single owner-scoped
/// lookup; foreign and missing ids are both `Forbidden`. Admins reach every
/// row and get `NotFound` for a missing one.
pub async fn authorize(
    invitations: &dyn InvitationRepo,
    actor: Actor,
    id: ObjectId,
) -> ServiceResult<Invitation> {
    match actor {
        Actor::Admin => invitations
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("Invitation")),
        Actor::User(user_id) => invitations
            .find_owned(id, user_id)
            .await?
            .ok_or(ServiceError::Forbidden),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvitationMeta {
    pub id: ObjectId,
    pub public_id: Option<String>,
    pub status: InvitationStatus,
    pub published_at: Option<DateTime>,
}

impl From<&Invitation> for InvitationMeta {
    fn from(invitation: &Invitation) -> Self {
        Self {
            id: invitation.id.unwrap_or_default(),
            public_id: invitation.public_id.clone(),
            status: invitation.status,
            published_at: invitation.published_at,
        }
    }
}

/// Owner-facing management of invitations and their drafts.
pub struct InvitationService {
    invitations: Arc<dyn InvitationRepo>,
    contents: Arc<dyn ContentRepo>,
    versions: Arc<VersionStore>,
    clock: Arc<dyn Clock>,
}

impl InvitationService {
    pub fn new(
        invitations: Arc<dyn InvitationRepo>,
        contents: Arc<dyn ContentRepo>,
        versions: Arc<VersionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            invitations,
            contents,
            versions,
            clock,
        }
    }

    /// New draft invitation with no public id and no content yet.
    pub async fn create(&self, owner: ObjectId, title: Option<String>) -> ServiceResult<Invitation> {
        let now = self.clock.now_bson();
        let mut invitation = Invitation {
            id: None,
            user_id: owner,
            title: title.map(|t| t.trim().to_string()).unwrap_or_default(),
            public_id: None,
            status: InvitationStatus::Draft,
            published_at: None,
            created_at: now,
            updated_at: now,
        };
        let id = self.invitations.insert(&invitation).await?;
        invitation.id = Some(id);

        info!(invitation_id = %id, user_id = %owner, "Created invitation");
        Ok(invitation)
    }

    /// Newest first. Admins see every owner's invitations.
    pub async fn list(&self, actor: Actor) -> ServiceResult<Vec<Invitation>> {
        Ok(self.invitations.list(actor.user_id()).await?)
    }

    pub async fn get(&self, actor: Actor, id: ObjectId) -> ServiceResult<Invitation> {
        authorize(self.invitations.as_ref(), actor, id).await
    }

    pub async fn meta(&self, actor: Actor, id: ObjectId) -> ServiceResult<InvitationMeta> {
        let invitation = authorize(self.invitations.as_ref(), actor, id).await?;
        Ok(InvitationMeta::from(&invitation))
    }

    /// The editor's read. Seeds a draft on first access.
    pub async fn load_draft(&self, actor: Actor, id: ObjectId) -> ServiceResult<ContentVersion> {
        authorize(self.invitations.as_ref(), actor, id).await?;
        self.versions.load_or_seed_draft(id).await
    }

    /// Normalizes, validates and appends a new draft version. Nothing is
    /// written when validation fails.
    pub async fn save_draft(&self, actor: Actor, id: ObjectId, raw: &Value) -> ServiceResult<i64> {
        authorize(self.invitations.as_ref(), actor, id).await?;

        let content = normalize(raw, &self.versions.blank());
        let errors = validate(&content);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let version = self.versions.append(id, &content, Lineage::Draft).await?;
        info!(invitation_id = %id, version, "Saved draft");
        Ok(version)
    }

    /// Removes a never-published invitation together with its content rows.
    pub async fn delete(&self, actor: Actor, id: ObjectId) -> ServiceResult<()> {
        let invitation = authorize(self.invitations.as_ref(), actor, id).await?;
        if invitation.status != InvitationStatus::Draft {
            return Err(ServiceError::NotDeletable);
        }

        let removed = self.contents.delete_for_invitation(id).await?;
        let filter = InvitationFilter::by_id(id).owned_by(actor.user_id());
        if !self.invitations.delete(filter).await? {
            return Err(ServiceError::NotFound("Invitation"));
        }

        info!(invitation_id = %id, content_rows = removed, "Deleted invitation");
        Ok(())
    }
}
