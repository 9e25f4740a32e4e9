use std::sync::Arc;

use bson::oid::ObjectId;
use mariecard_config::PublicationSettings;
use mariecard_db::models::{InvitationFilter, InvitationPatch};
use rand::Rng;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::error::{ServiceError, ServiceResult};
use crate::repo::InvitationRepo;

/// Random decimal string of `length` digits that never starts with `0`.
pub fn generate_candidate(length: usize) -> String {
    let mut rng = rand::rng();
    let digits: String = (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();
    fix_leading_zero(digits)
}

fn fix_leading_zero(digits: String) -> String {
    match digits.strip_prefix('0') {
        Some(rest) => format!("1{rest}"),
        None => digits,
    }
}

/// Reserves the short numeric id under which an invitation is shared.
pub struct PublicIdService {
    invitations: Arc<dyn InvitationRepo>,
    clock: Arc<dyn Clock>,
    length: usize,
    attempts: u32,
}

impl PublicIdService {
    pub fn new(
        invitations: Arc<dyn InvitationRepo>,
        clock: Arc<dyn Clock>,
        settings: &PublicationSettings,
    ) -> Self {
        Self {
            invitations,
            clock,
            length: settings.public_id_length,
            attempts: settings.public_id_attempts,
        }
    }

    /// Returns `current` untouched when the invitation already has an id;
    /// otherwise draws candidates until one is unused and stores it.
    ///
    /// The write only lands on a row without a public id, so a caller with a
    /// stale `current` gets the id another caller stored first.
    /// `owner` scopes the write; `None` writes on behalf of an admin.
    pub async fn ensure(
        &self,
        invitation_id: ObjectId,
        owner: Option<ObjectId>,
        current: Option<&str>,
    ) -> ServiceResult<String> {
        if let Some(existing) = current.filter(|id| !id.is_empty()) {
            return Ok(existing.to_string());
        }

        for _ in 0..self.attempts {
            let candidate = generate_candidate(self.length);
            if self
                .invitations
                .find_by_public_id(&candidate)
                .await?
                .is_some()
            {
                continue;
            }

            let patch = InvitationPatch {
                public_id: Some(candidate.clone()),
                ..Default::default()
            };
            let filter = InvitationFilter::by_id(invitation_id)
                .owned_by(owner)
                .without_public_id();
            if self
                .invitations
                .update(filter, patch, self.clock.now_bson())
                .await?
                .is_some()
            {
                info!(%invitation_id, public_id = %candidate, "Assigned public id");
                return Ok(candidate);
            }
            return self.assigned(invitation_id, owner).await;
        }

        warn!(%invitation_id, attempts = self.attempts, "Public id generation exhausted");
        Err(ServiceError::PublicIdExhausted {
            attempts: self.attempts,
        })
    }

    /// The id stored by whoever won the assignment.
    async fn assigned(
        &self,
        invitation_id: ObjectId,
        owner: Option<ObjectId>,
    ) -> ServiceResult<String> {
        let invitation = self
            .invitations
            .find_by_id(invitation_id)
            .await?
            .filter(|invitation| owner.is_none_or(|owner| invitation.user_id == owner))
            .ok_or(ServiceError::NotFound("Invitation"))?;

        if !invitation.has_public_id() {
            return Err(ServiceError::Conflict);
        }
        let public_id = invitation.public_id.unwrap_or_default();
        info!(%invitation_id, %public_id, "Public id already assigned");
        Ok(public_id)
    }
}
