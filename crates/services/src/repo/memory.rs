use bson::{DateTime, oid::ObjectId};
use dashmap::DashMap;
use mariecard_db::models::{
    Invitation, InvitationContent, InvitationFilter, InvitationPatch, InvitationStatus, Lineage,
    PreviewToken,
};
use parking_lot::RwLock;

use super::{ContentRepo, InvitationRepo, PreviewTokenRepo};
use crate::dao::base::{DaoError, DaoResult};

/// Process-local store with the same row semantics as the MongoDB DAOs.
/// Rows are kept in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    invitations: RwLock<Vec<Invitation>>,
    contents: RwLock<Vec<InvitationContent>>,
    preview_tokens: DashMap<String, PreviewToken>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_rows(&self, invitation_id: ObjectId) -> Vec<InvitationContent> {
        self.contents
            .read()
            .iter()
            .filter(|row| row.invitation_id == invitation_id)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl InvitationRepo for MemoryStore {
    async fn insert(&self, invitation: &Invitation) -> DaoResult<ObjectId> {
        let id = invitation.id.unwrap_or_else(ObjectId::new);
        let mut rows = self.invitations.write();
        if rows.iter().any(|row| row.id == Some(id)) {
            return Err(DaoError::DuplicateKey(format!("invitation {id}")));
        }
        let mut row = invitation.clone();
        row.id = Some(id);
        rows.push(row);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> DaoResult<Option<Invitation>> {
        Ok(self
            .invitations
            .read()
            .iter()
            .find(|row| row.id == Some(id))
            .cloned())
    }

    async fn find_owned(&self, id: ObjectId, user_id: ObjectId) -> DaoResult<Option<Invitation>> {
        Ok(self
            .invitations
            .read()
            .iter()
            .find(|row| row.id == Some(id) && row.user_id == user_id)
            .cloned())
    }

    async fn find_by_public_id(&self, public_id: &str) -> DaoResult<Option<Invitation>> {
        Ok(self
            .invitations
            .read()
            .iter()
            .find(|row| row.public_id.as_deref() == Some(public_id))
            .cloned())
    }

    async fn find_published_by_public_id(
        &self,
        public_id: &str,
    ) -> DaoResult<Option<Invitation>> {
        Ok(self
            .invitations
            .read()
            .iter()
            .find(|row| {
                row.public_id.as_deref() == Some(public_id)
                    && row.status == InvitationStatus::Published
            })
            .cloned())
    }

    async fn list(&self, user_id: Option<ObjectId>) -> DaoResult<Vec<Invitation>> {
        let mut rows: Vec<Invitation> = self
            .invitations
            .read()
            .iter()
            .filter(|row| user_id.is_none_or(|owner| row.user_id == owner))
            .cloned()
            .collect();
        // Stable sort keeps later inserts first among equal timestamps.
        rows.reverse();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn update(
        &self,
        filter: InvitationFilter,
        patch: InvitationPatch,
        now: DateTime,
    ) -> DaoResult<Option<Invitation>> {
        let mut rows = self.invitations.write();
        Ok(rows.iter_mut().find(|row| filter.matches(row)).map(|row| {
            patch.apply(row, now);
            row.clone()
        }))
    }

    async fn delete(&self, filter: InvitationFilter) -> DaoResult<bool> {
        let mut rows = self.invitations.write();
        let before = rows.len();
        rows.retain(|row| !filter.matches(row));
        Ok(rows.len() < before)
    }
}

#[async_trait::async_trait]
impl ContentRepo for MemoryStore {
    async fn insert(&self, row: &InvitationContent) -> DaoResult<ObjectId> {
        let id = ObjectId::new();
        let mut stored = row.clone();
        stored.id = Some(id);
        self.contents.write().push(stored);
        Ok(id)
    }

    async fn latest(
        &self,
        invitation_id: ObjectId,
        lineage: Lineage,
    ) -> DaoResult<Option<InvitationContent>> {
        // `max_by_key` keeps the last of equal versions, i.e. the latest insert.
        Ok(self
            .contents
            .read()
            .iter()
            .filter(|row| row.invitation_id == invitation_id && row.lineage() == lineage)
            .max_by_key(|row| row.version)
            .cloned())
    }

    async fn delete_for_invitation(&self, invitation_id: ObjectId) -> DaoResult<u64> {
        let mut rows = self.contents.write();
        let before = rows.len();
        rows.retain(|row| row.invitation_id != invitation_id);
        Ok((before - rows.len()) as u64)
    }
}

#[async_trait::async_trait]
impl PreviewTokenRepo for MemoryStore {
    async fn insert(&self, token: &PreviewToken) -> DaoResult<ObjectId> {
        let id = ObjectId::new();
        let mut stored = token.clone();
        stored.id = Some(id);
        match self.preview_tokens.entry(token.token.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(DaoError::DuplicateKey(format!("preview token {}", token.token)))
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(stored);
                Ok(id)
            }
        }
    }

    async fn find_by_token(&self, token: &str) -> DaoResult<Option<PreviewToken>> {
        Ok(self.preview_tokens.get(token).map(|row| row.clone()))
    }
}
