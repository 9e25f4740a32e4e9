//! Persistence contracts the core consumes.
//!
//! The MongoDB DAOs in [`crate::dao`] and [`memory::MemoryStore`] implement
//! these traits. Only single-row atomic operations are required: insert,
//! "first row ordered by version descending", and update by id guarded by
//! an ownership (and optionally status) predicate.

pub mod memory;

use std::sync::Arc;

use bson::{DateTime, oid::ObjectId};
use mariecard_db::models::{
    Invitation, InvitationContent, InvitationFilter, InvitationPatch, Lineage, PreviewToken,
};
use mongodb::Database;

use crate::dao::{
    base::DaoResult, content::ContentDao, invitation::InvitationDao,
    preview_token::PreviewTokenDao,
};

pub use memory::MemoryStore;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait InvitationRepo: Send + Sync {
    /// Insert a new invitation and return its generated id.
    async fn insert(&self, invitation: &Invitation) -> DaoResult<ObjectId>;

    async fn find_by_id(&self, id: ObjectId) -> DaoResult<Option<Invitation>>;

    /// Invitation `id` if and only if it belongs to `user_id`.
    async fn find_owned(&self, id: ObjectId, user_id: ObjectId) -> DaoResult<Option<Invitation>>;

    /// Any invitation already bearing `public_id`, whatever its status.
    async fn find_by_public_id(&self, public_id: &str) -> DaoResult<Option<Invitation>>;

    async fn find_published_by_public_id(&self, public_id: &str)
    -> DaoResult<Option<Invitation>>;

    /// Newest first. `None` lists every owner's invitations.
    async fn list(&self, user_id: Option<ObjectId>) -> DaoResult<Vec<Invitation>>;

    /// Apply `patch` to the row matching `filter`; `None` when no row matched.
    async fn update(
        &self,
        filter: InvitationFilter,
        patch: InvitationPatch,
        now: DateTime,
    ) -> DaoResult<Option<Invitation>>;

    async fn delete(&self, filter: InvitationFilter) -> DaoResult<bool>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContentRepo: Send + Sync {
    async fn insert(&self, row: &InvitationContent) -> DaoResult<ObjectId>;

    /// Row with the highest version in `lineage`.
    async fn latest(
        &self,
        invitation_id: ObjectId,
        lineage: Lineage,
    ) -> DaoResult<Option<InvitationContent>>;

    async fn delete_for_invitation(&self, invitation_id: ObjectId) -> DaoResult<u64>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PreviewTokenRepo: Send + Sync {
    async fn insert(&self, token: &PreviewToken) -> DaoResult<ObjectId>;

    async fn find_by_token(&self, token: &str) -> DaoResult<Option<PreviewToken>>;
}

#[derive(Clone)]
pub struct Repositories {
    pub invitations: Arc<dyn InvitationRepo>,
    pub contents: Arc<dyn ContentRepo>,
    pub preview_tokens: Arc<dyn PreviewTokenRepo>,
}

impl Repositories {
    pub fn mongo(db: &Database) -> Self {
        Self {
            invitations: Arc::new(InvitationDao::new(db)),
            contents: Arc::new(ContentDao::new(db)),
            preview_tokens: Arc::new(PreviewTokenDao::new(db)),
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            invitations: store.clone(),
            contents: store.clone(),
            preview_tokens: store,
        }
    }
}
