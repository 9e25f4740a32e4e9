use bson::{DateTime, doc, oid::ObjectId};
use mongodb::Database;
use mariecard_db::models::{Invitation, InvitationFilter, InvitationPatch, InvitationStatus};

use super::base::{BaseDao, DaoResult};
use crate::repo::InvitationRepo;

pub struct InvitationDao {
    pub base: BaseDao<Invitation>,
}

impl InvitationDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Invitation::COLLECTION),
        }
    }
}

#[async_trait::async_trait]
impl InvitationRepo for InvitationDao {
    async fn insert(&self, invitation: &Invitation) -> DaoResult<ObjectId> {
        self.base.insert_one(invitation).await
    }

    async fn find_by_id(&self, id: ObjectId) -> DaoResult<Option<Invitation>> {
        self.base.find_by_id(id).await
    }

    async fn find_owned(&self, id: ObjectId, user_id: ObjectId) -> DaoResult<Option<Invitation>> {
        self.base
            .find_one(doc! { "_id": id, "user_id": user_id })
            .await
    }

    async fn find_by_public_id(&self, public_id: &str) -> DaoResult<Option<Invitation>> {
        self.base.find_one(doc! { "public_id": public_id }).await
    }

    async fn find_published_by_public_id(
        &self,
        public_id: &str,
    ) -> DaoResult<Option<Invitation>> {
        self.base
            .find_one(doc! {
                "public_id": public_id,
                "status": InvitationStatus::Published.as_str(),
            })
            .await
    }

    async fn list(&self, user_id: Option<ObjectId>) -> DaoResult<Vec<Invitation>> {
        let filter = match user_id {
            Some(owner) => doc! { "user_id": owner },
            None => doc! {},
        };
        self.base
            .find_many(filter, Some(doc! { "created_at": -1 }))
            .await
    }

    async fn update(
        &self,
        filter: InvitationFilter,
        patch: InvitationPatch,
        now: DateTime,
    ) -> DaoResult<Option<Invitation>> {
        self.base
            .update_and_fetch(filter.to_document(), patch.to_set_document(now))
            .await
    }

    async fn delete(&self, filter: InvitationFilter) -> DaoResult<bool> {
        Ok(self.base.hard_delete(filter.to_document()).await? > 0)
    }
}
