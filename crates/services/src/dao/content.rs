use bson::{doc, oid::ObjectId};
use mongodb::Database;
use mariecard_db::models::{InvitationContent, Lineage};

use super::base::{BaseDao, DaoResult};
use crate::repo::ContentRepo;

pub struct ContentDao {
    pub base: BaseDao<InvitationContent>,
}

impl ContentDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, InvitationContent::COLLECTION),
        }
    }
}

#[async_trait::async_trait]
impl ContentRepo for ContentDao {
    async fn insert(&self, row: &InvitationContent) -> DaoResult<ObjectId> {
        self.base.insert_one(row).await
    }

    async fn latest(
        &self,
        invitation_id: ObjectId,
        lineage: Lineage,
    ) -> DaoResult<Option<InvitationContent>> {
        // Equal versions (racing appends) resolve to the most recent insert.
        self.base
            .find_first(
                doc! {
                    "invitation_id": invitation_id,
                    "is_published_snapshot": lineage.is_published_snapshot(),
                },
                doc! { "version": -1, "_id": -1 },
            )
            .await
    }

    async fn delete_for_invitation(&self, invitation_id: ObjectId) -> DaoResult<u64> {
        self.base
            .hard_delete(doc! { "invitation_id": invitation_id })
            .await
    }
}
