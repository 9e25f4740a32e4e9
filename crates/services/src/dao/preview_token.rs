use bson::{doc, oid::ObjectId};
use mongodb::Database;
use mariecard_db::models::PreviewToken;

use super::base::{BaseDao, DaoResult};
use crate::repo::PreviewTokenRepo;

pub struct PreviewTokenDao {
    pub base: BaseDao<PreviewToken>,
}

impl PreviewTokenDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, PreviewToken::COLLECTION),
        }
    }
}

#[async_trait::async_trait]
impl PreviewTokenRepo for PreviewTokenDao {
    async fn insert(&self, token: &PreviewToken) -> DaoResult<ObjectId> {
        self.base.insert_one(token).await
    }

    async fn find_by_token(&self, token: &str) -> DaoResult<Option<PreviewToken>> {
        self.base.find_one(doc! { "token": token }).await
    }
}
