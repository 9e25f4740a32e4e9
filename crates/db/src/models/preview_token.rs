use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewToken {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub token: String,
    pub invitation_id: ObjectId,
    pub user_id: ObjectId,
    pub expires_at: DateTime,
    pub created_at: DateTime,
}

impl PreviewToken {
    pub const COLLECTION: &'static str = "preview_tokens";

    pub fn is_expired_at(&self, now: DateTime) -> bool {
        now >= self.expires_at
    }
}
