use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// One append-only content version. Draft and published snapshots share
/// the collection but keep independent version counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationContent {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub invitation_id: ObjectId,
    pub version: i64,
    pub is_published_snapshot: bool,
    /// Stored as written; legacy rows may not match the current document shape.
    pub content_json: serde_json::Value,
    pub created_at: DateTime,
}

impl InvitationContent {
    pub const COLLECTION: &'static str = "invitation_contents";

    pub fn lineage(&self) -> Lineage {
        Lineage::from_snapshot_flag(self.is_published_snapshot)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Lineage {
    Draft,
    Published,
}

impl Lineage {
    pub fn is_published_snapshot(&self) -> bool {
        matches!(self, Lineage::Published)
    }

    pub fn from_snapshot_flag(flag: bool) -> Self {
        if flag { Lineage::Published } else { Lineage::Draft }
    }
}
