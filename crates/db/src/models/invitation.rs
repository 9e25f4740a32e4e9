use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    #[serde(default)]
    pub title: String,
    pub public_id: Option<String>,
    #[serde(default)]
    pub status: InvitationStatus,
    pub published_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl InvitationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationStatus::Draft => "draft",
            InvitationStatus::Published => "published",
            InvitationStatus::Archived => "archived",
        }
    }
}

impl Invitation {
    pub const COLLECTION: &'static str = "invitations";

    pub fn has_public_id(&self) -> bool {
        self.public_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Field changes applied by a conditional invitation update.
///
/// `published_at: Some(None)` clears the timestamp.
#[derive(Debug, Clone, Default)]
pub struct InvitationPatch {
    pub title: Option<String>,
    pub public_id: Option<String>,
    pub status: Option<InvitationStatus>,
    pub published_at: Option<Option<DateTime>>,
}

impl InvitationPatch {
    pub fn apply(&self, invitation: &mut Invitation, now: DateTime) {
        if let Some(title) = &self.title {
            invitation.title = title.clone();
        }
        if let Some(public_id) = &self.public_id {
            invitation.public_id = Some(public_id.clone());
        }
        if let Some(status) = self.status {
            invitation.status = status;
        }
        if let Some(published_at) = self.published_at {
            invitation.published_at = published_at;
        }
        invitation.updated_at = now;
    }

    pub fn to_set_document(&self, now: DateTime) -> bson::Document {
        let mut set = bson::doc! { "updated_at": now };
        if let Some(title) = &self.title {
            set.insert("title", title.as_str());
        }
        if let Some(public_id) = &self.public_id {
            set.insert("public_id", public_id.as_str());
        }
        if let Some(status) = self.status {
            set.insert("status", status.as_str());
        }
        if let Some(published_at) = self.published_at {
            match published_at {
                Some(at) => set.insert("published_at", at),
                None => set.insert("published_at", bson::Bson::Null),
            };
        }
        set
    }
}

/// Row predicate for updates: the id always, the owner and the expected
/// status when given, and optionally "no public id assigned yet".
#[derive(Debug, Clone, Copy)]
pub struct InvitationFilter {
    pub id: ObjectId,
    pub user_id: Option<ObjectId>,
    pub status: Option<InvitationStatus>,
    pub without_public_id: bool,
}

impl InvitationFilter {
    pub fn by_id(id: ObjectId) -> Self {
        Self {
            id,
            user_id: None,
            status: None,
            without_public_id: false,
        }
    }

    pub fn owned_by(mut self, user_id: Option<ObjectId>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn in_status(mut self, status: InvitationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Only matches rows whose public id is still unassigned.
    pub fn without_public_id(mut self) -> Self {
        self.without_public_id = true;
        self
    }

    pub fn matches(&self, invitation: &Invitation) -> bool {
        invitation.id == Some(self.id)
            && self.user_id.is_none_or(|owner| invitation.user_id == owner)
            && self.status.is_none_or(|status| invitation.status == status)
            && !(self.without_public_id && invitation.has_public_id())
    }

    pub fn to_document(&self) -> bson::Document {
        let mut filter = bson::doc! { "_id": self.id };
        if let Some(owner) = self.user_id {
            filter.insert("user_id", owner);
        }
        if let Some(status) = self.status {
            filter.insert("status", status.as_str());
        }
        if self.without_public_id {
            // Matches a missing field too.
            filter.insert("public_id", bson::doc! { "$in": [bson::Bson::Null, ""] });
        }
        filter
    }
}
