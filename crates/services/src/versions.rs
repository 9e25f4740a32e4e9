use std::sync::Arc;

use bson::{DateTime, oid::ObjectId};
use mariecard_db::models::{ContentDocument, InvitationContent, Lineage};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::content::{TemplateProvider, is_legacy_empty_content, normalize};
use crate::dao::base::DaoError;
use crate::error::ServiceResult;
use crate::repo::ContentRepo;

/// One stored version, already normalized.
#[derive(Debug, Clone, Serialize)]
pub struct ContentVersion {
    pub version: i64,
    pub content: ContentDocument,
    pub created_at: DateTime,
}

/// Append-only history of an invitation's content, one sequence per lineage.
pub struct VersionStore {
    contents: Arc<dyn ContentRepo>,
    template: Arc<dyn TemplateProvider>,
    clock: Arc<dyn Clock>,
}

impl VersionStore {
    pub fn new(
        contents: Arc<dyn ContentRepo>,
        template: Arc<dyn TemplateProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            contents,
            template,
            clock,
        }
    }

    pub fn blank(&self) -> ContentDocument {
        self.template.blank()
    }

    pub async fn get_latest(
        &self,
        invitation_id: ObjectId,
        lineage: Lineage,
    ) -> ServiceResult<Option<ContentVersion>> {
        let row = self.contents.latest(invitation_id, lineage).await?;
        Ok(row.map(|row| self.to_version(&row)))
    }

    /// Stores `content` as the next version of `lineage` and returns its
    /// number. Concurrent appends are not serialized.
    pub async fn append(
        &self,
        invitation_id: ObjectId,
        content: &ContentDocument,
        lineage: Lineage,
    ) -> ServiceResult<i64> {
        let latest = self.contents.latest(invitation_id, lineage).await?;
        let version = latest.map_or(1, |row| row.version + 1);

        let row = InvitationContent {
            id: None,
            invitation_id,
            version,
            is_published_snapshot: lineage.is_published_snapshot(),
            content_json: content.to_json().map_err(DaoError::from)?,
            created_at: self.clock.now_bson(),
        };
        self.contents.insert(&row).await?;

        debug!(%invitation_id, version, ?lineage, "Appended content version");
        Ok(version)
    }

    /// Latest draft, creating version 1 from the template when there is
    /// none. A draft left behind by the old empty seed is superseded by a
    /// fresh template version.
    pub async fn load_or_seed_draft(&self, invitation_id: ObjectId) -> ServiceResult<ContentVersion> {
        let Some(row) = self.contents.latest(invitation_id, Lineage::Draft).await? else {
            let blank = self.template.blank();
            let version = self.append(invitation_id, &blank, Lineage::Draft).await?;
            info!(%invitation_id, version, "Seeded draft from template");
            return Ok(ContentVersion {
                version,
                content: blank,
                created_at: self.clock.now_bson(),
            });
        };

        if !is_legacy_empty_content(&row.content_json) {
            return Ok(self.to_version(&row));
        }

        let blank = self.template.blank();
        match self.append(invitation_id, &blank, Lineage::Draft).await {
            Ok(version) => {
                info!(%invitation_id, version, "Re-seeded legacy empty draft");
                Ok(ContentVersion {
                    version,
                    content: blank,
                    created_at: self.clock.now_bson(),
                })
            }
            Err(e) => {
                warn!(%invitation_id, error = %e, "Failed to re-seed legacy draft");
                Ok(self.to_version(&row))
            }
        }
    }

    fn to_version(&self, row: &InvitationContent) -> ContentVersion {
        ContentVersion {
            version: row.version,
            content: normalize(&row.content_json, &self.template.blank()),
            created_at: row.created_at,
        }
    }
}
