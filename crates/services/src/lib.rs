pub mod auth;
pub mod clock;
pub mod content;
pub mod dao;
pub mod error;
pub mod invitations;
pub mod preview;
pub mod public_id;
pub mod publication;
pub mod repo;
pub mod versions;

use std::sync::Arc;

use mariecard_config::Settings;

pub use auth::{Actor, AdminGate, AuthService, SharedSecretGate};
pub use clock::{Clock, ManualClock, SystemClock};
pub use content::{DefaultTemplate, TemplateProvider};
pub use error::{ServiceError, ServiceResult};
pub use invitations::InvitationService;
pub use preview::PreviewService;
pub use public_id::PublicIdService;
pub use publication::PublicationService;
pub use repo::Repositories;
pub use versions::VersionStore;

/// The core services wired over one set of repositories and one clock.
#[derive(Clone)]
pub struct Services {
    pub invitations: Arc<InvitationService>,
    pub versions: Arc<VersionStore>,
    pub public_ids: Arc<PublicIdService>,
    pub preview: Arc<PreviewService>,
    pub publication: Arc<PublicationService>,
}

impl Services {
    pub fn new(
        repos: Repositories,
        template: Arc<dyn TemplateProvider>,
        clock: Arc<dyn Clock>,
        settings: &Settings,
    ) -> Self {
        let versions = Arc::new(VersionStore::new(
            repos.contents.clone(),
            template,
            clock.clone(),
        ));
        let public_ids = Arc::new(PublicIdService::new(
            repos.invitations.clone(),
            clock.clone(),
            &settings.publication,
        ));
        let invitations = Arc::new(InvitationService::new(
            repos.invitations.clone(),
            repos.contents.clone(),
            versions.clone(),
            clock.clone(),
        ));
        let preview = Arc::new(PreviewService::new(
            repos.invitations.clone(),
            repos.preview_tokens.clone(),
            versions.clone(),
            clock.clone(),
            settings.app.clone(),
            settings.publication.clone(),
        ));
        let publication = Arc::new(PublicationService::new(
            repos.invitations,
            versions.clone(),
            public_ids.clone(),
            clock,
            settings.app.clone(),
            settings.publication.clone(),
        ));

        Self {
            invitations,
            versions,
            public_ids,
            preview,
            publication,
        }
    }
}
