use mariecard_config::{Settings, StorageBackend};
use mariecard_db::{connect, indexes::ensure_indexes};
use mariecard_services::{
    AdminGate, AuthService, Clock, DefaultTemplate, Repositories, Services, SharedSecretGate,
    SystemClock,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub auth: Arc<AuthService>,
    pub admin_gate: Arc<dyn AdminGate>,
    pub clock: Arc<dyn Clock>,
    pub services: Services,
}

impl AppState {
    pub fn new(repos: Repositories, clock: Arc<dyn Clock>, settings: Settings) -> Self {
        let auth = Arc::new(AuthService::new(settings.jwt.clone()));
        let admin_gate: Arc<dyn AdminGate> = Arc::new(SharedSecretGate::new(&settings.admin));
        let services = Services::new(repos, Arc::new(DefaultTemplate), clock.clone(), &settings);

        Self {
            settings,
            auth,
            admin_gate,
            clock,
            services,
        }
    }

    /// Opens the configured storage backend and wires the services over it.
    pub async fn from_settings(settings: Settings) -> Result<Self, mongodb::error::Error> {
        let repos = match settings.database.backend {
            StorageBackend::Mongo => {
                let db = connect(&settings).await?;
                ensure_indexes(&db).await?;
                Repositories::mongo(&db)
            }
            StorageBackend::Memory => {
                warn!("Using in-memory storage; data is lost on restart");
                Repositories::in_memory()
            }
        };
        info!(backend = ?settings.database.backend, "Storage ready");

        Ok(Self::new(repos, Arc::new(SystemClock), settings))
    }
}
