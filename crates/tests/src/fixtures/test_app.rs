use bson::oid::ObjectId;
use chrono::Duration;
use mariecard_api::{build_router, state::AppState};
use mariecard_config::{
    AdminSettings, AppSettings, DatabaseSettings, JwtSettings, PublicationSettings, Settings,
    StorageBackend,
};
use mariecard_services::{Clock, ManualClock, Repositories};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub const ADMIN_KEY: &str = "test-admin-key";

/// A running test application over the in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub base_url: String,
    pub settings: Settings,
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn a new test server on an ephemeral port. Every app gets its own
    /// store and its own clock.
    pub async fn spawn() -> Self {
        Self::spawn_with_settings(|_| {}).await
    }

    /// Spawn a test server with customized settings.
    ///
    /// The `mutator` closure receives a `&mut Settings` after defaults are applied.
    pub async fn spawn_with_settings(mutator: impl FnOnce(&mut Settings)) -> Self {
        let mut settings = test_settings();
        mutator(&mut settings);

        let clock = Arc::new(ManualClock::default());
        let app_state = AppState::new(
            Repositories::in_memory(),
            clock.clone() as Arc<dyn Clock>,
            settings.clone(),
        );
        let app = build_router(app_state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let base_url = format!("http://{}", addr);
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            addr,
            base_url,
            settings,
            state: app_state,
            clock,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Moves the server's clock forward.
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    /// A fresh user identity with a valid access token.
    pub fn user(&self) -> TestUser {
        let id = ObjectId::new();
        let token = self
            .state
            .auth
            .generate_access_token(id, &format!("{}@example.test", id.to_hex()))
            .expect("Failed to mint access token");
        TestUser {
            id,
            access_token: token.access_token,
        }
    }
}

pub struct TestUser {
    pub id: ObjectId,
    pub access_token: String,
}

fn test_settings() -> Settings {
    Settings {
        app: AppSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            base_url: "http://app.test".to_string(),
            cors_origins: vec![],
        },
        database: DatabaseSettings {
            backend: StorageBackend::Memory,
            url: "mongodb://localhost:27017".to_string(),
            name: "mariecard_test".to_string(),
            max_pool_size: Some(5),
            min_pool_size: Some(1),
        },
        jwt: JwtSettings {
            secret: "test-secret-key-for-jwt-signing-minimum-32-chars".to_string(),
            access_token_ttl_secs: 3600,
            issuer: "mariecard".to_string(),
        },
        admin: AdminSettings {
            access_key: Some(ADMIN_KEY.to_string()),
        },
        publication: PublicationSettings {
            preview_ttl_secs: 1800,
            public_id_length: 8,
            public_id_attempts: 10,
            invitation_base_url: Some("https://cards.test".to_string()),
        },
    }
}
