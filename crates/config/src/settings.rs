use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub admin: AdminSettings,
    pub publication: PublicationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    /// Origin used to build preview links when no invitation base URL is set.
    pub base_url: String,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    Mongo,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub backend: StorageBackend,
    pub url: String,
    pub name: String,
    pub max_pool_size: Option<u32>,
    pub min_pool_size: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_ttl_secs: u64,
    pub issuer: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminSettings {
    /// Shared secret expected in the `x-admin-key` header. Unset or blank
    /// leaves the admin surface open.
    pub access_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PublicationSettings {
    pub preview_ttl_secs: u64,
    pub public_id_length: usize,
    pub public_id_attempts: u32,
    /// Origin for public invitation links; falls back to `app.base_url`.
    pub invitation_base_url: Option<String>,
}

impl PublicationSettings {
    pub fn invitation_url(&self, app: &AppSettings, public_id: &str) -> String {
        let base = self
            .invitation_base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(&app.base_url);
        format!("{}/invitation/{}", base.trim_end_matches('/'), public_id)
    }

    pub fn preview_url(&self, app: &AppSettings, token: &str) -> String {
        format!("{}/preview/{}", app.base_url.trim_end_matches('/'), token)
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("MARIECARD"),
            )
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 3000)?
            .set_default("app.base_url", "http://localhost:3000")?
            .set_default("app.cors_origins", Vec::<String>::new())?
            .set_default("database.backend", "mongo")?
            .set_default("database.url", "mongodb://localhost:27017")?
            .set_default("database.name", "mariecard")?
            .set_default("jwt.secret", "change-me-in-production")?
            .set_default("jwt.access_token_ttl_secs", 3600)?
            .set_default("jwt.issuer", "mariecard")?
            .set_default("admin.access_key", None::<String>)?
            .set_default("publication.preview_ttl_secs", 1800)?
            .set_default("publication.public_id_length", 8)?
            .set_default("publication.public_id_attempts", 10)?
            .set_default("publication.invitation_base_url", None::<String>)?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::load().expect("Failed to load default settings")
    }
}
