use bson::oid::ObjectId;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mariecard_config::{AdminSettings, JwtSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

impl Claims {
    pub fn user_id(&self) -> Result<ObjectId, AuthError> {
        ObjectId::parse_str(&self.sub)
            .map_err(|_| AuthError::InvalidToken("Invalid user ID in token".to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
}

/// Verifies the identity tokens issued by the sign-in collaborator.
pub struct AuthService {
    jwt_settings: JwtSettings,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(jwt_settings: JwtSettings) -> Self {
        let encoding_key = EncodingKey::from_secret(jwt_settings.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(jwt_settings.secret.as_bytes());
        Self {
            jwt_settings,
            encoding_key,
            decoding_key,
        }
    }

    pub fn generate_access_token(
        &self,
        user_id: ObjectId,
        email: &str,
    ) -> Result<AccessToken, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_hex(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.jwt_settings.access_token_ttl_secs as i64))
                .timestamp(),
            iss: self.jwt_settings.issuer.clone(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(AccessToken {
            access_token,
            expires_in: self.jwt_settings.access_token_ttl_secs,
        })
    }

    pub fn verify_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.jwt_settings.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            },
        )?;

        Ok(token_data.claims)
    }
}

/// Who is calling into the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// A signed-in user; may only touch invitations they own.
    User(ObjectId),
    /// Holder of the admin capability; bypasses the ownership predicate.
    Admin,
}

impl Actor {
    pub fn user_id(&self) -> Option<ObjectId> {
        match self {
            Actor::User(id) => Some(*id),
            Actor::Admin => None,
        }
    }
}

/// Capability check for the admin surface.
pub trait AdminGate: Send + Sync {
    fn is_authorized(&self, presented_key: Option<&str>) -> bool;
}

/// Compares the presented key with one shared secret. An unset or blank
/// secret leaves the gate open.
pub struct SharedSecretGate {
    secret: Option<String>,
}

impl SharedSecretGate {
    pub const HEADER: &'static str = "x-admin-key";

    pub fn new(settings: &AdminSettings) -> Self {
        Self {
            secret: settings
                .access_key
                .as_ref()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
        }
    }
}

impl AdminGate for SharedSecretGate {
    fn is_authorized(&self, presented_key: Option<&str>) -> bool {
        match &self.secret {
            None => true,
            Some(secret) => presented_key == Some(secret.as_str()),
        }
    }
}
