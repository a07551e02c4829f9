//! Access token issuance.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use uuid::Uuid;

use talentgate_core::config::auth::AuthConfig;
use talentgate_core::error::{AppError, ErrorKind};
use talentgate_core::result::AppResult;

use super::claims::Claims;

/// Signs access tokens with an Ed25519 private key.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    issuer: String,
    ttl: Duration,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("issuer", &self.issuer)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    /// Build a signer from a PKCS#8 PEM-encoded Ed25519 private key.
    pub fn from_pem(issuer: impl Into<String>, ttl: Duration, pem: &[u8]) -> AppResult<Self> {
        let encoding_key = EncodingKey::from_ed_pem(pem).map_err(|e| {
            AppError::with_source(ErrorKind::Configuration, "Invalid token signing key", e)
        })?;
        Ok(Self {
            encoding_key,
            issuer: issuer.into(),
            ttl,
        })
    }

    /// Build a signer from configuration, reading the key from disk.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        let pem = std::fs::read(&config.private_key_path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to read signing key {}", config.private_key_path),
                e,
            )
        })?;
        Self::from_pem(
            config.issuer.clone(),
            Duration::seconds(config.token_ttl_seconds as i64),
            &pem,
        )
    }

    /// Issue a token whose subject is the given session id.
    pub fn issue(&self, session_id: Uuid) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            iss: self.issuer.clone(),
            sub: session_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::EdDSA), &claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to sign token", e))
    }

    /// Token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
