//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use talentgate_entity::UserRole;

/// Body returned alongside the access token cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Seconds until the token expires.
    pub expires_in: u64,
}

/// Generic message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body returned to the inviter after creating an invitation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteCreatedResponse {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    /// The invite token to embed in the invitation link.
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Body returned by invite validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitePreviewResponse {
    pub email: String,
}

/// Body returned when a rate limit blocks a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitedResponse {
    pub message: String,
    /// Unix timestamp at which the window resets.
    pub reset: i64,
}

/// Health probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
