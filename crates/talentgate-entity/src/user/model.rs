//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user, always belonging to exactly one team.
///
/// `team_name` is denormalized into every query result so the frontend
/// never needs a second round trip for display purposes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// The team this user belongs to.
    pub team_id: Uuid,
    /// Denormalized team name.
    pub team_name: String,
    /// Email address, unique across the system.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Role within the team.
    pub role: UserRole,
    /// Argon2id password hash. Never serialized outward.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// UI locale preference (empty when unset).
    pub locale: String,
}

/// Data required to register a new team owner.
///
/// The password arrives here already hashed; plaintext never crosses the
/// repository boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOwner {
    /// Owner email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Name of the team to create alongside the owner.
    pub team_name: String,
}
