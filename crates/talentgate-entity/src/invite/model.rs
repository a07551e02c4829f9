//! Invitation entity model and use-case parameter types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::UserRole;

/// A pending team invitation.
///
/// The row is created when a team member invites someone and deleted
/// (together with transferring its job grants) when the invitation is
/// accepted. Expired rows persist but are treated as invalid at read
/// time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invite {
    /// Unique invite identifier.
    pub id: Uuid,
    /// The team issuing the invitation.
    pub team_id: Uuid,
    /// Invitee email address.
    pub email: String,
    /// Role the invitee will receive on acceptance.
    pub role: UserRole,
    /// Opaque single-use token, unguessable and unique.
    pub token: String,
    /// Moment after which the invitation is no longer acceptable.
    pub expires_at: DateTime<Utc>,
    /// When the invitation was created.
    pub created_at: DateTime<Utc>,
}

impl Invite {
    /// Whether the invitation has passed its expiry at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Input for creating an invitation (use-case level).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvite {
    /// Invitee email address.
    pub email: String,
    /// Role to grant on acceptance.
    pub role: UserRole,
    /// Job postings the invitee should gain access to.
    pub job_ids: Option<Vec<Uuid>>,
}

/// Row data for persisting a new invitation (repository level).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvite {
    /// Issuing team.
    pub team_id: Uuid,
    /// Invitee email address.
    pub email: String,
    /// Role to grant on acceptance.
    pub role: UserRole,
    /// Opaque single-use token.
    pub token: String,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
}

/// Input for accepting an invitation (use-case level).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptInvite {
    /// The invite token from the invitation link.
    pub token: String,
    /// Chosen password (plaintext; hashed inside the use case).
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Row data for the user created by invite acceptance (repository level).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvitedUser {
    /// Team inherited from the invite.
    pub team_id: Uuid,
    /// Email inherited from the invite.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Role inherited from the invite.
    pub role: UserRole,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// The public-facing payload returned by invite validation.
///
/// Only the invitee's email is disclosed pre-acceptance; team and role
/// stay hidden until the invite is actually accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitePreview {
    /// Invitee email, used to pre-fill the registration form.
    pub email: String,
}
