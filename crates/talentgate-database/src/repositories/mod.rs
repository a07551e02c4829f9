//! Repository traits and their PostgreSQL implementations.

pub mod invite;
pub mod user;

use async_trait::async_trait;
use uuid::Uuid;

use talentgate_core::result::AppResult;
use talentgate_entity::{Invite, NewInvite, NewInvitedUser, NewOwner, User};

pub use invite::PgInviteRepository;
pub use user::PgUserRepository;

/// User and team persistence.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Find a user by email, case-insensitively.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a team and its owning user in one transaction.
    ///
    /// Fails with a user-already-exists error when the email is taken,
    /// leaving no team behind.
    async fn create_owner_with_team(&self, owner: &NewOwner) -> AppResult<User>;
}

/// Invitation persistence.
#[async_trait]
pub trait InviteRepository: Send + Sync + std::fmt::Debug {
    /// Store an invite together with its job grants.
    async fn create(&self, invite: &NewInvite, job_ids: &[Uuid]) -> AppResult<Invite>;

    /// Find an invite by its opaque token.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<Invite>>;

    /// Atomically create the invited user, move the invite's job grants
    /// to them, and consume the invite.
    ///
    /// Fails with invite-not-found when the invite was already consumed
    /// by a concurrent accept.
    async fn accept_and_create_user(
        &self,
        invite_id: Uuid,
        user: &NewInvitedUser,
    ) -> AppResult<User>;
}
