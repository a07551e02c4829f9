//! In-memory repository doubles.
//!
//! These back the service unit tests and the HTTP integration tests,
//! which run without a live PostgreSQL. Both repositories share one
//! [`InMemoryState`] so an accepted invite and the user it creates are
//! visible to each other, just as they would be in one database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use talentgate_core::error::AppError;
use talentgate_core::result::AppResult;
use talentgate_entity::{Invite, NewInvite, NewInvitedUser, NewOwner, Team, User, UserRole};

use crate::repositories::{InviteRepository, UserRepository};

/// Shared backing store for the in-memory repositories.
#[derive(Debug, Default)]
pub struct InMemoryState {
    users: Vec<User>,
    teams: Vec<Team>,
    invites: Vec<Invite>,
    invite_grants: HashMap<Uuid, Vec<Uuid>>,
    user_grants: HashMap<Uuid, Vec<Uuid>>,
}

/// Create a state shared between a user and an invite repository.
pub fn shared_state() -> Arc<Mutex<InMemoryState>> {
    Arc::new(Mutex::new(InMemoryState::default()))
}

fn lock(state: &Mutex<InMemoryState>) -> std::sync::MutexGuard<'_, InMemoryState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryUserRepository {
    pub fn new(state: Arc<Mutex<InMemoryState>>) -> Self {
        Self { state }
    }

    /// Number of stored users, for asserting nothing partial was kept.
    pub fn user_count(&self) -> usize {
        lock(&self.state).users.len()
    }

    /// Number of stored teams.
    pub fn team_count(&self) -> usize {
        lock(&self.state).teams.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = lock(&self.state);
        Ok(state
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_owner_with_team(&self, owner: &NewOwner) -> AppResult<User> {
        let mut state = lock(&self.state);
        if state
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&owner.email))
        {
            return Err(AppError::user_already_exists());
        }

        let now = Utc::now();
        let team = Team {
            id: Uuid::new_v4(),
            name: owner.team_name.clone(),
            created_at: now,
        };
        let user = User {
            id: Uuid::new_v4(),
            team_id: team.id,
            team_name: team.name.clone(),
            email: owner.email.clone(),
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            role: UserRole::Owner,
            password_hash: owner.password_hash.clone(),
            created_at: now,
            updated_at: now,
            locale: "en".to_string(),
        };

        state.teams.push(team);
        state.users.push(user.clone());
        Ok(user)
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryInviteRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryInviteRepository {
    pub fn new(state: Arc<Mutex<InMemoryState>>) -> Self {
        Self { state }
    }

    /// Number of stored invites.
    pub fn invite_count(&self) -> usize {
        lock(&self.state).invites.len()
    }

    /// Job grants held by a user, for asserting grant transfer.
    pub fn user_grants(&self, user_id: Uuid) -> Vec<Uuid> {
        lock(&self.state)
            .user_grants
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl InviteRepository for InMemoryInviteRepository {
    async fn create(&self, invite: &NewInvite, job_ids: &[Uuid]) -> AppResult<Invite> {
        let mut state = lock(&self.state);
        let created = Invite {
            id: Uuid::new_v4(),
            team_id: invite.team_id,
            email: invite.email.clone(),
            role: invite.role,
            token: invite.token.clone(),
            expires_at: invite.expires_at,
            created_at: Utc::now(),
        };
        if !job_ids.is_empty() {
            state.invite_grants.insert(created.id, job_ids.to_vec());
        }
        state.invites.push(created.clone());
        Ok(created)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Invite>> {
        let state = lock(&self.state);
        Ok(state.invites.iter().find(|i| i.token == token).cloned())
    }

    async fn accept_and_create_user(
        &self,
        invite_id: Uuid,
        user: &NewInvitedUser,
    ) -> AppResult<User> {
        let mut state = lock(&self.state);

        let position = state
            .invites
            .iter()
            .position(|i| i.id == invite_id)
            .ok_or_else(AppError::invite_not_found)?;
        if state
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AppError::user_already_exists());
        }

        let team_name = state
            .teams
            .iter()
            .find(|t| t.id == user.team_id)
            .map(|t| t.name.clone())
            .unwrap_or_default();

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            team_id: user.team_id,
            team_name,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            password_hash: user.password_hash.clone(),
            created_at: now,
            updated_at: now,
            locale: "en".to_string(),
        };

        state.invites.remove(position);
        if let Some(grants) = state.invite_grants.remove(&invite_id) {
            state.user_grants.insert(created.id, grants);
        }
        state.users.push(created.clone());
        Ok(created)
    }
}
