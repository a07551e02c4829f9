//! Invite repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use talentgate_core::error::{AppError, ErrorKind};
use talentgate_core::result::AppResult;
use talentgate_entity::{Invite, NewInvite, NewInvitedUser, User};

use super::InviteRepository;

/// PostgreSQL-backed invite repository.
#[derive(Debug, Clone)]
pub struct PgInviteRepository {
    pool: PgPool,
}

impl PgInviteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::user_already_exists();
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to insert user", e)
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    async fn create(&self, invite: &NewInvite, job_ids: &[Uuid]) -> AppResult<Invite> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let created = sqlx::query_as::<_, Invite>(
            r#"
            INSERT INTO invites (team_id, email, role, token, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(invite.team_id)
        .bind(&invite.email)
        .bind(invite.role)
        .bind(&invite.token)
        .bind(invite.expires_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert invite", e))?;

        for job_id in job_ids {
            sqlx::query("INSERT INTO invite_job_grants (invite_id, job_id) VALUES ($1, $2)")
                .bind(created.id)
                .bind(job_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to insert invite grant", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(created)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Invite>> {
        sqlx::query_as::<_, Invite>("SELECT * FROM invites WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find invite by token", e)
            })
    }

    async fn accept_and_create_user(
        &self,
        invite_id: Uuid,
        user: &NewInvitedUser,
    ) -> AppResult<User> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (team_id, email, first_name, last_name, role, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *, (SELECT name FROM teams WHERE id = team_id) AS team_name
            "#,
        )
        .bind(user.team_id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.role)
        .bind(&user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_user_insert_error)?;

        sqlx::query(
            r#"
            INSERT INTO user_job_grants (user_id, job_id)
            SELECT $1, job_id FROM invite_job_grants WHERE invite_id = $2
            "#,
        )
        .bind(created.id)
        .bind(invite_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to transfer job grants", e)
        })?;

        // Consuming zero rows means a concurrent accept won the race;
        // rolling back leaves no partial user behind.
        let deleted = sqlx::query("DELETE FROM invites WHERE id = $1")
            .bind(invite_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to consume invite", e)
            })?;
        if deleted.rows_affected() == 0 {
            return Err(AppError::invite_not_found());
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(created)
    }
}
