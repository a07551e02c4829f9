//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use talentgate_core::error::{AppError, ErrorKind};
use talentgate_core::result::AppResult;
use talentgate_entity::{NewOwner, User, UserRole};

use super::UserRepository;

/// PostgreSQL-backed user repository.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map an insert error, turning a unique violation on the email index
/// into the domain's duplicate-user error.
fn map_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::user_already_exists();
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to insert user", e)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.*, t.name AS team_name
            FROM users u
            JOIN teams t ON t.id = u.team_id
            WHERE LOWER(u.email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by email", e))
    }

    async fn create_owner_with_team(&self, owner: &NewOwner) -> AppResult<User> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let team_id: uuid::Uuid =
            sqlx::query_scalar("INSERT INTO teams (name) VALUES ($1) RETURNING id")
                .bind(&owner.team_name)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to insert team", e)
                })?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (team_id, email, first_name, last_name, role, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *, (SELECT name FROM teams WHERE id = team_id) AS team_name
            "#,
        )
        .bind(team_id)
        .bind(&owner.email)
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(UserRole::Owner)
        .bind(&owner.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_insert_error)?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(user)
    }
}
