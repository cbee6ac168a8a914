//! SQLite Repository Implementation
//!
//! The external user-record store. Only the user table lives here;
//! sessions and attempt counters have process lifetime and stay in
//! memory.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::SqlitePool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// SQLite-backed user repository
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the user table if it does not exist
    pub async fn init_schema(&self) -> AuthResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_name TEXT NOT NULL,
                user_name_canonical TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let created_at = Utc::now();

        let row = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO users (
                user_name,
                user_name_canonical,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4)
            RETURNING user_id
            "#,
        )
        .bind(user.user_name.original())
        .bind(user.user_name.canonical())
        .bind(user.password_hash.as_phc_string())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(User {
            user_id: UserId::new(row.0),
            user_name: user.user_name.clone(),
            password_hash: user.password_hash.clone(),
            created_at,
        })
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                password_hash,
                created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                password_hash,
                created_at
            FROM users
            WHERE user_name_canonical = $1
            "#,
        )
        .bind(user_name.canonical())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn count(&self) -> AuthResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    user_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Corrupt password hash: {e}")))?;

        Ok(User {
            user_id: UserId::new(self.user_id),
            user_name: UserName::from_db(&self.user_name),
            password_hash,
            created_at: self.created_at,
        })
    }
}
