//! User Entity
//!
//! The externally stored user record: read-mostly from the core's
//! perspective, written only when seeding.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{user_id::UserId, user_name::UserName};

/// Persisted user record
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned ID
    pub user_id: UserId,
    /// Unique user name
    pub user_name: UserName,
    /// Argon2id password hash
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// User record pending insertion (no ID yet)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub password_hash: HashedPassword,
}

impl NewUser {
    pub fn new(user_name: UserName, password_hash: HashedPassword) -> Self {
        Self {
            user_name,
            password_hash,
        }
    }
}
