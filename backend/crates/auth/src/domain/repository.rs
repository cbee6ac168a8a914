//! Store Traits
//!
//! Interfaces for data persistence and shared mutable state.
//! Implementations live in the infrastructure layer.
//!
//! Time-dependent operations take `now` explicitly: all state
//! transitions are request-triggered, so the caller stamps the time
//! and the stores stay deterministic under test.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entity::attempt::Admission;
use crate::domain::entity::session::Session;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// User record store (external collaborator)
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, returning the stored record with its ID
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by user name (canonical form)
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Count stored users
    async fn count(&self) -> AuthResult<i64>;
}

/// Session store
///
/// Insert/remove for a given session id must be atomic per-session.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Store a session
    async fn insert(&self, session: &Session) -> AuthResult<()>;

    /// Look up a session by ID
    async fn get(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Remove a session; removing an absent session is not an error
    async fn remove(&self, session_id: Uuid) -> AuthResult<()>;
}

/// Login attempt store
///
/// Keyed by the raw submitted username string. The read-check-write on
/// one key is a critical section; different keys are independent.
#[trait_variant::make(AttemptStore: Send)]
pub trait LocalAttemptStore {
    /// Decide whether a login attempt for this username may proceed
    async fn check_admission(&self, username: &str, now: DateTime<Utc>) -> AuthResult<Admission>;

    /// Record a failed attempt
    async fn record_failure(&self, username: &str, now: DateTime<Utc>) -> AuthResult<()>;

    /// Reset the record after a successful login
    async fn record_success(&self, username: &str) -> AuthResult<()>;
}
