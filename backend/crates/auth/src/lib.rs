//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, store traits
//! - `application/` - Use cases and application services
//! - `infra/` - Store implementations (SQLite users, in-memory state)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Username + password sign-in with server-side sessions
//! - Per-username throttling of failed login attempts (5 failures,
//!   15-minute window)
//! - Stateless anti-forgery tokens required on state-changing requests
//! - Cookie-based session tokens (HMAC-signed, HttpOnly)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Unknown-username and wrong-password failures are indistinguishable
//!   to the caller
//! - Throttling is the only backoff mechanism; no credential check runs
//!   while a username is blocked

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::csrf::CsrfTokenService;
pub use error::{AuthError, AuthResult};
pub use infra::memory::{InMemoryAttemptStore, InMemorySessionStore};
pub use infra::sqlite::SqliteUserRepository;
pub use presentation::router::{auth_router, protected_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::attempt::{Admission, AttemptRecord};
    pub use crate::domain::entity::session::Session;
    pub use crate::domain::entity::user::{NewUser, User};
    pub use crate::domain::value_object::user_id::UserId;
    pub use crate::domain::value_object::user_name::UserName;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
