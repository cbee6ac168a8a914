//! Domain Layer
//!
//! Contains entities, value objects, and store traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{attempt::AttemptRecord, session::Session, user::User};
pub use repository::{AttemptStore, SessionStore, UserRepository};
