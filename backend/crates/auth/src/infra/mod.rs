//! Infrastructure Layer
//!
//! Store implementations: SQLite for user records, process-local
//! in-memory maps for sessions and attempt counters.

pub mod memory;
pub mod sqlite;

pub use memory::{InMemoryAttemptStore, InMemorySessionStore};
pub use sqlite::SqliteUserRepository;
