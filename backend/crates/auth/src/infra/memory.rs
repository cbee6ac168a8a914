//! In-Memory Stores
//!
//! Process-local stores for state with process lifetime: sessions and
//! login attempt counters. Each store guards its map with a mutex so a
//! read-check-write on a single key is a critical section with respect
//! to concurrent requests for the same key; no lock is held across an
//! await point.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entity::attempt::{Admission, AttemptRecord};
use crate::domain::entity::session::Session;
use crate::domain::repository::{AttemptStore, SessionStore};
use crate::error::{AuthError, AuthResult};

fn lock_poisoned() -> AuthError {
    AuthError::Internal("store mutex poisoned".to_string())
}

// ============================================================================
// Session Store
// ============================================================================

/// In-memory session store
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: &Session) -> AuthResult<()> {
        let mut sessions = self.sessions.lock().map_err(|_| lock_poisoned())?;
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn get(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let sessions = self.sessions.lock().map_err(|_| lock_poisoned())?;
        Ok(sessions.get(&session_id).cloned())
    }

    async fn remove(&self, session_id: Uuid) -> AuthResult<()> {
        let mut sessions = self.sessions.lock().map_err(|_| lock_poisoned())?;
        sessions.remove(&session_id);
        Ok(())
    }
}

// ============================================================================
// Attempt Store
// ============================================================================

/// In-memory login attempt store
///
/// Records are created lazily on first failure and reset (not removed)
/// on success, mirroring their keyed-counter lifecycle.
#[derive(Default)]
pub struct InMemoryAttemptStore {
    records: Mutex<HashMap<String, AttemptRecord>>,
}

impl InMemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttemptStore for InMemoryAttemptStore {
    async fn check_admission(&self, username: &str, now: DateTime<Utc>) -> AuthResult<Admission> {
        let records = self.records.lock().map_err(|_| lock_poisoned())?;
        Ok(records
            .get(username)
            .map(|record| record.admission(now))
            .unwrap_or(Admission::Allowed))
    }

    async fn record_failure(&self, username: &str, now: DateTime<Utc>) -> AuthResult<()> {
        let mut records = self.records.lock().map_err(|_| lock_poisoned())?;
        records
            .entry(username.to_string())
            .or_default()
            .record_failure(now);
        Ok(())
    }

    async fn record_success(&self, username: &str) -> AuthResult<()> {
        let mut records = self.records.lock().map_err(|_| lock_poisoned())?;
        if let Some(record) = records.get_mut(username) {
            record.reset();
        }
        Ok(())
    }
}
