//! Session Entity
//!
//! Server-side record binding an opaque session id to an authenticated
//! user. Carried by the transport as an HMAC-signed cookie token; the
//! entity itself knows nothing about cookies.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Authenticated session
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4, unguessable)
    pub session_id: Uuid,
    /// The authenticated user
    pub user_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Whether the session outlives the browser session (always false;
    /// the cookie is issued without Max-Age)
    pub permanent: bool,
}

impl Session {
    /// Create a new session for a user.
    ///
    /// Called only after successful credential verification.
    pub fn new(user_id: UserId) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            permanent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new(UserId::new(1));
        assert_eq!(session.session_id.get_version_num(), 4);
        assert_eq!(session.user_id, UserId::new(1));
        assert!(!session.permanent);
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = Session::new(UserId::new(1));
        let b = Session::new(UserId::new(1));
        assert_ne!(a.session_id, b.session_id);
    }
}
