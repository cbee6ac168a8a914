//! Logout Use Case
//!
//! Invalidates a user session. Clearing is idempotent: an absent or
//! already-cleared session is not an error.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { sessions, config }
    }

    /// Clear the session referenced by the cookie token.
    ///
    /// A token that fails signature verification simply has no session
    /// to clear.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let Some(session_id) = session_token::verify(&self.config.session_secret, session_token)
        else {
            return Ok(());
        };

        self.sessions.remove(session_id).await?;

        tracing::info!(session_id = %session_id, "User logged out");
        Ok(())
    }
}
