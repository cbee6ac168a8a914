//! Check Session Use Case
//!
//! Answers "is this client authenticated" from the session store
//! alone. Whether the bound user still resolves is deliberately not
//! consulted here; that distinction belongs to the current-user query.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionStore,
{
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { sessions, config }
    }

    /// True iff the token verifies and its session exists
    pub async fn is_authenticated(&self, session_token: Option<&str>) -> AuthResult<bool> {
        let Some(token) = session_token else {
            return Ok(false);
        };

        let Some(session_id) = session_token::verify(&self.config.session_secret, token) else {
            return Ok(false);
        };

        Ok(self.sessions.get(session_id).await?.is_some())
    }
}
