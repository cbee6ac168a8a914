//! Current User Use Case
//!
//! Resolves the session cookie to the stored user record.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionStore, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Current user use case
pub struct CurrentUserUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    user_repo: Arc<U>,
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> CurrentUserUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    pub fn new(user_repo: Arc<U>, sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            sessions,
            config,
        }
    }

    /// Resolve the session token to a user record.
    ///
    /// `SessionNotFound` covers every miss: no token, bad signature,
    /// unknown session, or a session whose user no longer exists.
    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<User> {
        let session_id = session_token
            .and_then(|token| session_token::verify(&self.config.session_secret, token))
            .ok_or(AuthError::SessionNotFound)?;

        let session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        self.user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::SessionNotFound)
    }
}
