//! Login Use Case
//!
//! Authenticates a user and creates a session.
//!
//! Order matters: the throttle admission check runs before the user
//! lookup, the credential verifier is never called for a blocked
//! username, and the tracker records a failure for unknown usernames
//! exactly as for wrong passwords so the two are indistinguishable.

use std::sync::Arc;

use chrono::Utc;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::attempt::Admission;
use crate::domain::entity::session::Session;
use crate::domain::repository::{AttemptStore, SessionStore, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    /// Submitted user name (raw; also the throttle key)
    pub username: String,
    /// Submitted password
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed session token for the cookie
    pub session_token: String,
}

/// Login use case
pub struct LoginUseCase<U, A, S>
where
    U: UserRepository,
    A: AttemptStore,
    S: SessionStore,
{
    user_repo: Arc<U>,
    attempts: Arc<A>,
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, A, S> LoginUseCase<U, A, S>
where
    U: UserRepository,
    A: AttemptStore,
    S: SessionStore,
{
    pub fn new(
        user_repo: Arc<U>,
        attempts: Arc<A>,
        sessions: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            attempts,
            sessions,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let now = Utc::now();

        // Admission check before anything else touches the credentials
        match self.attempts.check_admission(&input.username, now).await? {
            Admission::Blocked { retry_after_secs } => {
                return Err(AuthError::RateLimited { retry_after_secs });
            }
            Admission::Allowed => {}
        }

        // An unparseable user name cannot match a stored record; treat
        // it like an unknown user so nothing leaks.
        let user = match UserName::new(&input.username) {
            Ok(user_name) => self.user_repo.find_by_user_name(&user_name).await?,
            Err(_) => None,
        };

        let password = ClearTextPassword::new(input.password);

        let user = match user {
            Some(user) if user.password_hash.verify(&password) => user,
            // Unknown user and wrong password take the same path
            _ => {
                self.attempts.record_failure(&input.username, now).await?;
                return Err(AuthError::InvalidCredentials);
            }
        };

        self.attempts.record_success(&input.username).await?;

        // Fresh session per login; permanent is always false
        let session = Session::new(user.user_id);
        self.sessions.insert(&session).await?;

        let session_token = session_token::sign(&self.config.session_secret, session.session_id);

        tracing::info!(
            username = %user.user_name,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput { session_token })
    }
}
