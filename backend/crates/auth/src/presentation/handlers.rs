//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::{AuthConfig, CSRF_HEADER_NAME};
use crate::application::csrf::{ANONYMOUS_CONTEXT, CsrfTokenService, CsrfValidation};
use crate::application::{
    CheckSessionUseCase, CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase,
};
use crate::domain::repository::{AttemptStore, SessionStore, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    CsrfTokenResponse, LoggedInResponse, LoginRequest, MessageResponse, UserResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<U, A, S>
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub attempts: Arc<A>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// Manual Clone: the stores themselves need not be Clone behind Arc
impl<U, A, S> Clone for AuthAppState<U, A, S>
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            attempts: self.attempts.clone(),
            sessions: self.sessions.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// CSRF Token Issuance
// ============================================================================

/// GET /api/get_csrf_token
pub async fn get_csrf_token<U, A, S>(
    State(state): State<AuthAppState<U, A, S>>,
    headers: HeaderMap,
) -> Json<CsrfTokenResponse>
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let service = CsrfTokenService::new(state.config.csrf_secret);
    let csrf_token = service.issue(&csrf_context(&state.config, &headers));

    Json(CsrfTokenResponse { csrf_token })
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<U, A, S>(
    State(state): State<AuthAppState<U, A, S>>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    // CSRF first: a forged request must not touch the attempt tracker
    require_csrf(&state.config, &headers)?;

    let use_case = LoginUseCase::new(
        state.users.clone(),
        state.attempts.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let input = LoginInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            msg: "Login successful".to_string(),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/logout
pub async fn logout<U, A, S>(
    State(state): State<AuthAppState<U, A, S>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    require_csrf(&state.config, &headers)?;

    if let Some(token) = session_cookie(&state.config, &headers) {
        let use_case = LogoutUseCase::new(state.sessions.clone(), state.config.clone());
        // Clearing is idempotent; a stale cookie still gets deleted below
        let _ = use_case.execute(&token).await;
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            msg: "Logout successful".to_string(),
        }),
    ))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/get_user
pub async fn get_user<U, A, S>(
    State(state): State<AuthAppState<U, A, S>>,
    headers: HeaderMap,
) -> AuthResult<Json<UserResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let token = session_cookie(&state.config, &headers);

    let use_case = CurrentUserUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let user = use_case.execute(token.as_deref()).await?;

    Ok(Json(UserResponse {
        username: user.user_name.original().to_string(),
    }))
}

// ============================================================================
// Session Check
// ============================================================================

/// GET /api/check_logged_in
pub async fn check_logged_in<U, A, S>(
    State(state): State<AuthAppState<U, A, S>>,
    headers: HeaderMap,
) -> AuthResult<Json<LoggedInResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let token = session_cookie(&state.config, &headers);

    let use_case = CheckSessionUseCase::new(state.sessions.clone(), state.config.clone());
    let logged_in = use_case.is_authenticated(token.as_deref()).await?;

    Ok(Json(LoggedInResponse { logged_in }))
}

// ============================================================================
// Protected Probe
// ============================================================================

/// GET /protected (behind [`crate::middleware::require_session`])
pub async fn protected() -> Json<MessageResponse> {
    Json(MessageResponse {
        msg: "You have access to this protected content".to_string(),
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Extract the raw session cookie value
pub(crate) fn session_cookie(config: &AuthConfig, headers: &HeaderMap) -> Option<String> {
    platform::cookie::extract_cookie(headers, &config.session_cookie_name)
}

/// The anti-forgery context for this request: the raw session cookie
/// value when present, else the anonymous context
fn csrf_context(config: &AuthConfig, headers: &HeaderMap) -> String {
    session_cookie(config, headers).unwrap_or_else(|| ANONYMOUS_CONTEXT.to_string())
}

/// Validate the anti-forgery header, distinguishing missing from
/// invalid
fn require_csrf(config: &AuthConfig, headers: &HeaderMap) -> Result<(), AuthError> {
    let presented = headers
        .get(CSRF_HEADER_NAME)
        .and_then(|value| value.to_str().ok());

    let service = CsrfTokenService::new(config.csrf_secret);
    match service.validate(&csrf_context(config, headers), presented) {
        CsrfValidation::Valid => Ok(()),
        CsrfValidation::Missing => Err(AuthError::CsrfMissing),
        CsrfValidation::Invalid => Err(AuthError::CsrfInvalid),
    }
}
