//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::{AttemptStore, SessionStore, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_session;

/// Create the auth API router (to be nested under `/api`)
pub fn auth_router<U, A, S>(state: AuthAppState<U, A, S>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/get_csrf_token", get(handlers::get_csrf_token::<U, A, S>))
        .route("/login", post(handlers::login::<U, A, S>))
        .route("/logout", post(handlers::logout::<U, A, S>))
        .route("/get_user", get(handlers::get_user::<U, A, S>))
        .route(
            "/check_logged_in",
            get(handlers::check_logged_in::<U, A, S>),
        )
        .with_state(state)
}

/// Create the session-guarded probe router (mounted at the root)
pub fn protected_router<U, A, S>(state: AuthAppState<U, A, S>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/protected", get(handlers::protected))
        .layer(middleware::from_fn_with_state(
            state,
            require_session::<U, A, S>,
        ))
}
