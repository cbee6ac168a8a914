//! Auth Middleware
//!
//! Middleware for requiring a session on protected routes.

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::CheckSessionUseCase;
use crate::domain::repository::{AttemptStore, SessionStore, UserRepository};
use crate::presentation::dto::MessageResponse;
use crate::presentation::handlers::{AuthAppState, session_cookie};

/// Middleware that rejects requests without a valid session.
///
/// Only session existence is checked; the route handler decides what
/// else it needs.
pub async fn require_session<U, A, S>(
    State(state): State<AuthAppState<U, A, S>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    A: AttemptStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let token = session_cookie(&state.config, req.headers());

    let use_case = CheckSessionUseCase::new(state.sessions.clone(), state.config.clone());
    let authenticated = use_case
        .is_authenticated(token.as_deref())
        .await
        .unwrap_or(false);

    if !authenticated {
        return (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse {
                msg: "Unauthorized access".to_string(),
            }),
        )
            .into_response();
    }

    next.run(req).await
}
