//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// All variants are recovered at the request boundary and surfaced as
/// structured responses; none are fatal to the process.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No anti-forgery token was presented on a state-changing request
    #[error("CSRF token is missing")]
    CsrfMissing,

    /// An anti-forgery token was presented but does not match
    #[error("CSRF token is invalid")]
    CsrfInvalid,

    /// Too many failed login attempts for this username
    #[error("Too many attempts, please try again later")]
    RateLimited {
        /// Seconds until the lockout window elapses
        retry_after_secs: u64,
    },

    /// Invalid credentials (unknown username or wrong password;
    /// deliberately not distinguishable)
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No session, or the session's user no longer exists
    #[error("Session not found")]
    SessionNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::CsrfMissing | AuthError::CsrfInvalid => StatusCode::BAD_REQUEST,
            AuthError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::SessionNotFound => StatusCode::NOT_FOUND,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::CsrfMissing | AuthError::CsrfInvalid => ErrorKind::BadRequest,
            AuthError::RateLimited { .. } => ErrorKind::TooManyRequests,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::SessionNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::RateLimited { retry_after_secs } => {
                tracing::warn!(retry_after_secs, "Login attempt while throttled");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        let retry_after = match &self {
            AuthError::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        };

        let mut response = self.to_app_error().into_response();

        if let Some(secs) = retry_after {
            if let Ok(value) = secs.to_string().parse() {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::CsrfMissing.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::CsrfInvalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::RateLimited {
                retry_after_secs: 60
            }
            .status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::SessionNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_csrf_messages_are_distinct() {
        assert_ne!(
            AuthError::CsrfMissing.to_string(),
            AuthError::CsrfInvalid.to_string()
        );
    }

    #[test]
    fn test_rate_limited_response_has_retry_after() {
        let response = AuthError::RateLimited {
            retry_after_secs: 120,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            "120"
        );
    }
}
