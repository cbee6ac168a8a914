//! API DTOs (Data Transfer Objects)
//!
//! JSON keys are snake_case to match the wire format the frontend
//! consumes (`csrf_token`, `logged_in`, `msg`).

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Anti-forgery token response
#[derive(Debug, Clone, Serialize)]
pub struct CsrfTokenResponse {
    pub csrf_token: String,
}

/// Generic message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// Current user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
}

/// Session check response
#[derive(Debug, Clone, Serialize)]
pub struct LoggedInResponse {
    pub logged_in: bool,
}
