//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod csrf;
pub mod current_user;
pub mod login;
pub mod logout;
pub mod session_token;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use csrf::{CsrfTokenService, CsrfValidation};
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
