//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use auth::models::{NewUser, UserName};
use auth::{
    AuthConfig, InMemoryAttemptStore, InMemorySessionStore, SqliteUserRepository,
    auth_router, protected_router,
};
use axum::{
    Router, http,
    http::{Method, header},
};
use platform::password::ClearTextPassword;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth::domain::repository::UserRepository;
use auth::presentation::handlers::AuthAppState;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://users.db".to_string());

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to database");

    let users = SqliteUserRepository::new(pool);
    users.init_schema().await?;

    tracing::info!("Schema initialized");

    // Seed a default user when the store is empty
    create_default_user(&users).await?;

    // Auth configuration
    let config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secrets from environment
        AuthConfig {
            session_secret: load_secret("SESSION_SECRET")?,
            csrf_secret: load_secret("CSRF_SECRET")?,
            ..AuthConfig::default()
        }
    };

    let state = AuthAppState {
        users: Arc::new(users),
        attempts: Arc::new(InMemoryAttemptStore::new()),
        sessions: Arc::new(InMemorySessionStore::new()),
        config: Arc::new(config),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            http::HeaderName::from_static("x-csrf-token"),
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api", auth_router(state.clone()))
        .merge(protected_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create a default user when the database is empty
async fn create_default_user(users: &SqliteUserRepository) -> anyhow::Result<()> {
    if users.count().await? > 0 {
        return Ok(());
    }

    let user_name = UserName::new("test").map_err(|e| anyhow::anyhow!(e))?;
    let password_hash = ClearTextPassword::new("test".to_string())
        .hash()
        .map_err(|e| anyhow::anyhow!(e))?;

    let user = users.create(&NewUser::new(user_name, password_hash)).await?;

    tracing::info!(username = %user.user_name, "Default user created");
    Ok(())
}

/// Load a 32-byte base64-encoded secret from the environment
fn load_secret(name: &str) -> anyhow::Result<[u8; 32]> {
    let encoded =
        env::var(name).map_err(|_| anyhow::anyhow!("{name} must be set in production"))?;
    let bytes = platform::crypto::from_base64(&encoded)?;

    anyhow::ensure!(bytes.len() == 32, "{name} must decode to 32 bytes");

    let mut secret = [0u8; 32];
    secret.copy_from_slice(&bytes);
    Ok(secret)
}
