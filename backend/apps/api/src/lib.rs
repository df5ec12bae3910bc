//! Todo List server
//!
//! Router assembly lives here so the binary and the integration tests
//! build the exact same application.

pub mod config;
pub mod pages;

use std::path::PathBuf;
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::{AuthAppState, AuthConfig, AuthGate, HmacSessionCodec, SessionCodec, auth_router};
use axum::{
    Router,
    http::{self, Method, header},
};
use notes::{NoteRepository, NotesAppState, notes_router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Everything [`build_app`] needs besides the repositories
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub static_dir: PathBuf,
    pub cors_origins: Vec<String>,
}

/// Wire repositories, session codec and config into the full router
pub fn build_app<U, N>(users: U, notes: N, config: AppConfig) -> anyhow::Result<Router>
where
    U: UserRepository + Send + Sync + 'static,
    N: NoteRepository + Send + Sync + 'static,
{
    let auth_config = Arc::new(config.auth);
    let codec: Arc<dyn SessionCodec> = Arc::new(HmacSessionCodec::from_config(&auth_config)?);
    let gate = AuthGate::new(codec.clone(), auth_config.clone());

    let auth_state = AuthAppState {
        repo: Arc::new(users),
        codec,
        config: auth_config,
    };
    let notes_state = NotesAppState {
        repo: Arc::new(notes),
    };

    let api = Router::new()
        .merge(auth_router(auth_state))
        .merge(notes_router(notes_state, gate.clone()));

    Ok(Router::new()
        .nest("/api", api)
        .merge(pages::router(gate))
        .nest_service("/static", ServeDir::new(config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins)))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
