//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGate, require_session};

/// Auth API routes, meant to be nested under `/api`
///
/// `/login`, `/register` and `/logout` are public; `/user` sits behind
/// the session gate.
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let gate = AuthGate::new(state.codec.clone(), state.config.clone());

    let protected = Router::new()
        .route("/user", get(handlers::current_user::<R>))
        .route_layer(from_fn_with_state(gate, require_session));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .merge(protected)
        .with_state(state)
}
