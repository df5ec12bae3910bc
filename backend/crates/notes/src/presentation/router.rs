//! Notes Router

use auth::{AuthGate, require_session};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, put},
};

use crate::domain::repository::NoteRepository;
use crate::presentation::handlers::{self, NotesAppState};

/// Note API routes, meant to be nested under `/api`. All of them sit
/// behind the session gate.
pub fn notes_router<R>(state: NotesAppState<R>, gate: AuthGate) -> Router
where
    R: NoteRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/notes",
            get(handlers::list_notes::<R>).post(handlers::create_note::<R>),
        )
        .route(
            "/notes/{id}",
            put(handlers::update_note::<R>).delete(handlers::delete_note::<R>),
        )
        .route("/notes/{id}/toggle", patch(handlers::toggle_status::<R>))
        .route_layer(from_fn_with_state(gate, require_session))
        .with_state(state)
}
