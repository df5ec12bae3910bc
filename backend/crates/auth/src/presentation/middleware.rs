//! Auth Middleware
//!
//! Gate for protected routes, and the extractor handlers use to read
//! the caller it resolved.

use axum::extract::{FromRequestParts, OriginalUri, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use http::{HeaderMap, header, request::Parts};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{CheckSessionUseCase, SessionClaims, SessionCodec};
use crate::error::AuthError;

/// Page unauthenticated browsers are sent to
pub const LOGIN_PATH: &str = "/login";

/// Middleware state
#[derive(Clone)]
pub struct AuthGate {
    pub codec: Arc<dyn SessionCodec>,
    pub config: Arc<AuthConfig>,
}

impl AuthGate {
    pub fn new(codec: Arc<dyn SessionCodec>, config: Arc<AuthConfig>) -> Self {
        Self { codec, config }
    }

    /// Claims of a valid session cookie, if the request carries one
    pub fn session(&self, headers: &HeaderMap) -> Option<SessionClaims> {
        let token = platform::cookie::extract_cookie(headers, &self.config.session_cookie_name);
        CheckSessionUseCase::new(self.codec.clone())
            .execute(token.as_deref())
            .ok()
    }
}

/// The authenticated caller, placed in request extensions by
/// [`require_session`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
}

impl From<SessionClaims> for CurrentUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AuthError::SessionInvalid)
    }
}

/// Middleware that requires a valid session
///
/// API callers get `401 {"error":"Unauthorized"}`; browsers get a
/// `303` to the login page.
pub async fn require_session(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(claims) = gate.session(req.headers()) else {
        return reject(&req);
    };

    req.extensions_mut().insert(CurrentUser::from(claims));
    next.run(req).await
}

fn reject(req: &Request) -> Response {
    if wants_json(req) {
        AuthError::SessionInvalid.into_response()
    } else {
        Redirect::to(LOGIN_PATH).into_response()
    }
}

/// `/api` paths (before any nesting strips the prefix) or JSON bodies
fn wants_json(req: &Request) -> bool {
    let path = req
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.0.path())
        .unwrap_or_else(|| req.uri().path());

    if path == "/api" || path.starts_with("/api/") {
        return true;
    }

    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
