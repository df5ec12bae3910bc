//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, session codec, configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, session gate
//!
//! ## Features
//! - Registration with username, password, email and full name
//! - Sign in by username + password
//! - Stateless sessions: HMAC-signed claims in an HttpOnly cookie
//! - A session gate that answers 401 to API calls and redirects pages
//!
//! ## Security Model
//! - Passwords hashed with Argon2id on a blocking thread
//! - Unknown users cost one dummy verification, same as a wrong password
//! - Session signatures checked in constant time; expiry enforced on decode

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_codec::{HmacSessionCodec, SessionClaims, SessionCodec};
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::router::auth_router;
pub use presentation::{AuthAppState, AuthGate, CurrentUser, require_session};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
