//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod current_user;
pub mod session_codec;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use session_codec::{HmacSessionCodec, SessionClaims, SessionCodec};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};

use crate::error::{AuthError, AuthResult};

/// Run CPU-heavy work (Argon2) off the async workers
pub(crate) async fn run_blocking<F, T>(f: F) -> AuthResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AuthError::Internal(format!("Blocking task failed: {e}")))
}
