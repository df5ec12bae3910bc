//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::extract::AppJson;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentUserUseCase, SessionCodec, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub codec: Arc<dyn SessionCodec>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: the repository itself need not be Clone.
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            codec: self.codec.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(SignUpInput {
            user_name: req.username,
            password: req.password,
            email: req.email,
            full_name: req.full_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registration successful")),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.codec.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .set_cookie_header(&output.session_token)
        .ok_or_else(|| AuthError::Internal("Session cookie is not a valid header".to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful",
            user: output.user.into(),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/logout
///
/// Sessions live only in the cookie, so clearing it is the whole job.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let cookie = state
        .config
        .session_cookie()
        .delete_cookie_header()
        .ok_or_else(|| AuthError::Internal("Session cookie is not a valid header".to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new("Logout successful")),
    ))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/user
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentUser,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = CurrentUserUseCase::new(state.repo.clone());
    let user = use_case.execute(&current.user_id).await?;

    Ok(Json(user.into()))
}
