//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::run_blocking;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    full_name::FullName,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let fields = [
            &input.user_name,
            &input.password,
            &input.email,
            &input.full_name,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(AuthError::MissingFields);
        }

        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;
        let full_name = FullName::new(&input.full_name)?;
        let raw_password = RawPassword::new(input.password)?;

        let config = self.config.clone();
        let password_hash = run_blocking(move || {
            UserPassword::from_raw(&raw_password, config.hash_cost, config.pepper())
        })
        .await??;

        let user = User::new(user_name, password_hash, email, full_name);

        // Uniqueness is enforced by the store, not by a prior lookup
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user.user_id,
        })
    }
}
