//! Sign In Use Case
//!
//! Authenticates a user and issues a signed session token.

use std::sync::Arc;

use kernel::error::app_error::AppResult;

use crate::application::config::AuthConfig;
use crate::application::run_blocking;
use crate::application::session_codec::{SessionClaims, SessionCodec};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub user: User,
    /// Cookie value
    pub session_token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<dyn SessionCodec>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: Arc<dyn SessionCodec>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            codec,
            config,
        }
    }

    /// Every failure is `InvalidCredentials` and costs one Argon2
    /// verification: callers cannot tell a malformed name, an unknown user
    /// and a wrong password apart.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let config = self.config.clone();

        let parsed = UserName::new(&input.user_name)
            .ok()
            .zip(RawPassword::new(input.password).ok());
        let Some((user_name, raw_password)) = parsed else {
            run_blocking(move || {
                RawPassword::spend_dummy_verification(config.hash_cost, config.pepper())
            })
            .await?;
            tracing::debug!("Sign in with malformed credentials");
            return Err(AuthError::InvalidCredentials);
        };

        let Some(user) = self.user_repo.find_by_user_name(&user_name).await? else {
            run_blocking(move || {
                raw_password.verify_against_dummy(config.hash_cost, config.pepper())
            })
            .await?;
            tracing::info!(user_name = %user_name, "Sign in for unknown user");
            return Err(AuthError::InvalidCredentials);
        };

        let password_hash = user.password_hash.clone();
        let (password_valid, rehashed) = run_blocking(move || {
            if !password_hash.verify(&raw_password, config.pepper()) {
                return (false, None);
            }
            let rehashed = password_hash
                .needs_rehash(config.hash_cost)
                .then(|| UserPassword::from_raw(&raw_password, config.hash_cost, config.pepper()));
            (true, rehashed)
        })
        .await?;

        if !password_valid {
            tracing::info!(user_id = %user.user_id, "Sign in with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        if let Some(rehashed) = rehashed {
            self.store_rehash(&user, rehashed).await;
        }

        let claims = SessionClaims::new(
            user.user_id,
            user.user_name.as_str(),
            self.config.session_ttl,
        );
        let session_token = self.codec.encode(&claims)?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed in"
        );

        Ok(SignInOutput {
            user,
            session_token,
        })
    }

    /// Best effort: a failed rehash never fails the sign in
    async fn store_rehash(&self, user: &User, rehashed: AppResult<UserPassword>) {
        let result = match rehashed {
            Ok(hash) => self.user_repo.update_password_hash(&user.user_id, &hash).await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(()) => tracing::info!(user_id = %user.user_id, "Password rehashed"),
            Err(e) => tracing::warn!(user_id = %user.user_id, error = %e, "Password rehash failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session_codec::HmacSessionCodec;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::infra::memory::InMemoryUserRepository;
    use platform::password::HashCost;

    struct Fixture {
        sign_in: SignInUseCase<InMemoryUserRepository>,
        codec: Arc<dyn SessionCodec>,
    }

    async fn fixture() -> Fixture {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig {
            hash_cost: HashCost::minimal(),
            ..AuthConfig::development()
        });
        let codec: Arc<dyn SessionCodec> =
            Arc::new(HmacSessionCodec::from_config(&config).unwrap());

        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                user_name: "alice".to_string(),
                password: "pw1".to_string(),
                email: "a@x.com".to_string(),
                full_name: "Alice".to_string(),
            })
            .await
            .unwrap();

        Fixture {
            sign_in: SignInUseCase::new(repo, codec.clone(), config),
            codec,
        }
    }

    fn input(user_name: &str, password: &str) -> SignInInput {
        SignInInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_issues_decodable_session() {
        let f = fixture().await;
        let output = f.sign_in.execute(input("alice", "pw1")).await.unwrap();

        let claims = f.codec.decode(&output.session_token).unwrap();
        assert_eq!(claims.user_id, output.user.user_id);
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let f = fixture().await;

        let wrong = f.sign_in.execute(input("alice", "nope")).await;
        let unknown = f.sign_in.execute(input("nobody", "pw1")).await;

        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_empty_credentials_rejected() {
        let f = fixture().await;
        assert!(matches!(
            f.sign_in.execute(input("", "pw1")).await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            f.sign_in.execute(input("alice", "")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_malformed_credentials_rejected() {
        let f = fixture().await;
        let too_long = "x".repeat(200);
        for (user_name, password) in [
            ("ali ce", "pw1"),
            ("   ", "pw1"),
            ("alice", "\u{7}bell"),
            ("alice", too_long.as_str()),
        ] {
            assert!(matches!(
                f.sign_in.execute(input(user_name, password)).await,
                Err(AuthError::InvalidCredentials)
            ));
        }
    }

    #[tokio::test]
    async fn test_outdated_hash_is_replaced_on_sign_in() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let old_config = Arc::new(AuthConfig {
            hash_cost: HashCost::minimal(),
            ..AuthConfig::development()
        });
        SignUpUseCase::new(repo.clone(), old_config.clone())
            .execute(SignUpInput {
                user_name: "alice".to_string(),
                password: "pw1".to_string(),
                email: "a@x.com".to_string(),
                full_name: "Alice".to_string(),
            })
            .await
            .unwrap();

        let new_cost = HashCost {
            memory_kib: 16,
            ..HashCost::minimal()
        };
        let new_config = Arc::new(AuthConfig {
            hash_cost: new_cost,
            ..(*old_config).clone()
        });
        let codec: Arc<dyn SessionCodec> =
            Arc::new(HmacSessionCodec::from_config(&new_config).unwrap());
        let sign_in = SignInUseCase::new(repo.clone(), codec, new_config);

        let alice = UserName::new("alice").unwrap();
        let before = repo.find_by_user_name(&alice).await.unwrap().unwrap();
        assert!(before.password_hash.needs_rehash(new_cost));

        sign_in.execute(input("alice", "pw1")).await.unwrap();

        let after = repo.find_by_user_name(&alice).await.unwrap().unwrap();
        assert!(!after.password_hash.needs_rehash(new_cost));
        assert_ne!(after.password_hash, before.password_hash);

        // Still signs in with the new hash
        sign_in.execute(input("alice", "pw1")).await.unwrap();
    }

    #[tokio::test]
    async fn test_current_hash_is_kept() {
        let f = fixture().await;
        let repo = f.sign_in.user_repo.clone();
        let alice = UserName::new("alice").unwrap();
        let before = repo.find_by_user_name(&alice).await.unwrap().unwrap();

        f.sign_in.execute(input("alice", "pw1")).await.unwrap();

        let after = repo.find_by_user_name(&alice).await.unwrap().unwrap();
        assert_eq!(after.password_hash, before.password_hash);
    }

    #[tokio::test]
    async fn test_user_name_match_is_exact() {
        let f = fixture().await;
        assert!(matches!(
            f.sign_in.execute(input("Alice", "pw1")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
