//! In-memory Repository
//!
//! Same contract as the PostgreSQL repository, including the
//! username/email uniqueness rule. Test double only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn users(&self) -> AuthResult<MutexGuard<'_, HashMap<UserId, User>>> {
        self.users
            .lock()
            .map_err(|_| AuthError::Internal("user store lock poisoned".to_string()))
    }

    pub fn len(&self) -> usize {
        self.users().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users()?;

        let taken = users
            .values()
            .any(|u| u.user_name == user.user_name || u.email == user.email);
        if taken {
            return Err(AuthError::UserExists);
        }

        users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users()?.get(user_id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .users()?
            .values()
            .find(|u| &u.user_name == user_name)
            .cloned())
    }

    async fn update_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AuthResult<()> {
        let mut users = self.users()?;
        let user = users.get_mut(user_id).ok_or(AuthError::UserNotFound)?;
        user.password_hash = password_hash.clone();
        Ok(())
    }
}
