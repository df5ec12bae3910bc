//! User Entity
//!
//! An account: login handle, credentials and profile.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, full_name::FullName, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// UUID v4, generated by the application
    pub user_id: UserId,
    /// Unique, exact-match login handle
    pub user_name: UserName,
    /// Argon2id hash, never serialized to clients
    pub password_hash: UserPassword,
    /// Unique, lower-cased
    pub email: Email,
    pub full_name: FullName,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        user_name: UserName,
        password_hash: UserPassword,
        email: Email,
        full_name: FullName,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            email,
            full_name,
            created_at: Utc::now(),
        }
    }
}
