//! User Password Value Object
//!
//! Domain wrapper around `platform::password`.
//!
//! ## Security Features
//! - Argon2id hashing (memory-hard, tunable via `HashCost`)
//! - Automatic memory zeroization
//! - Constant-time comparison
//! - Unicode NFKC normalization
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//! use platform::password::HashCost;
//!
//! let raw = RawPassword::new("pw1".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, HashCost::minimal(), None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    self, ClearTextPassword, HashCost, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate and normalize
    ///
    /// - Not empty or whitespace only
    /// - At most 128 characters
    /// - No control characters
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} characters (got {})",
                max, actual
            )),
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
            }
            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Burn one verification's worth of CPU against a throwaway hash
    pub fn verify_against_dummy(&self, cost: HashCost, pepper: Option<&[u8]>) {
        password::verify_against_dummy(&self.0, cost, pepper);
    }

    /// The same work for credentials that failed validation
    pub fn spend_dummy_verification(cost: HashCost, pepper: Option<&[u8]>) {
        password::spend_dummy_verification(cost, pepper);
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC string. Safe to store in database and logs.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password
    pub fn from_raw(raw: &RawPassword, cost: HashCost, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw.0.hash(cost, pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(_) | PasswordHashError::InvalidCost(_) => {
                AppError::internal("Internal server error").with_source(e)
            }
            PasswordHashError::InvalidHashFormat => AppError::internal("Internal server error"),
        })?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|e| AppError::internal("Invalid password hash in database").with_source(e))?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash. `pepper` must match the one
    /// used when hashing.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }

    pub fn needs_rehash(&self, cost: HashCost) -> bool {
        self.0.needs_rehash(cost)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

// ============================================================================
// Tests
// ============================================================================
