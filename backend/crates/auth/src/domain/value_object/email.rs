//! Email Value Object
//!
//! Stored trimmed and lower-cased. Only the shape is checked; nothing
//! is ever sent to the address.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RFC 5321 path limit
pub const EMAIL_MAX_LENGTH: usize = 254;
const LOCAL_PART_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,

    #[error("Email must be at most {EMAIL_MAX_LENGTH} characters")]
    TooLong,

    #[error("Invalid email format")]
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(input: impl AsRef<str>) -> Result<Self, EmailError> {
        let email = input.as_ref().trim().to_lowercase();

        match email.len() {
            0 => Err(EmailError::Empty),
            n if n > EMAIL_MAX_LENGTH => Err(EmailError::TooLong),
            _ if !well_formed(&email) => Err(EmailError::Malformed),
            _ => Ok(Self(email)),
        }
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

/// `local@label.label[...]` with at least two domain labels
fn well_formed(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local.len() <= LOCAL_PART_MAX_LENGTH
        && !local.chars().any(|c| c.is_whitespace() || c.is_control());

    let mut labels = 0;
    let domain_ok = domain.split('.').all(|label| {
        labels += 1;
        valid_label(label)
    });

    local_ok && domain_ok && labels >= 2
}

/// Letters, digits and inner hyphens
fn valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
