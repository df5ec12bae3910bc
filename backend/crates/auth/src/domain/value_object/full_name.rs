//! Full Name Value Object
//!
//! Free-form display name. Any script is allowed; only length and
//! control characters are checked.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum full name length (in characters)
pub const FULL_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        let name = input.as_ref().trim();

        if name.is_empty() {
            return Err(AppError::bad_request("Full name cannot be empty"));
        }

        if name.chars().count() > FULL_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Full name must be at most {} characters",
                FULL_NAME_MAX_LENGTH
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::bad_request("Full name contains invalid characters"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trimmed() {
        assert_eq!(FullName::new("  Alice Liddell ").unwrap().as_str(), "Alice Liddell");
    }

    #[test]
    fn test_full_name_invalid() {
        assert!(FullName::new("").is_err());
        assert!(FullName::new("\t").is_err());
        assert!(FullName::new("a".repeat(FULL_NAME_MAX_LENGTH + 1)).is_err());
        assert!(FullName::new("Ali\u{0008}ce").is_err());
    }
}
