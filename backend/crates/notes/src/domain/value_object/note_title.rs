//! Note Title Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length (in characters)
pub const NOTE_TITLE_MAX_LENGTH: usize = 255;

/// Non-blank, trimmed title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteTitle(String);

impl NoteTitle {
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        let title = input.as_ref().trim();

        if title.is_empty() {
            return Err(AppError::bad_request("Title cannot be empty"));
        }

        if title.chars().count() > NOTE_TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                NOTE_TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(title.to_string()))
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

impl fmt::Display for NoteTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
