//! Note Content Value Object
//!
//! Body text. Must hold something other than whitespace; otherwise kept
//! exactly as written, leading indentation and line breaks included.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteContent(String);

impl NoteContent {
    pub fn new(input: impl Into<String>) -> AppResult<Self> {
        let content = input.into();
        if content.trim().is_empty() {
            return Err(AppError::bad_request("Content cannot be empty"));
        }
        Ok(Self(content))
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
