//! Note Status Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Completion state of a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    #[default]
    Pending,
    Completed,
}

impl NoteStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            NoteStatus::Pending => "pending",
            NoteStatus::Completed => "completed",
        }
    }

    /// Pending becomes completed; anything else becomes pending
    pub const fn toggled(self) -> Self {
        match self {
            NoteStatus::Pending => NoteStatus::Completed,
            NoteStatus::Completed => NoteStatus::Pending,
        }
    }

    /// Lenient read of a stored value: only "pending" is pending
    pub fn from_db(value: &str) -> Self {
        if value == "pending" {
            NoteStatus::Pending
        } else {
            NoteStatus::Completed
        }
    }
}

impl FromStr for NoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(NoteStatus::Pending),
            "completed" => Ok(NoteStatus::Completed),
            other => Err(format!("unknown note status: {other}")),
        }
    }
}

impl fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
