//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::note::Note;
use crate::domain::value_object::note_status::NoteStatus;

/// Body of create and update. Any `status` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListNotesQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub status: NoteStatus,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.note_id,
            title: note.title.into_db(),
            content: note.content.into_db(),
            status: note.status,
            user_id: note.owner_id,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleStatusResponse {
    pub status: NoteStatus,
}
