//! Note Entity

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};

use crate::domain::value_object::{
    note_content::NoteContent, note_status::NoteStatus, note_title::NoteTitle,
};

/// A todo item. Exactly one owner, fixed at creation.
#[derive(Debug, Clone)]
pub struct Note {
    pub note_id: NoteId,
    pub title: NoteTitle,
    pub content: NoteContent,
    pub status: NoteStatus,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// New notes always start pending
    pub fn new(owner_id: UserId, title: NoteTitle, content: NoteContent) -> Self {
        let now = Utc::now();
        Self {
            note_id: NoteId::new(),
            title,
            content,
            status: NoteStatus::Pending,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }
}
