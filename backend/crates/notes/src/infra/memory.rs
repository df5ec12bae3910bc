//! In-memory Repository
//!
//! Mirrors the PostgreSQL repository's ownership filtering and ordering.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};

use crate::domain::entity::note::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_object::{
    note_content::NoteContent, note_status::NoteStatus, note_title::NoteTitle,
};
use crate::error::{NoteError, NoteResult};

#[derive(Clone, Debug, Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<Mutex<HashMap<NoteId, Note>>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn notes(&self) -> NoteResult<MutexGuard<'_, HashMap<NoteId, Note>>> {
        self.notes
            .lock()
            .map_err(|_| NoteError::Internal("note store lock poisoned".to_string()))
    }

    /// Total number of notes across all owners
    pub fn len(&self) -> usize {
        self.notes().map(|notes| notes.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, note: &Note) -> NoteResult<()> {
        self.notes()?.insert(note.note_id, note.clone());
        Ok(())
    }

    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        status: Option<NoteStatus>,
    ) -> NoteResult<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .notes()?
            .values()
            .filter(|n| n.is_owned_by(owner_id))
            .filter(|n| status.is_none_or(|s| n.status == s))
            .cloned()
            .collect();

        notes.sort_by(|a, b| {
            (b.created_at, b.note_id.as_uuid()).cmp(&(a.created_at, a.note_id.as_uuid()))
        });
        Ok(notes)
    }

    async fn find_owned(&self, note_id: &NoteId, owner_id: &UserId) -> NoteResult<Option<Note>> {
        Ok(self
            .notes()?
            .get(note_id)
            .filter(|n| n.is_owned_by(owner_id))
            .cloned())
    }

    async fn update_content(
        &self,
        note_id: &NoteId,
        owner_id: &UserId,
        title: &NoteTitle,
        content: &NoteContent,
        updated_at: DateTime<Utc>,
    ) -> NoteResult<Option<Note>> {
        let mut notes = self.notes()?;
        let Some(note) = notes.get_mut(note_id).filter(|n| n.is_owned_by(owner_id)) else {
            return Ok(None);
        };

        note.title = title.clone();
        note.content = content.clone();
        note.updated_at = updated_at;
        Ok(Some(note.clone()))
    }

    async fn set_status(
        &self,
        note_id: &NoteId,
        owner_id: &UserId,
        status: NoteStatus,
        updated_at: DateTime<Utc>,
    ) -> NoteResult<bool> {
        let mut notes = self.notes()?;
        let Some(note) = notes.get_mut(note_id).filter(|n| n.is_owned_by(owner_id)) else {
            return Ok(false);
        };

        note.status = status;
        note.updated_at = updated_at;
        Ok(true)
    }

    async fn delete_owned(&self, note_id: &NoteId, owner_id: &UserId) -> NoteResult<bool> {
        let mut notes = self.notes()?;
        if !notes.get(note_id).is_some_and(|n| n.is_owned_by(owner_id)) {
            return Ok(false);
        }
        notes.remove(note_id);
        Ok(true)
    }
}
