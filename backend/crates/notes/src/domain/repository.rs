//! Repository Traits
//!
//! Every method takes the owner. A note that exists but belongs to
//! someone else is indistinguishable from one that does not exist.

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};

use crate::domain::entity::note::Note;
use crate::domain::value_object::{
    note_content::NoteContent, note_status::NoteStatus, note_title::NoteTitle,
};
use crate::error::NoteResult;

#[trait_variant::make(NoteRepository: Send)]
pub trait LocalNoteRepository {
    async fn create(&self, note: &Note) -> NoteResult<()>;

    /// Owner's notes, newest created first, optionally filtered by status
    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        status: Option<NoteStatus>,
    ) -> NoteResult<Vec<Note>>;

    async fn find_owned(&self, note_id: &NoteId, owner_id: &UserId) -> NoteResult<Option<Note>>;

    /// Replace title and content. `None` if no such note for this owner.
    async fn update_content(
        &self,
        note_id: &NoteId,
        owner_id: &UserId,
        title: &NoteTitle,
        content: &NoteContent,
        updated_at: DateTime<Utc>,
    ) -> NoteResult<Option<Note>>;

    /// `false` if no such note for this owner
    async fn set_status(
        &self,
        note_id: &NoteId,
        owner_id: &UserId,
        status: NoteStatus,
        updated_at: DateTime<Utc>,
    ) -> NoteResult<bool>;

    /// `false` if no such note for this owner
    async fn delete_owned(&self, note_id: &NoteId, owner_id: &UserId) -> NoteResult<bool>;
}
