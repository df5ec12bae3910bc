//! Application Layer
//!
//! Note use cases. Each takes the caller's id and never touches a note
//! owned by anyone else.

pub mod create_note;
pub mod delete_note;
pub mod list_notes;
pub mod toggle_status;
pub mod update_note;

// Re-exports
pub use create_note::{CreateNoteInput, CreateNoteUseCase};
pub use delete_note::DeleteNoteUseCase;
pub use list_notes::ListNotesUseCase;
pub use toggle_status::ToggleStatusUseCase;
pub use update_note::{UpdateNoteInput, UpdateNoteUseCase};

use crate::domain::value_object::{note_content::NoteContent, note_title::NoteTitle};
use crate::error::{NoteError, NoteResult};

/// Shared by create and update: both fields required, then value rules
fn validate_fields(title: &str, content: &str) -> NoteResult<(NoteTitle, NoteContent)> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(NoteError::MissingFields);
    }
    Ok((NoteTitle::new(title)?, NoteContent::new(content)?))
}
