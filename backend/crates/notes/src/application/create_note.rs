//! Create Note Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::validate_fields;
use crate::domain::entity::note::Note;
use crate::domain::repository::NoteRepository;
use crate::error::NoteResult;

pub struct CreateNoteInput {
    pub owner_id: UserId,
    pub title: String,
    pub content: String,
}

pub struct CreateNoteUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> CreateNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Status always starts as pending, whatever the client asked for
    pub async fn execute(&self, input: CreateNoteInput) -> NoteResult<Note> {
        let (title, content) = validate_fields(&input.title, &input.content)?;

        let note = Note::new(input.owner_id, title, content);
        self.repo.create(&note).await?;

        tracing::info!(note_id = %note.note_id, user_id = %note.owner_id, "Note created");

        Ok(note)
    }
}
