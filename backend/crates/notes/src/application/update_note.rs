//! Update Note Use Case
//!
//! Replaces title and content. Status is not touched here.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{NoteId, UserId};

use crate::application::validate_fields;
use crate::domain::entity::note::Note;
use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};

pub struct UpdateNoteInput {
    pub owner_id: UserId,
    pub note_id: NoteId,
    pub title: String,
    pub content: String,
}

pub struct UpdateNoteUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateNoteInput) -> NoteResult<Note> {
        let (title, content) = validate_fields(&input.title, &input.content)?;

        let note = self
            .repo
            .update_content(&input.note_id, &input.owner_id, &title, &content, Utc::now())
            .await?
            .ok_or(NoteError::NotFound)?;

        tracing::info!(note_id = %note.note_id, user_id = %input.owner_id, "Note updated");

        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{repo, seed};
    use crate::domain::NoteStatus;

    fn input(owner_id: UserId, note_id: NoteId) -> UpdateNoteInput {
        UpdateNoteInput {
            owner_id,
            note_id,
            title: "new title".to_string(),
            content: "new content".to_string(),
        }
    }

    #[tokio::test]
    async fn test_update_own_note() {
        let repo = repo();
        let alice = UserId::new();
        let note = seed(&repo, alice, "old").await;

        let updated = UpdateNoteUseCase::new(repo)
            .execute(input(alice, note.note_id))
            .await
            .unwrap();

        assert_eq!(updated.title.as_str(), "new title");
        assert_eq!(updated.content.as_str(), "new content");
        assert_eq!(updated.status, NoteStatus::Pending);
        assert_eq!(updated.created_at, note.created_at);
        assert!(updated.updated_at >= note.updated_at);
    }

    #[tokio::test]
    async fn test_foreign_and_missing_notes_look_the_same() {
        let repo = repo();
        let alice = UserId::new();
        let note = seed(&repo, alice, "old").await;
        let use_case = UpdateNoteUseCase::new(repo.clone());

        let foreign = use_case.execute(input(UserId::new(), note.note_id)).await;
        let missing = use_case.execute(input(alice, NoteId::new())).await;

        assert!(matches!(foreign, Err(NoteError::NotFound)));
        assert!(matches!(missing, Err(NoteError::NotFound)));

        let unchanged = repo.find_owned(&note.note_id, &alice).await.unwrap().unwrap();
        assert_eq!(unchanged.title.as_str(), "old");
    }

    #[tokio::test]
    async fn test_blank_update_rejected() {
        let repo = repo();
        let alice = UserId::new();
        let note = seed(&repo, alice, "old").await;

        let mut blank = input(alice, note.note_id);
        blank.content = " ".to_string();
        let result = UpdateNoteUseCase::new(repo).execute(blank).await;
        assert!(matches!(result, Err(NoteError::MissingFields)));
    }
}
