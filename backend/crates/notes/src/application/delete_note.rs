//! Delete Note Use Case

use std::sync::Arc;

use kernel::id::{NoteId, UserId};

use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};

pub struct DeleteNoteUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<()> {
        if !self.repo.delete_owned(note_id, owner_id).await? {
            return Err(NoteError::NotFound);
        }

        tracing::info!(note_id = %note_id, user_id = %owner_id, "Note deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{repo, seed};

    #[tokio::test]
    async fn test_delete_own_note() {
        let repo = repo();
        let alice = UserId::new();
        let note = seed(&repo, alice, "t").await;

        DeleteNoteUseCase::new(repo.clone())
            .execute(&alice, &note.note_id)
            .await
            .unwrap();
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_delete_foreign_or_missing_leaves_store_unchanged() {
        let repo = repo();
        let alice = UserId::new();
        let note = seed(&repo, alice, "t").await;
        let use_case = DeleteNoteUseCase::new(repo.clone());

        assert!(matches!(
            use_case.execute(&UserId::new(), &note.note_id).await,
            Err(NoteError::NotFound)
        ));
        assert!(matches!(
            use_case.execute(&alice, &NoteId::new()).await,
            Err(NoteError::NotFound)
        ));
        assert_eq!(repo.len(), 1);

        use_case.execute(&alice, &note.note_id).await.unwrap();
        assert!(matches!(
            use_case.execute(&alice, &note.note_id).await,
            Err(NoteError::NotFound)
        ));
    }
}
