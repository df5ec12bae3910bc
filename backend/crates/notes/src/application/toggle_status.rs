//! Toggle Status Use Case
//!
//! Read the current status for (id, owner), write the other one.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{NoteId, UserId};

use crate::domain::repository::NoteRepository;
use crate::domain::value_object::note_status::NoteStatus;
use crate::error::{NoteError, NoteResult};

pub struct ToggleStatusUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> ToggleStatusUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the new status
    pub async fn execute(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<NoteStatus> {
        let note = self
            .repo
            .find_owned(note_id, owner_id)
            .await?
            .ok_or(NoteError::NotFound)?;

        let new_status = note.status.toggled();

        // The row can vanish between the read and the write
        if !self
            .repo
            .set_status(note_id, owner_id, new_status, Utc::now())
            .await?
        {
            return Err(NoteError::NotFound);
        }

        tracing::info!(
            note_id = %note_id,
            user_id = %owner_id,
            status = %new_status,
            "Note status toggled"
        );

        Ok(new_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{repo, seed};

    #[tokio::test]
    async fn test_toggle_twice_returns_to_start() {
        let repo = repo();
        let alice = UserId::new();
        let note = seed(&repo, alice, "t").await;
        let use_case = ToggleStatusUseCase::new(repo.clone());

        assert_eq!(
            use_case.execute(&alice, &note.note_id).await.unwrap(),
            NoteStatus::Completed
        );
        assert_eq!(
            use_case.execute(&alice, &note.note_id).await.unwrap(),
            NoteStatus::Pending
        );

        let stored = repo.find_owned(&note.note_id, &alice).await.unwrap().unwrap();
        assert_eq!(stored.status, NoteStatus::Pending);
    }

    #[tokio::test]
    async fn test_toggle_foreign_note_is_not_found() {
        let repo = repo();
        let alice = UserId::new();
        let note = seed(&repo, alice, "t").await;

        let result = ToggleStatusUseCase::new(repo.clone())
            .execute(&UserId::new(), &note.note_id)
            .await;
        assert!(matches!(result, Err(NoteError::NotFound)));

        let stored = repo.find_owned(&note.note_id, &alice).await.unwrap().unwrap();
        assert_eq!(stored.status, NoteStatus::Pending);
    }
}
