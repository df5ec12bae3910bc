//! List Notes Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::note::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_object::note_status::NoteStatus;
use crate::error::{NoteError, NoteResult};

pub struct ListNotesUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> ListNotesUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Caller's notes, newest first. An empty filter means no filter.
    pub async fn execute(&self, owner_id: &UserId, status: Option<&str>) -> NoteResult<Vec<Note>> {
        let status = match status.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                raw.parse::<NoteStatus>()
                    .map_err(|_| NoteError::InvalidStatusFilter)?,
            ),
            None => None,
        };

        self.repo.list_by_owner(owner_id, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{repo, seed};
    use chrono::Utc;

    #[tokio::test]
    async fn test_list_only_own_notes_newest_first() {
        let repo = repo();
        let alice = UserId::new();
        let bob = UserId::new();

        let first = seed(&repo, alice, "first").await;
        let second = seed(&repo, alice, "second").await;
        seed(&repo, bob, "bob's").await;

        let notes = ListNotesUseCase::new(repo).execute(&alice, None).await.unwrap();
        let ids: Vec<_> = notes.iter().map(|n| n.note_id).collect();
        assert_eq!(ids, vec![second.note_id, first.note_id]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let notes = ListNotesUseCase::new(repo())
            .execute(&UserId::new(), None)
            .await
            .unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_status_filter() {
        let repo = repo();
        let alice = UserId::new();
        let done = seed(&repo, alice, "done").await;
        seed(&repo, alice, "todo").await;
        repo.set_status(&done.note_id, &alice, NoteStatus::Completed, Utc::now())
            .await
            .unwrap();

        let use_case = ListNotesUseCase::new(repo);
        let completed = use_case.execute(&alice, Some("completed")).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].note_id, done.note_id);

        assert_eq!(use_case.execute(&alice, Some("pending")).await.unwrap().len(), 1);
        assert_eq!(use_case.execute(&alice, Some("")).await.unwrap().len(), 2);
        assert!(matches!(
            use_case.execute(&alice, Some("archived")).await,
            Err(NoteError::InvalidStatusFilter)
        ));
    }
}
