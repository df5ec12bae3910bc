//! PostgreSQL Repository Implementation
//!
//! Every statement carries `user_id = $owner`.

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::note::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_object::{
    note_content::NoteContent, note_status::NoteStatus, note_title::NoteTitle,
};
use crate::error::NoteResult;

#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl NoteRepository for PgNoteRepository {
    async fn create(&self, note: &Note) -> NoteResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notes (
                id,
                title,
                content,
                status,
                user_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(note.note_id.as_uuid())
        .bind(note.title.as_str())
        .bind(note.content.as_str())
        .bind(note.status.as_str())
        .bind(note.owner_id.as_uuid())
        .bind(note.created_at)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        status: Option<NoteStatus>,
    ) -> NoteResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, title, content, status, user_id, created_at, updated_at
            FROM notes
            WHERE user_id = $1
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NoteRow::into_note).collect())
    }

    async fn find_owned(&self, note_id: &NoteId, owner_id: &UserId) -> NoteResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, title, content, status, user_id, created_at, updated_at
            FROM notes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(note_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NoteRow::into_note))
    }

    async fn update_content(
        &self,
        note_id: &NoteId,
        owner_id: &UserId,
        title: &NoteTitle,
        content: &NoteContent,
        updated_at: DateTime<Utc>,
    ) -> NoteResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            UPDATE notes
            SET title = $1, content = $2, updated_at = $3
            WHERE id = $4 AND user_id = $5
            RETURNING id, title, content, status, user_id, created_at, updated_at
            "#,
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(updated_at)
        .bind(note_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NoteRow::into_note))
    }

    async fn set_status(
        &self,
        note_id: &NoteId,
        owner_id: &UserId,
        status: NoteStatus,
        updated_at: DateTime<Utc>,
    ) -> NoteResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE notes
            SET status = $1, updated_at = $2
            WHERE id = $3 AND user_id = $4
            "#,
        )
        .bind(status.as_str())
        .bind(updated_at)
        .bind(note_id.as_uuid())
        .bind(owner_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete_owned(&self, note_id: &NoteId, owner_id: &UserId) -> NoteResult<bool> {
        let affected = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(note_id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: Uuid,
    title: String,
    content: String,
    status: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn into_note(self) -> Note {
        Note {
            note_id: NoteId::from_uuid(self.id),
            title: NoteTitle::from_db(self.title),
            content: NoteContent::from_db(self.content),
            status: NoteStatus::from_db(&self.status),
            owner_id: UserId::from_uuid(self.user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
