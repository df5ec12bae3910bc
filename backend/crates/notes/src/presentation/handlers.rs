//! HTTP Handlers

use auth::CurrentUser;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::extract::AppJson;
use kernel::id::NoteId;
use std::sync::Arc;

use crate::application::{
    CreateNoteInput, CreateNoteUseCase, DeleteNoteUseCase, ListNotesUseCase, ToggleStatusUseCase,
    UpdateNoteInput, UpdateNoteUseCase,
};
use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};
use crate::presentation::dto::{ListNotesQuery, NoteRequest, NoteResponse, ToggleStatusResponse};

/// Shared state for note handlers
pub struct NotesAppState<R>
where
    R: NoteRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for NotesAppState<R>
where
    R: NoteRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

fn parse_note_id(raw: &str) -> NoteResult<NoteId> {
    raw.parse().map_err(|_| NoteError::InvalidId)
}

/// GET /api/notes
pub async fn list_notes<R>(
    State(state): State<NotesAppState<R>>,
    user: CurrentUser,
    Query(query): Query<ListNotesQuery>,
) -> NoteResult<Json<Vec<NoteResponse>>>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let notes = ListNotesUseCase::new(state.repo.clone())
        .execute(&user.user_id, query.status.as_deref())
        .await?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// POST /api/notes
pub async fn create_note<R>(
    State(state): State<NotesAppState<R>>,
    user: CurrentUser,
    AppJson(req): AppJson<NoteRequest>,
) -> NoteResult<(StatusCode, Json<NoteResponse>)>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let note = CreateNoteUseCase::new(state.repo.clone())
        .execute(CreateNoteInput {
            owner_id: user.user_id,
            title: req.title,
            content: req.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(note.into())))
}

/// PUT /api/notes/{id}
pub async fn update_note<R>(
    State(state): State<NotesAppState<R>>,
    user: CurrentUser,
    Path(id): Path<String>,
    AppJson(req): AppJson<NoteRequest>,
) -> NoteResult<Json<NoteResponse>>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let note_id = parse_note_id(&id)?;

    let note = UpdateNoteUseCase::new(state.repo.clone())
        .execute(UpdateNoteInput {
            owner_id: user.user_id,
            note_id,
            title: req.title,
            content: req.content,
        })
        .await?;

    Ok(Json(note.into()))
}

/// DELETE /api/notes/{id}
pub async fn delete_note<R>(
    State(state): State<NotesAppState<R>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> NoteResult<StatusCode>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let note_id = parse_note_id(&id)?;

    DeleteNoteUseCase::new(state.repo.clone())
        .execute(&user.user_id, &note_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/notes/{id}/toggle
pub async fn toggle_status<R>(
    State(state): State<NotesAppState<R>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> NoteResult<Json<ToggleStatusResponse>>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let note_id = parse_note_id(&id)?;

    let status = ToggleStatusUseCase::new(state.repo.clone())
        .execute(&user.user_id, &note_id)
        .await?;

    Ok(Json(ToggleStatusResponse { status }))
}
