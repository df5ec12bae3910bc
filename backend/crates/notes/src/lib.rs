//! Notes Backend Module
//!
//! Personal todo notes: create, list, update, delete, toggle completion.
//!
//! Clean Architecture structure:
//! - `domain/` - Note entity, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership
//! Every repository method takes the owner id and every statement filters
//! on it. A note owned by someone else answers exactly like a missing one.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::{Note, NoteRepository, NoteStatus};
pub use error::{NoteError, NoteResult};
pub use infra::{InMemoryNoteRepository, PgNoteRepository};
pub use presentation::{NotesAppState, notes_router};
