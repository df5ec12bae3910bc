//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::note::Note;
pub use repository::NoteRepository;
pub use value_object::note_status::NoteStatus;
