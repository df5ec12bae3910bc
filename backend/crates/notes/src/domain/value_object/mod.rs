//! Value Object Module

pub mod note_content;
pub mod note_status;
pub mod note_title;
