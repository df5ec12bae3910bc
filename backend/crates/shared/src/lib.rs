//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the `auth` and `notes` crates and the server:
//! - The HTTP-facing error type and its status mapping
//! - Typed entity IDs (`UserId`, `NoteId`)
//! - A JSON extractor whose rejections speak the same error format
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
