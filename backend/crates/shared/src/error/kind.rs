//! Error Kind
//!
//! Which HTTP status an [`AppError`](super::app_error::AppError) answers with.

use serde::Serialize;
use std::fmt;

/// One variant per status the API can produce.
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.status_code(), 404);
/// assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Missing/empty fields, malformed body, duplicate account
    BadRequest,
    /// No session or bad credentials
    Unauthorized,
    /// Missing, or owned by someone else
    NotFound,
    /// Unique/foreign key violation reported by the store
    Conflict,
    InternalServerError,
    /// Store unreachable or exhausted
    ServiceUnavailable,
}

impl ErrorKind {
    const fn status(self) -> (u16, &'static str) {
        match self {
            Self::BadRequest => (400, "Bad Request"),
            Self::Unauthorized => (401, "Unauthorized"),
            Self::NotFound => (404, "Not Found"),
            Self::Conflict => (409, "Conflict"),
            Self::InternalServerError => (500, "Internal Server Error"),
            Self::ServiceUnavailable => (503, "Service Unavailable"),
        }
    }

    #[inline]
    pub const fn status_code(&self) -> u16 {
        self.status().0
    }

    /// Reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.status().1
    }

    /// Logged with their source, rendered with an opaque message
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.status_code(), 400..=499)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
