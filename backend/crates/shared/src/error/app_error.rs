//! [`AppError`]: the one error type that reaches the HTTP layer.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified application error.
///
/// Every domain error ends up here before it reaches the wire. The
/// `message` is what the client sees, so for 5xx kinds it must stay opaque;
/// the underlying cause goes into `source` and is only ever logged.
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Note not found");
/// assert_eq!(err.status_code(), 404);
///
/// let err = AppError::internal("Internal server error")
///     .with_source(std::io::Error::other("disk on fire"));
/// assert_eq!(err.message(), "Internal server error");
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

macro_rules! kind_constructors {
    ($($(#[$doc:meta])* $name:ident => $kind:ident,)*) => {
        impl AppError {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $name(message: impl Into<Cow<'static, str>>) -> Self {
                    Self::new(ErrorKind::$kind, message)
                }
            )*
        }
    };
}

kind_constructors! {
    bad_request => BadRequest,
    unauthorized => Unauthorized,
    not_found => NotFound,
    conflict => Conflict,
    /// Keep the message opaque; put the cause in [`AppError::with_source`]
    internal => InternalServerError,
    service_unavailable => ServiceUnavailable,
}

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause (logged, never rendered)
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    #[inline]
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }

    /// JSON body sent to clients: `{"error": "<message>"}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.message() })
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "User not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "User not found");
    }

    #[test]
    fn test_constructors_pick_kind() {
        let cases = [
            (AppError::bad_request("x"), ErrorKind::BadRequest),
            (AppError::unauthorized("x"), ErrorKind::Unauthorized),
            (AppError::not_found("x"), ErrorKind::NotFound),
            (AppError::conflict("x"), ErrorKind::Conflict),
            (AppError::internal("x"), ErrorKind::InternalServerError),
            (AppError::service_unavailable("x"), ErrorKind::ServiceUnavailable),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind);
            assert_eq!(err.message(), "x");
        }
    }

    #[test]
    fn test_with_source_keeps_message() {
        let io_err = std::io::Error::other("connection reset by peer");
        let err = AppError::internal("Internal server error").with_source(io_err);
        assert!(err.source().is_some());
        assert_eq!(err.message(), "Internal server error");
        assert!(!err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_json_body_shape() {
        let body = AppError::unauthorized("Unauthorized").to_json();
        assert_eq!(body, serde_json::json!({ "error": "Unauthorized" }));
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found("Note not found");
        assert_eq!(err.to_string(), "[Not Found] Note not found");
    }
}
