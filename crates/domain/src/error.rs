//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`AdminError`]
//! via `From`, so ports only ever speak one error type.

use std::fmt;

use crate::draft::DraftField;

/// Boxed error used for adapter-specific sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for every console operation.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// A draft failed client-side validation; no request was sent.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The referenced workshop is not in the loaded collection.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The remote workshop API call failed.
    #[error("remote API error")]
    Remote(#[from] RemoteError),

    /// An operation that needs an open editor was called while it is closed.
    #[error("no workshop is being edited")]
    NotEditing,

    /// Rendering an export document failed.
    #[error("export error")]
    Export(#[source] BoxError),

    /// Reading or clearing the persisted session failed.
    #[error("session storage error")]
    Session(#[source] BoxError),
}

/// Draft validation failures, mirroring the edit form's required inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is blank.
    #[error("{0} is required")]
    EmptyField(DraftField),

    /// The date is not a `YYYY-MM-DD` calendar date.
    #[error("date must be formatted as YYYY-MM-DD")]
    InvalidDate,

    /// The time is not `HH:MM` or `HH:MM:SS`.
    #[error("time must be formatted as HH:MM")]
    InvalidTime,
}

/// A lookup by id found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}

/// Failure classes of a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The request never produced a response (DNS, connect, reset, …).
    Transport,
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response body did not have the expected shape.
    Decode,
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => f.write_str("transport failure"),
            Self::Status(code) => write!(f, "HTTP {code}"),
            Self::Decode => f.write_str("unexpected response shape"),
        }
    }
}

/// Error returned by the remote workshop API port.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct RemoteError {
    /// What went wrong.
    pub kind: RemoteErrorKind,
    /// Underlying client error, when there is one.
    #[source]
    pub source: Option<BoxError>,
}

impl RemoteError {
    /// Build an error of the given kind without a source.
    #[must_use]
    pub fn new(kind: RemoteErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Build an error of the given kind wrapping `source`.
    #[must_use]
    pub fn with_source(
        kind: RemoteErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Whether the server answered with a non-success status.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self.kind, RemoteErrorKind::Status(_))
    }
}

impl AdminError {
    /// Whether this error comes from a non-success HTTP status.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Remote(err) if err.is_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_kind_with_code() {
        let err = RemoteError::new(RemoteErrorKind::Status(404));
        assert_eq!(err.to_string(), "HTTP 404");
        assert!(err.is_status());
    }

    #[test]
    fn should_not_flag_transport_error_as_status() {
        let err: AdminError = RemoteError::new(RemoteErrorKind::Transport).into();
        assert!(!err.is_status());
    }

    #[test]
    fn should_name_blank_field_in_validation_message() {
        let err = ValidationError::EmptyField(DraftField::MeetingLink);
        assert_eq!(err.to_string(), "meeting link is required");
    }

    #[test]
    fn should_keep_source_when_wrapping() {
        let io = std::io::Error::other("boom");
        let err = RemoteError::with_source(RemoteErrorKind::Transport, io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
