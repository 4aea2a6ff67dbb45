//! HTTP client error types.

use workshop_admin_domain::error::{AdminError, RemoteError, RemoteErrorKind};

/// Errors specific to the reqwest adapter.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the connection failed.
    #[error("request to workshop API failed")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("workshop API answered {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON.
    #[error("unexpected response from workshop API")]
    Decode(#[source] reqwest::Error),
}

impl ApiClientError {
    /// Classify a failure that happened while reading a response body.
    pub(crate) fn from_body(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }

    /// The failure class reported across the port boundary.
    #[must_use]
    pub fn kind(&self) -> RemoteErrorKind {
        match self {
            Self::Client(_) | Self::Transport(_) => RemoteErrorKind::Transport,
            Self::Status(status) => RemoteErrorKind::Status(status.as_u16()),
            Self::Decode(_) => RemoteErrorKind::Decode,
        }
    }
}

impl From<ApiClientError> for AdminError {
    fn from(err: ApiClientError) -> Self {
        Self::Remote(RemoteError::with_source(err.kind(), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error() {
        let err = ApiClientError::Status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "workshop API answered 404 Not Found");
    }

    #[test]
    fn should_convert_status_into_remote_status_kind() {
        let err: AdminError = ApiClientError::Status(reqwest::StatusCode::CONFLICT).into();
        assert!(matches!(
            err,
            AdminError::Remote(RemoteError {
                kind: RemoteErrorKind::Status(409),
                ..
            })
        ));
        assert!(err.is_status());
    }
}
