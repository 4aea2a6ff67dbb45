//! Session file error types.

use std::path::PathBuf;

use workshop_admin_domain::error::AdminError;

#[derive(Debug, thiserror::Error)]
pub enum SessionFileError {
    #[error("unable to read session file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to remove session file {path}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<SessionFileError> for AdminError {
    fn from(err: SessionFileError) -> Self {
        Self::Session(Box::new(err))
    }
}
