//! JSON file session store.

use std::io::ErrorKind;
use std::path::PathBuf;

use workshop_admin_app::ports::SessionStore;
use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::session::Session;

use crate::error::SessionFileError;

/// Reads the session from a JSON file; a missing or blank file is an empty session.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<Session, SessionFileError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no session file");
                return Ok(Session::default());
            }
            Err(source) => {
                return Err(SessionFileError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(Session::default());
        }
        serde_json::from_str(&raw).map_err(|source| SessionFileError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn remove(&self) -> Result<(), SessionFileError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionFileError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Session, AdminError> {
        Ok(self.read()?)
    }

    fn clear(&self) -> Result<(), AdminError> {
        Ok(self.remove()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("workshop-admin-session-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn should_load_empty_session_when_file_missing() {
        let store = FileSessionStore::new(temp_path());
        assert_eq!(store.load().unwrap(), Session::default());
    }

    #[test]
    fn should_load_username_and_token() {
        let path = temp_path();
        std::fs::write(&path, r#"{"username":"alice","token":"t-1"}"#).unwrap();

        let session = FileSessionStore::new(&path).load().unwrap();

        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(session.token.as_deref(), Some("t-1"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn should_treat_blank_file_as_empty_session() {
        let path = temp_path();
        std::fs::write(&path, "  \n").unwrap();

        let session = FileSessionStore::new(&path).load().unwrap();

        assert!(session.is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn should_reject_malformed_file() {
        let path = temp_path();
        std::fs::write(&path, "{not json").unwrap();

        let err = FileSessionStore::new(&path).load().unwrap_err();

        assert!(matches!(err, AdminError::Session(_)));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn should_remove_file_on_clear() {
        let path = temp_path();
        std::fs::write(&path, r#"{"username":"alice"}"#).unwrap();
        let store = FileSessionStore::new(&path);

        store.clear().unwrap();

        assert!(!path.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn should_clear_when_file_already_gone() {
        let store = FileSessionStore::new(temp_path());
        store.clear().unwrap();
    }
}
