//! Session context — the persisted identity handed to the view at construction.

use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::session::Session;

use crate::ports::SessionStore;

/// The loaded session plus the capability to clear it.
pub struct SessionContext<S> {
    session: Session,
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    /// Read the session from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Session`] if the store cannot be read.
    pub fn load(store: S) -> Result<Self, AdminError> {
        let session = store.load()?;
        Ok(Self { session, store })
    }

    /// Read the store again, picking up a login that happened elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Session`] if the store cannot be read; the
    /// previously loaded session is kept in that case.
    pub fn reload(&mut self) -> Result<(), AdminError> {
        self.session = self.store.load()?;
        Ok(())
    }

    /// The session as last read (or empty after [`clear`](Self::clear)).
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Name shown in the page header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.session.display_name()
    }

    /// Clear the persisted username and token.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Session`] if the store cannot be written; the
    /// in-memory copy is left untouched in that case.
    pub fn clear(&mut self) -> Result<(), AdminError> {
        self.store.clear()?;
        self.session = Session::default();
        Ok(())
    }
}
