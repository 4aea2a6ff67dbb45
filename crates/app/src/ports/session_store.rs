//! Session storage port — the persisted username and token.

use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::session::Session;

/// Capability to read and clear the persisted session.
pub trait SessionStore {
    /// Read what is currently stored. A missing store is an empty session.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Session`] if the store exists but cannot be read.
    fn load(&self) -> Result<Session, AdminError>;

    /// Remove both the username and the token.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Session`] if the store cannot be written.
    fn clear(&self) -> Result<(), AdminError>;
}
