//! # workshop-admin-adapter-session-file
//!
//! File-backed implementation of the `SessionStore` port.
//!
//! The session is a small JSON object (`{"username": ..., "token": ...}`)
//! written by whatever performed the login. This adapter only reads it and,
//! on logout, removes it.

pub mod error;
pub mod store;

pub use error::SessionFileError;
pub use store::FileSessionStore;
