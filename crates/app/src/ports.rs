//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the admin view and the outside world.
//! They are defined here (in `app`) so that both the view layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod exporter;
pub mod session_store;
pub mod workshop_api;

pub use exporter::{DocumentExporter, SpreadsheetExporter};
pub use session_store::SessionStore;
pub use workshop_api::WorkshopApi;
