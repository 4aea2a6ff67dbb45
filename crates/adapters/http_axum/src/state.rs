//! Shared application state for axum handlers.

use std::sync::Arc;

use workshop_admin_app::controller::AdminController;
use workshop_admin_app::ports::{DocumentExporter, SessionStore, SpreadsheetExporter, WorkshopApi};

use crate::nav::Links;

/// Application state shared across all axum handlers.
///
/// Generic over the workshop API, session store, and both exporters to
/// avoid dynamic dispatch. `Clone` is implemented manually so the underlying
/// types themselves do not need to be `Clone`; only the `Arc` wrappers are
/// cloned.
pub struct AppState<A, S, D, X> {
    /// Drives the single admin view.
    pub controller: Arc<AdminController<A, S>>,
    /// Renders the PDF export.
    pub document_exporter: Arc<D>,
    /// Renders the XLSX export.
    pub spreadsheet_exporter: Arc<X>,
    /// Login redirect and sidebar targets.
    pub links: Arc<Links>,
}

impl<A, S, D, X> Clone for AppState<A, S, D, X> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            document_exporter: Arc::clone(&self.document_exporter),
            spreadsheet_exporter: Arc::clone(&self.spreadsheet_exporter),
            links: Arc::clone(&self.links),
        }
    }
}

impl<A, S, D, X> AppState<A, S, D, X>
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    /// Create a new application state.
    pub fn new(
        controller: AdminController<A, S>,
        document_exporter: D,
        spreadsheet_exporter: X,
        links: Links,
    ) -> Self {
        Self::from_arcs(
            Arc::new(controller),
            Arc::new(document_exporter),
            Arc::new(spreadsheet_exporter),
            links,
        )
    }

    /// Create a new application state from a pre-wrapped controller.
    ///
    /// Use this when the controller needs to be shared with background tasks
    /// (initial load, shutdown) before constructing the HTTP state.
    pub fn from_arcs(
        controller: Arc<AdminController<A, S>>,
        document_exporter: Arc<D>,
        spreadsheet_exporter: Arc<X>,
        links: Links,
    ) -> Self {
        Self {
            controller,
            document_exporter,
            spreadsheet_exporter,
            links: Arc::new(links),
        }
    }
}
