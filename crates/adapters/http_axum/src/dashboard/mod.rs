//! Server-side rendered HTML console (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod session;
#[allow(clippy::missing_errors_doc)]
pub mod workshops;

use axum::Router;
use axum::response::Redirect;
use axum::routing::{get, post};

use workshop_admin_app::ports::{DocumentExporter, SessionStore, SpreadsheetExporter, WorkshopApi};

use crate::state::AppState;

/// Build the console sub-router for SSR HTML pages.
pub fn routes<A, S, D, X>() -> Router<AppState<A, S, D, X>>
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(|| async { Redirect::to(workshops::LIST_PATH) }))
        .route(workshops::LIST_PATH, get(workshops::list::<A, S, D, X>))
        .route("/workshops/reload", post(workshops::reload::<A, S, D, X>))
        .route(
            "/workshops/edit/cancel",
            post(workshops::cancel_edit::<A, S, D, X>),
        )
        .route(
            "/workshops/export/pdf",
            get(workshops::export_pdf::<A, S, D, X>),
        )
        .route(
            "/workshops/export/xlsx",
            get(workshops::export_xlsx::<A, S, D, X>),
        )
        .route("/workshops/{id}", post(workshops::submit::<A, S, D, X>))
        .route(
            "/workshops/{id}/edit",
            post(workshops::open_editor::<A, S, D, X>),
        )
        .route(
            "/workshops/{id}/delete",
            get(workshops::confirm_delete::<A, S, D, X>).post(workshops::delete::<A, S, D, X>),
        )
        .route("/logout", post(session::logout::<A, S, D, X>))
}
