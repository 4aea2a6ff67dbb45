//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use workshop_admin_app::ports::{DocumentExporter, SessionStore, SpreadsheetExporter, WorkshopApi};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the console at `/` and a health check at `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<A, S, D, X>(state: AppState<A, S, D, X>) -> Router
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
