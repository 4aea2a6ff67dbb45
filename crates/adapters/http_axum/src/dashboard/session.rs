//! Session controls.

use axum::extract::State;
use axum::response::Redirect;

use workshop_admin_app::ports::{DocumentExporter, SessionStore, SpreadsheetExporter, WorkshopApi};

use crate::error::DashboardError;
use crate::state::AppState;

/// `POST /logout` — cancel in-flight requests, clear the session, go to login.
pub async fn logout<A, S, D, X>(
    State(state): State<AppState<A, S, D, X>>,
) -> Result<Redirect, DashboardError>
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    state.controller.logout().await?;
    tracing::info!("operator logged out");
    Ok(Redirect::to(&state.links.login_url()))
}
