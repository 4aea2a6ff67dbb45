//! # workshop-admind — workshop admin console daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the workshop API client, session store, and exporters
//! - Read the session and build the admin view and its controller
//! - Start the initial collection load
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), cancelling in-flight requests
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use workshop_admin_adapter_export::{PdfDocumentExporter, XlsxSpreadsheetExporter};
use workshop_admin_adapter_http_axum::router;
use workshop_admin_adapter_http_axum::state::AppState;
use workshop_admin_adapter_session_file::FileSessionStore;
use workshop_admin_app::controller::AdminController;
use workshop_admin_app::session::SessionContext;
use workshop_admin_app::view::WorkshopAdminView;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Adapters
    let api = config.api.build()?;
    let sessions = FileSessionStore::new(&config.session.path);

    // View
    let session = SessionContext::load(sessions)?;
    tracing::info!(operator = session.display_name(), "session loaded");
    let controller = Arc::new(AdminController::new(api, WorkshopAdminView::new(session)));

    // Initial page load
    let loader = Arc::clone(&controller);
    tokio::spawn(async move {
        loader.mount().await;
    });

    // HTTP
    let state = AppState::from_arcs(
        Arc::clone(&controller),
        Arc::new(PdfDocumentExporter::new()),
        Arc::new(XlsxSpreadsheetExporter::new()),
        config.links.clone(),
    );
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        api = %config.api.base_url,
        "workshop-admind listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    controller.shutdown().await;
    tracing::info!("workshop-admind stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
