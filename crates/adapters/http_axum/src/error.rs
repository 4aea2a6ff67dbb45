//! HTTP error response mapping.

use askama::Template;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use workshop_admin_domain::error::AdminError;

/// Maps console failures to an HTTP response with an appropriate status code.
///
/// Remote failures of update and delete never get here: they become toasts
/// inside the view. What remains are lookups, malformed forms, and the
/// export and session faults that have no user-facing notification.
#[derive(Debug)]
pub enum DashboardError {
    Admin(AdminError),
    Multipart(MultipartError),
}

impl From<AdminError> for DashboardError {
    fn from(err: AdminError) -> Self {
        Self::Admin(err)
    }
}

impl From<MultipartError> for DashboardError {
    fn from(err: MultipartError) -> Self {
        Self::Multipart(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Admin(AdminError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Admin(AdminError::Validation(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Admin(AdminError::NotEditing) => {
                (StatusCode::CONFLICT, AdminError::NotEditing.to_string())
            }
            Self::Multipart(err) => {
                tracing::warn!(error = %err, "malformed multipart form");
                (err.status(), err.body_text())
            }
            Self::Admin(err @ AdminError::Remote(_)) => {
                tracing::error!(error = ?err, "workshop API error");
                (StatusCode::BAD_GATEWAY, "workshop API error".to_string())
            }
            Self::Admin(err @ (AdminError::Export(_) | AdminError::Session(_))) => {
                tracing::error!(error = ?err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let page = ErrorTemplate {
            status: status.to_string(),
            message,
        };
        (status, Html(page.to_string())).into_response()
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: String,
    message: String,
}
