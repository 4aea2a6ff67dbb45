//! Export adapter error types.

use workshop_admin_domain::error::{AdminError, BoxError};

/// Errors raised while rendering an export file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to render PDF document")]
    Pdf(#[source] BoxError),

    #[error("failed to render spreadsheet")]
    Xlsx(#[source] rust_xlsxwriter::XlsxError),
}

impl ExportError {
    pub(crate) fn pdf<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Pdf(Box::new(err))
    }
}

impl From<ExportError> for AdminError {
    fn from(err: ExportError) -> Self {
        Self::Export(Box::new(err))
    }
}
