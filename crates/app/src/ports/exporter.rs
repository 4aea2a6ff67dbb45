//! Export ports — render an [`ExportTable`] into a downloadable file.

use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::export::ExportTable;

/// Renders a titled table into a PDF document.
pub trait DocumentExporter {
    /// # Errors
    ///
    /// Returns [`AdminError::Export`] when the underlying library fails.
    fn render_document(&self, table: &ExportTable) -> Result<Vec<u8>, AdminError>;
}

/// Renders a table into a single-sheet workbook.
pub trait SpreadsheetExporter {
    /// # Errors
    ///
    /// Returns [`AdminError::Export`] when the underlying library fails.
    fn render_spreadsheet(&self, table: &ExportTable) -> Result<Vec<u8>, AdminError>;
}
