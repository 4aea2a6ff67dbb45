//! Spreadsheet rendering with rust_xlsxwriter.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use workshop_admin_app::ports::SpreadsheetExporter;
use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::export::{Cell, ExportTable};

use crate::error::ExportError;

/// Writes a single worksheet named after the table title, with a bold header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSpreadsheetExporter;

impl XlsxSpreadsheetExporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render(table: &ExportTable) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let sheet = workbook.add_worksheet();
        sheet.set_name(&table.title).map_err(ExportError::Xlsx)?;

        for (col, title) in (0u16..).zip(&table.headers) {
            sheet
                .write_string_with_format(0, col, title, &header)
                .map_err(ExportError::Xlsx)?;
        }
        for (row, cells) in (1u32..).zip(&table.rows) {
            for (col, cell) in (0u16..).zip(cells) {
                write_cell(sheet, row, col, cell).map_err(ExportError::Xlsx)?;
            }
        }
        sheet.autofit();

        let bytes = workbook.save_to_buffer().map_err(ExportError::Xlsx)?;
        tracing::debug!(rows = table.rows.len(), size = bytes.len(), "rendered xlsx");
        Ok(bytes)
    }
}

#[allow(clippy::cast_precision_loss)]
fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<(), XlsxError> {
    match cell {
        Cell::Text(text) => sheet.write_string(row, col, text)?,
        Cell::Integer(value) => sheet.write_number(row, col, *value as f64)?,
    };
    Ok(())
}

impl SpreadsheetExporter for XlsxSpreadsheetExporter {
    fn render_spreadsheet(&self, table: &ExportTable) -> Result<Vec<u8>, AdminError> {
        Ok(Self::render(table)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workshop_admin_domain::id::WorkshopId;
    use workshop_admin_domain::workshop::Workshop;

    #[test]
    fn should_render_zip_container() {
        let workshops = vec![
            Workshop::builder(WorkshopId::new(1))
                .name("Intro to Rust")
                .material("intro.pdf")
                .build(),
        ];
        let bytes = XlsxSpreadsheetExporter::new()
            .render_spreadsheet(&ExportTable::spreadsheet(&workshops))
            .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn should_render_header_only_for_empty_collection() {
        let bytes = XlsxSpreadsheetExporter::new()
            .render_spreadsheet(&ExportTable::spreadsheet(&[]))
            .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn should_write_integer_cells_as_numbers() {
        let mut sheet = Worksheet::new();

        write_cell(&mut sheet, 1, 0, &Cell::Integer(7)).unwrap();
        write_cell(&mut sheet, 1, 1, &Cell::Text("Intro".to_string())).unwrap();

        let table = ExportTable::spreadsheet(&[Workshop::builder(WorkshopId::new(7)).build()]);
        assert_eq!(table.rows[0][0], Cell::Integer(7));
        let bytes = XlsxSpreadsheetExporter::new()
            .render_spreadsheet(&table)
            .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn should_fail_on_invalid_sheet_name() {
        let table = ExportTable {
            title: "bad[name]".to_string(),
            headers: vec!["id".to_string()],
            rows: Vec::new(),
        };
        let err = XlsxSpreadsheetExporter::new()
            .render_spreadsheet(&table)
            .unwrap_err();
        assert!(matches!(err, AdminError::Export(_)));
    }
}
