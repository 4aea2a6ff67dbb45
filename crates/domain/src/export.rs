//! Export tables — the shapes handed to the document and spreadsheet exporters.
//!
//! Both exports always cover the *entire* loaded collection, never the
//! search-narrowed view.

use std::fmt;

use crate::workshop::Workshop;

/// Title printed above the document table.
pub const DOCUMENT_TITLE: &str = "Workshop Details";

/// Name of the single worksheet in the spreadsheet export.
pub const SHEET_NAME: &str = "Workshops";

/// Column headers of the document export.
pub const DOCUMENT_COLUMNS: [&str; 6] = [
    "Name",
    "Date",
    "Time",
    "Meeting Link",
    "Description",
    "Instructor",
];

/// Column headers of the spreadsheet export (wire field names).
pub const SPREADSHEET_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "date",
    "time",
    "meetingLink",
    "description",
    "instructor",
    "material",
];

/// Download formats offered by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Xlsx,
}

impl ExportFormat {
    /// Deterministic download file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Pdf => "workshops_details.pdf",
            Self::Xlsx => "workshops_details.xlsx",
        }
    }

    /// MIME type of the rendered file.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

/// One exported value. Spreadsheets keep integers numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Integer(i64),
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// A titled table of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    /// Document title or sheet name.
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ExportTable {
    /// Fixed-column report used for the PDF export.
    #[must_use]
    pub fn document(workshops: &[Workshop]) -> Self {
        Self {
            title: DOCUMENT_TITLE.to_string(),
            headers: DOCUMENT_COLUMNS.iter().map(ToString::to_string).collect(),
            rows: workshops
                .iter()
                .map(|ws| {
                    vec![
                        ws.name.clone().into(),
                        ws.date.clone().into(),
                        ws.time.clone().into(),
                        ws.meeting_link.clone().into(),
                        ws.description.clone().into(),
                        ws.instructor.clone().into(),
                    ]
                })
                .collect(),
        }
    }

    /// Every field of every record, used for the spreadsheet export.
    #[must_use]
    pub fn spreadsheet(workshops: &[Workshop]) -> Self {
        Self {
            title: SHEET_NAME.to_string(),
            headers: SPREADSHEET_COLUMNS.iter().map(ToString::to_string).collect(),
            rows: workshops
                .iter()
                .map(|ws| {
                    vec![
                        Cell::Integer(ws.id.get()),
                        ws.name.clone().into(),
                        ws.date.clone().into(),
                        ws.time.clone().into(),
                        ws.meeting_link.clone().into(),
                        ws.description.clone().into(),
                        ws.instructor.clone().into(),
                        ws.material
                            .as_ref()
                            .map(ToString::to_string)
                            .unwrap_or_default()
                            .into(),
                    ]
                })
                .collect(),
        }
    }
}

/// A rendered export ready to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    #[must_use]
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}
