//! # workshop-admin-adapter-export
//!
//! File renderers behind the export ports.
//!
//! ## Responsibilities
//! - Implement `DocumentExporter` with [printpdf](https://docs.rs/printpdf)
//! - Implement `SpreadsheetExporter` with [rust_xlsxwriter](https://docs.rs/rust_xlsxwriter)
//!
//! Both renderers work from an `ExportTable` built by the domain, so they know
//! nothing about workshops themselves.

pub mod error;
pub mod pdf;
pub mod xlsx;

pub use error::ExportError;
pub use pdf::PdfDocumentExporter;
pub use xlsx::XlsxSpreadsheetExporter;
