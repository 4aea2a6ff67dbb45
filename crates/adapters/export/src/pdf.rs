//! PDF rendering with printpdf.
//!
//! Layout is an A4 landscape page: a bold title near the top-left, then a
//! header row and one row per record. Cell text wraps inside its column and
//! each row is as tall as its tallest cell. Rows continue on new pages, with
//! the header repeated at the top of each.
//!
//! The builtin Helvetica fonts only cover the Windows-1252 character set.
//! Anything outside it is printed as `?`.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use workshop_admin_app::ports::DocumentExporter;
use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::export::{Cell, ExportTable};

use crate::error::ExportError;

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN_LEFT: f32 = 14.0;
const MARGIN_BOTTOM: f32 = 15.0;
const TITLE_FROM_TOP: f32 = 20.0;
const TABLE_FROM_TOP: f32 = 30.0;
const LINE_HEIGHT: f32 = 3.6;
const ROW_GAP: f32 = 2.4;
const COLUMN_GAP: f32 = 2.0;
const TITLE_SIZE: f32 = 16.0;
const CELL_SIZE: f32 = 8.0;
/// Generous average Helvetica glyph advance at `CELL_SIZE`, in mm.
const CHAR_WIDTH: f32 = 1.9;
const UNSUPPORTED: char = '?';
/// Windows-1252 characters outside the Latin-1 block.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";
const LAYER: &str = "Table";

/// Renders export tables as a paginated PDF.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDocumentExporter;

impl PdfDocumentExporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render(table: &ExportTable) -> Result<Vec<u8>, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(&table.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(ExportError::pdf)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(ExportError::pdf)?;

        let columns = Columns::new(table.headers.len());
        let header = columns.wrap_header(&table.headers);
        let header_height = row_height(&header);

        let mut current = doc.get_page(page).get_layer(layer);
        current.use_text(
            encodable(&table.title),
            TITLE_SIZE,
            Mm(MARGIN_LEFT),
            Mm(PAGE_HEIGHT - TITLE_FROM_TOP),
            &bold,
        );

        let mut top = PAGE_HEIGHT - TABLE_FROM_TOP;
        columns.write_row(&current, &header, top, &bold);
        top -= header_height;

        for row in &table.rows {
            let cells = columns.wrap_row(row);
            let height = row_height(&cells);
            if top - height < MARGIN_BOTTOM {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
                current = doc.get_page(page).get_layer(layer);
                top = PAGE_HEIGHT - TITLE_FROM_TOP;
                columns.write_row(&current, &header, top, &bold);
                top -= header_height;
            }
            columns.write_row(&current, &cells, top, &regular);
            top -= height;
        }

        let bytes = doc.save_to_bytes().map_err(ExportError::pdf)?;
        tracing::debug!(rows = table.rows.len(), size = bytes.len(), "rendered pdf");
        Ok(bytes)
    }
}

impl DocumentExporter for PdfDocumentExporter {
    fn render_document(&self, table: &ExportTable) -> Result<Vec<u8>, AdminError> {
        Ok(Self::render(table)?)
    }
}

/// Equal-width columns spanning the printable width.
struct Columns {
    width: f32,
    max_chars: usize,
}

impl Columns {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn new(count: usize) -> Self {
        let printable = PAGE_WIDTH - 2.0 * MARGIN_LEFT;
        let width = printable / count.max(1) as f32;
        let max_chars = ((width - COLUMN_GAP) / CHAR_WIDTH).floor().max(1.0) as usize;
        Self { width, max_chars }
    }

    fn wrap_header(&self, headers: &[String]) -> Vec<Vec<String>> {
        headers.iter().map(|title| wrap(title, self.max_chars)).collect()
    }

    fn wrap_row(&self, cells: &[Cell]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|cell| wrap(&cell.to_string(), self.max_chars))
            .collect()
    }

    /// Print wrapped cells with their first baseline one line below `top`.
    fn write_row(
        &self,
        layer: &PdfLayerReference,
        cells: &[Vec<String>],
        top: f32,
        font: &IndirectFontRef,
    ) {
        let mut x = MARGIN_LEFT;
        for lines in cells {
            for (line, n) in lines.iter().zip(1u16..) {
                let y = top - LINE_HEIGHT * f32::from(n);
                layer.use_text(line.as_str(), CELL_SIZE, Mm(x), Mm(y), font);
            }
            x += self.width;
        }
    }
}

/// Height of a row of wrapped cells.
fn row_height(cells: &[Vec<String>]) -> f32 {
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    let lines = u16::try_from(lines).unwrap_or(u16::MAX);
    LINE_HEIGHT * f32::from(lines) + ROW_GAP
}

/// Map a character onto what the builtin fonts can draw.
fn encodable_char(c: char) -> char {
    match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => c,
        _ if WIN_ANSI_EXTRAS.contains(c) => c,
        _ => UNSUPPORTED,
    }
}

fn encodable(text: &str) -> String {
    text.chars().map(encodable_char).collect()
}

/// Break `text` into lines of at most `max_chars` characters.
///
/// Lines break between words; a word longer than a line is split across
/// lines. Nothing is dropped apart from the whitespace at the breaks.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.lines() {
        let mut line: Vec<char> = Vec::new();
        for word in paragraph.split_whitespace() {
            let word: Vec<char> = word.chars().map(encodable_char).collect();
            if !line.is_empty() && line.len() + 1 + word.len() <= max_chars {
                line.push(' ');
                line.extend(word);
                continue;
            }
            if !line.is_empty() {
                lines.push(line.drain(..).collect());
            }
            let mut chunks = word.chunks(max_chars).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    lines.push(chunk.iter().collect());
                } else {
                    line.extend_from_slice(chunk);
                }
            }
        }
        if !line.is_empty() {
            lines.push(line.into_iter().collect());
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
