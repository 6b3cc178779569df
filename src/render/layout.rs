use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use super::metrics;
use super::RenderError;

pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
pub const MARGIN_MM: f64 = 20.0;
pub const GRID_COLS: usize = 12;
pub const FONT_SIZE: f64 = 10.0;
pub const LINE_HEIGHT_MM: f64 = 4.5;

const CONTENT_WIDTH_MM: f64 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
const COL_WIDTH_MM: f64 = CONTENT_WIDTH_MM / GRID_COLS as f64;

// First baseline sits this far below the top edge of a block.
const BASELINE_MM: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Regular,
    Bold,
    BoldItalic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Eager page builder over a 12-column grid.
///
/// Blocks are appended top to bottom; `text` draws relative to the
/// current cursor without moving it, `advance` closes a block by moving
/// the cursor down. The document only materializes as bytes in
/// `finish`, so a failed render never emits partial output.
pub struct DocBuilder {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    bold_italic: IndirectFontRef,
    cursor_mm: f64,
}

impl DocBuilder {
    pub fn new(title: &str) -> Result<Self, RenderError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "Page 1");

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Engine(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Engine(e.to_string()))?;
        let bold_italic = doc
            .add_builtin_font(BuiltinFont::HelveticaBoldOblique)
            .map_err(|e| RenderError::Engine(e.to_string()))?;

        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            bold_italic,
            cursor_mm: MARGIN_MM,
        })
    }

    fn font(&self, style: Style) -> &IndirectFontRef {
        match style {
            Style::Regular => &self.regular,
            Style::Bold => &self.bold,
            Style::BoldItalic => &self.bold_italic,
        }
    }

    fn is_bold(style: Style) -> bool {
        !matches!(style, Style::Regular)
    }

    /// Draw one line of text inside the grid cells [col, col + span),
    /// offset `dy_mm` below the cursor.
    pub fn text(&self, col: usize, span: usize, dy_mm: f64, text: &str, style: Style, align: Align) {
        let left = MARGIN_MM + col as f64 * COL_WIDTH_MM;
        let right = MARGIN_MM + (col + span) as f64 * COL_WIDTH_MM;

        let x = match align {
            Align::Left => left,
            Align::Right => right - metrics::text_width_mm(text, FONT_SIZE, Self::is_bold(style)),
        };

        let baseline_from_top = self.cursor_mm + dy_mm + BASELINE_MM;
        self.layer.use_text(
            text,
            FONT_SIZE as f32,
            Mm(x as f32),
            Mm((PAGE_HEIGHT_MM - baseline_from_top) as f32),
            self.font(style),
        );
    }

    /// Draw a word-wrapped paragraph across the grid cells
    /// [col, col + span), starting at the cursor.
    pub fn paragraph(&self, col: usize, span: usize, text: &str, style: Style) {
        let width = span as f64 * COL_WIDTH_MM;
        let lines = metrics::wrap(text, FONT_SIZE, Self::is_bold(style), width);
        for (i, line) in lines.iter().enumerate() {
            self.text(col, span, i as f64 * LINE_HEIGHT_MM, line, style, Align::Left);
        }
    }

    pub fn advance(&mut self, mm: f64) {
        self.cursor_mm += mm;
    }

    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut bytes: Vec<u8> = Vec::new();
        {
            let mut writer = BufWriter::new(&mut bytes);
            self.doc
                .save(&mut writer)
                .map_err(|e| RenderError::Engine(e.to_string()))?;
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_valid_pdf() {
        let builder = DocBuilder::new("empty").unwrap();
        let bytes = builder.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_text_and_advance_produce_output() {
        let mut builder = DocBuilder::new("sample").unwrap();
        builder.text(0, 6, 0.0, "left", Style::Bold, Align::Left);
        builder.text(6, 6, 0.0, "right", Style::Regular, Align::Right);
        builder.advance(15.0);
        builder.paragraph(0, 12, "a paragraph of text that is long enough to wrap when the grid is narrow", Style::Regular);
        let bytes = builder.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }
}
