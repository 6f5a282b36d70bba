//! High-level receipt export.
//!
//! The one function the export feature needs: a multi-line summary string
//! in, a complete single-page PDF out. Everything upstream of the string
//! (import heuristics, UI, HTTP) stays outside this crate.

use super::pdf_writer::PdfWriter;
use crate::error::Result;
use log::debug;

/// Font size of the receipt text, in points.
pub const FONT_SIZE: f32 = 12.0;
/// Distance between consecutive baselines, in points.
pub const LEADING: f32 = 14.0;
/// Left margin of the text block, in points.
pub const MARGIN_X: f32 = 72.0;
/// Baseline of the first line, in points from the page bottom.
pub const FIRST_BASELINE_Y: f32 = 720.0;

/// Build a single-page PDF receipt from a multi-line summary string.
///
/// Pure function of its input: the same summary always yields a
/// byte-identical document. The caller owns writing the bytes to a file,
/// response, or blob.
pub fn build_receipt_pdf(summary: &str) -> Result<Vec<u8>> {
    debug!("building receipt for {} line(s)", summary.split('\n').count());
    let mut writer = PdfWriter::new();
    {
        let mut page = writer.page();
        page.add_text_block(summary, MARGIN_X, FIRST_BASELINE_Y, FONT_SIZE, LEADING);
        page.finish();
    }
    writer.finish()
}

/// Build a receipt PDF and write it to `path`.
pub fn write_receipt_pdf(path: impl AsRef<std::path::Path>, summary: &str) -> Result<()> {
    let bytes = build_receipt_pdf(summary)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
