//! PDF writing module for generating receipt files.
//!
//! ## Architecture
//!
//! ```text
//! summary text
//!     ↓
//! [ContentStreamBuilder] (lines → text operators → stream body bytes)
//!     ↓
//! [PdfWriter] (fixed object graph + xref table + trailer)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## High-level API
//!
//! ```ignore
//! use receipt_pdf::build_receipt_pdf;
//!
//! let bytes = build_receipt_pdf("Total: 5\nErrores: 0")?;
//! ```
//!
//! ## Low-level API
//!
//! ```ignore
//! use receipt_pdf::writer::PdfWriter;
//!
//! let mut writer = PdfWriter::new();
//! writer.page().add_text("Hola", 72.0, 720.0, 12.0).finish();
//! let bytes = writer.finish()?;
//! ```

mod content_stream;
mod object_serializer;
mod pdf_writer;
mod receipt;

pub use content_stream::{escape_text_literal, ContentStreamBuilder, ContentStreamOp};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{
    PageBuilder, PdfWriter, PdfWriterConfig, FONT_RESOURCE, PAGE_HEIGHT, PAGE_WIDTH,
};
pub use receipt::{
    build_receipt_pdf, write_receipt_pdf, FIRST_BASELINE_Y, FONT_SIZE, LEADING, MARGIN_X,
};
