//! # receipt_pdf
//!
//! Minimal single-page PDF generator for import-summary receipts.
//!
//! The crate hand-builds a structurally valid PDF file — object table,
//! content stream, cross-reference table, and trailer — without a PDF
//! library. Its core is a pure value-in/bytes-out function: a multi-line
//! summary string goes in, a complete PDF byte buffer comes out, ready to
//! be saved or served as `application/pdf`.
//!
//! ## Core guarantees
//!
//! - **Offset correctness**: every cross-reference entry equals the exact
//!   byte position of its object, because offsets are read from the buffer
//!   being assembled, never tracked by separate arithmetic.
//! - **Length correctness**: a stream's `/Length` is always derived from
//!   the actual body bytes.
//! - **Escaping**: `(`, `)`, and `\` in shown text are each prefixed with a
//!   single backslash; nothing else is altered.
//! - **Determinism**: the same input yields byte-identical output — no
//!   timestamps, random ids, or nondeterministic ordering.
//!
//! ## Quick start
//!
//! ```ignore
//! use receipt_pdf::build_receipt_pdf;
//!
//! let bytes = build_receipt_pdf("Total: 5\nErrores: 0")?;
//! std::fs::write("resumen.pdf", bytes)?;
//! ```
//!
//! Structured import results can drive the same pipeline:
//!
//! ```ignore
//! use receipt_pdf::ImportSummary;
//!
//! let summary = ImportSummary::from_json(json)?;
//! let bytes = summary.to_pdf()?;
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// PDF object model
pub mod object;

// Import-summary report model
pub mod summary;

// PDF writing
pub mod writer;

// Re-exports
pub use error::{Error, Result};
pub use object::{Object, ObjectRef};
pub use summary::ImportSummary;
pub use writer::{build_receipt_pdf, write_receipt_pdf, PdfWriter, PdfWriterConfig};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
