//! Error types for the receipt PDF generator.

/// Result type alias for receipt_pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating a receipt PDF.
///
/// Structural defects (wrong xref offsets, a `/Length` that disagrees with
/// the stream body, broken literal-string escaping) are never surfaced here:
/// they are correctness bugs caught by construction and by the structural
/// tests, not runtime failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (buffer writes, saving to disk)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Import summary could not be parsed from JSON
    #[error("Invalid import summary: {0}")]
    InvalidSummary(#[from] serde_json::Error),
}
