//! Structured import-summary model.
//!
//! The "smart import" feature reports its outcome as counts plus a list of
//! row errors. This model formats that outcome into the line sequence
//! rendered on the receipt, so callers holding structured results (or their
//! JSON) never hand-assemble the summary string.

use crate::error::Result;
use crate::writer::build_receipt_pdf;
use serde::{Deserialize, Serialize};

/// Outcome of one import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Name of the imported file or source
    pub source: String,
    /// Rows seen in the source
    pub total: u32,
    /// Rows that created a new record
    pub created: u32,
    /// Rows that updated an existing record
    pub updated: u32,
    /// Row-level error messages, in source order
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ImportSummary {
    /// Parse a summary from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Format the summary as the ordered receipt lines.
    ///
    /// The output is deterministic and carries no timestamps, so the
    /// rendered receipt for a given summary value is byte-stable.
    pub fn to_report_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Import summary: {}", self.source),
            String::new(),
            format!("Total rows: {}", self.total),
            format!("Created: {}", self.created),
            format!("Updated: {}", self.updated),
            format!("Errors: {}", self.errors.len()),
        ];
        for (i, error) in self.errors.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, error));
        }
        lines
    }

    /// Format the summary as the multi-line receipt text.
    pub fn to_report_text(&self) -> String {
        self.to_report_lines().join("\n")
    }

    /// Render the summary as a single-page PDF receipt.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        build_receipt_pdf(&self.to_report_text())
    }
}
