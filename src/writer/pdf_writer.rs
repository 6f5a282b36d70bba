//! PDF document writer.
//!
//! Assembles the complete receipt document: header, the fixed five-object
//! body (catalog, pages, page, font, content stream), cross-reference
//! table, and trailer.

use super::content_stream::ContentStreamBuilder;
use super::object_serializer::ObjectSerializer;
use crate::error::Result;
use crate::object::Object;
use bytes::Bytes;
use log::debug;
use std::collections::HashMap;
use std::io::Write;

/// Page width in points (US Letter).
pub const PAGE_WIDTH: f32 = 612.0;
/// Page height in points (US Letter).
pub const PAGE_HEIGHT: f32 = 792.0;

/// Font resource name used in the page resource dictionary and in `Tf`.
pub const FONT_RESOURCE: &str = "F1";

/// Fixed object ids of the receipt document, catalog first.
const CATALOG_ID: u32 = 1;
const PAGES_ID: u32 = 2;
const PAGE_ID: u32 = 3;
const FONT_ID: u32 = 4;
const CONTENT_ID: u32 = 5;
/// Only present when document metadata is configured.
const INFO_ID: u32 = 6;

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.4")
    pub version: String,
    /// Base font declared by the single font object
    pub base_font: String,
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.4".to_string(),
            base_font: "Courier".to_string(),
            title: None,
            author: None,
            subject: None,
            creator: None,
        }
    }
}

impl PdfWriterConfig {
    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set document subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set creator application.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    fn has_metadata(&self) -> bool {
        self.title.is_some()
            || self.author.is_some()
            || self.subject.is_some()
            || self.creator.is_some()
    }
}

/// The single page being built.
pub struct PageBuilder<'a> {
    writer: &'a mut PdfWriter,
}

impl<'a> PageBuilder<'a> {
    /// Add a single line of text at an absolute position.
    pub fn add_text(&mut self, text: &str, x: f32, y: f32, size: f32) -> &mut Self {
        self.writer
            .content
            .begin_text()
            .set_font(FONT_RESOURCE, size)
            .move_text(x, y)
            .show_text(text);
        self
    }

    /// Add a multi-line text block starting at an absolute first baseline,
    /// advancing by `leading` for each subsequent line.
    pub fn add_text_block(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        leading: f32,
    ) -> &mut Self {
        self.writer
            .content
            .text_block(text, FONT_RESOURCE, size, leading, x, y);
        self
    }

    /// Finish building the page and return to the writer.
    pub fn finish(self) -> &'a mut PdfWriter {
        self.writer.content.end_text();
        self.writer
    }
}

/// PDF document writer for a single-page text document.
///
/// All byte-offset bookkeeping happens in [`finish`](PdfWriter::finish):
/// each object's offset is read from the length of the very buffer being
/// assembled immediately before the object is appended, so no second
/// arithmetic path exists that could drift from the real file layout.
pub struct PdfWriter {
    config: PdfWriterConfig,
    content: ContentStreamBuilder,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            content: ContentStreamBuilder::new(),
        }
    }

    /// Access the page for adding content.
    pub fn page(&mut self) -> PageBuilder<'_> {
        PageBuilder { writer: self }
    }

    /// Build the complete PDF document.
    pub fn finish(self) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::compact();
        let mut output = Vec::new();
        let mut xref_offsets: Vec<(u32, usize)> = Vec::new();

        // PDF header: the version comment line
        writeln!(output, "%PDF-{}", self.config.version)?;

        let body = self.content.build()?;
        debug!("content stream body: {} bytes", body.len());

        let catalog_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(PAGES_ID, 0)),
        ]);

        let pages_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", Object::Array(vec![ObjectSerializer::reference(PAGE_ID, 0)])),
            ("Count", ObjectSerializer::integer(1)),
        ]);

        let page_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Page")),
            ("Parent", ObjectSerializer::reference(PAGES_ID, 0)),
            (
                "MediaBox",
                ObjectSerializer::rect(0.0, 0.0, PAGE_WIDTH as f64, PAGE_HEIGHT as f64),
            ),
            (
                "Resources",
                ObjectSerializer::dict(vec![(
                    "Font",
                    ObjectSerializer::dict(vec![(
                        FONT_RESOURCE,
                        ObjectSerializer::reference(FONT_ID, 0),
                    )]),
                )]),
            ),
            ("Contents", ObjectSerializer::reference(CONTENT_ID, 0)),
        ]);

        let font_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Font")),
            ("Subtype", ObjectSerializer::name("Type1")),
            ("BaseFont", ObjectSerializer::name(&self.config.base_font)),
            ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
        ]);

        let content_obj = Object::Stream {
            dict: HashMap::new(),
            data: Bytes::from(body),
        };

        // Body objects in ascending id order, catalog first
        let mut objects: Vec<(u32, Object)> = vec![
            (CATALOG_ID, catalog_obj),
            (PAGES_ID, pages_obj),
            (PAGE_ID, page_obj),
            (FONT_ID, font_obj),
            (CONTENT_ID, content_obj),
        ];

        let has_info = self.config.has_metadata();
        if has_info {
            let mut info_entries = Vec::new();
            if let Some(title) = &self.config.title {
                info_entries.push(("Title", ObjectSerializer::string(title)));
            }
            if let Some(author) = &self.config.author {
                info_entries.push(("Author", ObjectSerializer::string(author)));
            }
            if let Some(subject) = &self.config.subject {
                info_entries.push(("Subject", ObjectSerializer::string(subject)));
            }
            if let Some(creator) = &self.config.creator {
                info_entries.push(("Creator", ObjectSerializer::string(creator)));
            }
            objects.push((INFO_ID, ObjectSerializer::dict(info_entries)));
        }

        let size = objects.len() as u32 + 1;

        for (id, obj) in &objects {
            let offset = output.len();
            xref_offsets.push((*id, offset));
            output.extend_from_slice(&serializer.serialize_indirect(*id, 0, obj));
            debug!("object {} at byte {}", id, offset);
        }

        // Cross-reference table: one fixed-width 20-byte entry per object,
        // preceded by the sentinel free entry for object 0
        let xref_start = output.len();
        debug!("xref table at byte {}", xref_start);
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", size)?;
        writeln!(output, "0000000000 65535 f ")?;
        for (_, offset) in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let mut trailer_entries = vec![
            ("Size", ObjectSerializer::integer(size as i64)),
            ("Root", ObjectSerializer::reference(CATALOG_ID, 0)),
        ];
        if has_info {
            trailer_entries.push(("Info", ObjectSerializer::reference(INFO_ID, 0)));
        }
        let trailer = ObjectSerializer::dict(trailer_entries);

        writeln!(output, "trailer")?;
        output.extend_from_slice(&serializer.serialize(&trailer));
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        Ok(output)
    }

    /// Save the PDF to a file.
    pub fn save(self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
