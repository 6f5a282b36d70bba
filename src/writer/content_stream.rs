//! PDF content stream builder.
//!
//! Builds the page content stream: the sequence of text operators (`BT`,
//! `Tf`, `TL`, `Td`, `Tj`, `T*`, `ET`) that renders the receipt lines,
//! per ISO 32000-1:2008 section 9.4.

use crate::error::Result;
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(String, f32),
    /// Set text leading (TL)
    SetTextLeading(f32),
    /// Move text position (Td)
    MoveText(f32, f32),
    /// Show text (Tj) - literal string
    ShowText(String),
    /// Move to next line by the current leading (T*)
    NextLine,
    /// Raw operator (for extensibility)
    Raw(String),
}

/// Escape the characters that are structurally reserved inside a PDF
/// literal string: `(`, `)`, and `\`.
///
/// Each reserved character is prefixed with a single backslash; every other
/// character passes through unaltered.
pub fn escape_text_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '(' | ')' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Builder for PDF content streams.
///
/// Operators are accumulated as typed values and serialized in one pass by
/// [`build`](ContentStreamBuilder::build), which applies literal-string
/// escaping to every shown string.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Current font name
    current_font: Option<String>,
    /// Current font size
    current_font_size: f32,
    /// Whether we're in a text object
    in_text_object: bool,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text_object {
            self.op(ContentStreamOp::BeginText);
            self.in_text_object = true;
        }
        self
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text_object {
            self.op(ContentStreamOp::EndText);
            self.in_text_object = false;
        }
        self
    }

    /// Set font for text operations.
    pub fn set_font(&mut self, font_name: &str, size: f32) -> &mut Self {
        if self.current_font.as_deref() != Some(font_name) || self.current_font_size != size {
            self.op(ContentStreamOp::SetFont(font_name.to_string(), size));
            self.current_font = Some(font_name.to_string());
            self.current_font_size = size;
        }
        self
    }

    /// Set the text leading used by `T*`.
    pub fn set_leading(&mut self, leading: f32) -> &mut Self {
        self.op(ContentStreamOp::SetTextLeading(leading))
    }

    /// Move the text position (absolute for the first `Td` after `BT`).
    pub fn move_text(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::MoveText(x, y))
    }

    /// Show a literal text string at the current position.
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.op(ContentStreamOp::ShowText(text.to_string()))
    }

    /// Move to the next line using the current leading.
    pub fn next_line(&mut self) -> &mut Self {
        self.op(ContentStreamOp::NextLine)
    }

    /// Render a multi-line text block.
    ///
    /// Emits `BT`, font selection, leading, and the absolute first-baseline
    /// position, then shows the first line with `Tj` and every subsequent
    /// line as `T*` followed by `Tj`. Empty lines are preserved as empty
    /// `Tj` calls so vertical spacing stays uniform; an empty input emits no
    /// `Tj` at all but still yields a valid text object.
    pub fn text_block(
        &mut self,
        text: &str,
        font_name: &str,
        size: f32,
        leading: f32,
        x: f32,
        y: f32,
    ) -> &mut Self {
        self.begin_text();
        self.set_font(font_name, size);
        self.set_leading(leading);
        self.move_text(x, y);
        if !text.is_empty() {
            for (i, line) in text.split('\n').enumerate() {
                if i > 0 {
                    self.next_line();
                }
                self.show_text(line);
            }
        }
        self
    }

    /// Build the content stream body to bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        for op in &self.operations {
            self.write_op(&mut buf, op)?;
            writeln!(buf)?;
        }

        Ok(buf)
    }

    /// Write a single operation to the buffer.
    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
        match op {
            ContentStreamOp::BeginText => write!(w, "BT"),
            ContentStreamOp::EndText => write!(w, "ET"),
            ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, size),
            ContentStreamOp::SetTextLeading(leading) => write!(w, "{} TL", leading),
            ContentStreamOp::MoveText(tx, ty) => write!(w, "{} {} Td", tx, ty),
            ContentStreamOp::ShowText(text) => {
                write!(w, "({}) Tj", escape_text_literal(text))
            },
            ContentStreamOp::NextLine => write!(w, "T*"),
            ContentStreamOp::Raw(s) => write!(w, "{}", s),
        }
    }
}
