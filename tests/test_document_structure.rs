//! Structural integration tests for the generated PDF.
//!
//! A broken xref offset or stream length never surfaces as an error at
//! build time, only as a file a viewer cannot open. These tests therefore
//! re-scan the produced buffer and check every structural invariant
//! against the bytes themselves.

use receipt_pdf::writer::build_receipt_pdf;
use receipt_pdf::{PdfWriter, PdfWriterConfig};
use regex::bytes::Regex;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pdf(summary: &str) -> Vec<u8> {
    build_receipt_pdf(summary).expect("receipt build failed")
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Parse the byte offset named after `startxref`.
fn startxref_offset(buf: &[u8]) -> usize {
    let marker = b"startxref\n";
    let pos = buf
        .windows(marker.len())
        .rposition(|w| w == marker)
        .expect("no startxref");
    let digits = &buf[pos + marker.len()..];
    let end = digits
        .iter()
        .position(|&b| b == b'\n')
        .expect("unterminated startxref value");
    std::str::from_utf8(&digits[..end])
        .unwrap()
        .parse()
        .expect("startxref value not a number")
}

/// Parse the in-use xref entries: the recorded offset for each object id
/// 1..=N, in order.
fn xref_entries(buf: &[u8]) -> Vec<usize> {
    let xref_start = startxref_offset(buf);
    let section = &buf[xref_start..];
    assert!(section.starts_with(b"xref\n"), "startxref does not point at the xref keyword");

    let mut lines = section.split(|&b| b == b'\n');
    lines.next(); // "xref"
    let range = lines.next().expect("missing subsection range");
    let range = std::str::from_utf8(range).unwrap();
    let size: usize = range.strip_prefix("0 ").expect("subsection must start at 0").parse().unwrap();

    let free = lines.next().expect("missing free entry");
    assert_eq!(free, &b"0000000000 65535 f "[..]);

    (1..size)
        .map(|_| {
            let entry = lines.next().expect("missing xref entry");
            std::str::from_utf8(&entry[..10]).unwrap().parse().unwrap()
        })
        .collect()
}

/// The single most safety-critical invariant: entry *i* of the xref table
/// must equal the byte position where `"<i> 0 obj"` actually begins.
fn assert_offsets_valid(buf: &[u8]) {
    let entries = xref_entries(buf);
    for (i, &offset) in entries.iter().enumerate() {
        let id = i + 1;
        let marker = format!("{} 0 obj", id);
        assert!(
            buf[offset..].starts_with(marker.as_bytes()),
            "xref entry for object {} points at {}, which does not start with '{}'",
            id,
            offset,
            marker
        );
    }

    // The converse: every object marker in the file is accounted for by an
    // xref entry at exactly its position.
    let re = Regex::new(r"(?m)^(\d+) 0 obj").unwrap();
    let mut found: Vec<(usize, usize)> = re
        .captures_iter(buf)
        .map(|c| {
            let m = c.get(0).unwrap();
            let id: usize = std::str::from_utf8(c.get(1).unwrap().as_bytes())
                .unwrap()
                .parse()
                .unwrap();
            (id, m.start())
        })
        .collect();
    found.sort();
    let expected: Vec<(usize, usize)> =
        entries.iter().enumerate().map(|(i, &o)| (i + 1, o)).collect();
    assert_eq!(found, expected, "scanned object markers disagree with xref table");
}

#[test]
fn test_startxref_points_at_xref_keyword() {
    init_logs();
    let buf = pdf("Total: 5\nErrores: 0");
    let offset = startxref_offset(&buf);
    assert_eq!(&buf[offset..offset + 4], b"xref");
}

#[test]
fn test_xref_offsets_match_object_positions() {
    let buf = pdf("Total: 5\nErrores: 0");
    assert_eq!(xref_entries(&buf).len(), 5);
    assert_offsets_valid(&buf);
}

#[test]
fn test_xref_offsets_hold_for_empty_summary() {
    let buf = pdf("");
    assert_offsets_valid(&buf);
}

#[test]
fn test_content_stream_length_matches_body() {
    let buf = pdf("Nota (importante): ok\nTotal: 1");

    let obj_start = find(&buf, b"5 0 obj").expect("content stream object missing");
    let region = &buf[obj_start..];

    let re = Regex::new(r"/Length (\d+)").unwrap();
    let declared: usize = {
        let caps = re.captures(region).expect("no /Length in stream dict");
        std::str::from_utf8(caps.get(1).unwrap().as_bytes()).unwrap().parse().unwrap()
    };

    let body_start = find(region, b"stream\n").expect("no stream keyword") + b"stream\n".len();
    let body_end = find(region, b"\nendstream").expect("no endstream keyword");
    assert_eq!(declared, body_end - body_start, "declared /Length disagrees with stream body");
}

#[test]
fn test_xref_entries_are_fixed_width() {
    let buf = pdf("Total: 5");
    let xref_start = startxref_offset(&buf);
    let trailer = find(&buf[xref_start..], b"trailer").unwrap() + xref_start;
    let section = &buf[xref_start..trailer];

    let entry_re = Regex::new(r"(?m)^\d{10} \d{5} [nf] $").unwrap();
    let entry_count = entry_re.captures_iter(section).count();
    assert_eq!(entry_count, 6, "expected 6 fixed-width entries (free entry + 5 objects)");

    // Each entry is exactly 20 bytes including its end-of-line
    for line in section
        .split(|&b| b == b'\n')
        .filter(|l| l.len() > 2 && l[0].is_ascii_digit() && l.iter().filter(|&&b| b == b' ').count() == 3)
    {
        assert_eq!(line.len() + 1, 20, "xref entry is not 20 bytes: {:?}", line);
    }
}

#[test]
fn test_trailer_names_root_and_size() {
    let buf = pdf("Total: 5");
    let content = String::from_utf8_lossy(&buf);
    assert!(content.contains("trailer"));
    assert!(content.contains("/Root 1 0 R"));
    assert!(content.contains("/Size 6"));
    assert!(content.ends_with("%%EOF"));
}

#[test]
fn test_same_input_yields_identical_bytes() {
    let summary = "Total: 5\nErrores: 0\nNota (final)";
    assert_eq!(pdf(summary), pdf(summary));
}

#[test]
fn test_fifty_lines_keep_offsets_exact() {
    init_logs();
    let summary: String = (1..=50)
        .map(|i| format!("linea {:02}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let buf = pdf(&summary);

    let content = String::from_utf8_lossy(&buf);
    assert_eq!(content.matches(") Tj").count(), 50);
    assert_eq!(content.matches("T*").count(), 49);

    assert_offsets_valid(&buf);
}

#[test]
fn test_metadata_appends_info_object_after_fixed_five() {
    let config = PdfWriterConfig::default()
        .with_title("Import receipt")
        .with_creator("receipt_pdf");
    let mut writer = PdfWriter::with_config(config);
    {
        let mut page = writer.page();
        page.add_text_block("Total: 2", 72.0, 720.0, 12.0, 14.0);
        page.finish();
    }
    let buf = writer.finish().unwrap();

    assert_eq!(xref_entries(&buf).len(), 6);
    assert_offsets_valid(&buf);

    let content = String::from_utf8_lossy(&buf);
    assert!(content.contains("/Size 7"));
    assert!(content.contains("/Info 6 0 R"));
}
