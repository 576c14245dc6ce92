//! Render plain text into a minimal, valid PDF document and read such
//! documents back.
//!
//! ```
//! let pdf = textbrick::encode_text("Hello (world)\nSecond line");
//! assert!(pdf.starts_with(b"%PDF-1.4\n"));
//!
//! let doc = textbrick::read(&pdf).unwrap();
//! assert_eq!(doc.page_count(), Ok(1));
//! ```

use std::{fs::File, io::Read};

pub use error::TbError;
pub use layout::{ConfigError, Layout};
use parse::{parse_complete, span};
use pdf::{document, RawDocument};
pub use simple_encode::SimpleEncoder;
pub use text::{Line, Notice, Page};
use writer::Encoder;

mod error;
pub mod file_name;
pub mod layout;
pub mod parse;
pub mod pdf;
pub mod simple_encode;
pub mod text;
pub mod writer;

/// A rendered document together with what was found on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub line_count: usize,
    pub notices: Vec<Notice>,
}

/// Serialize `pages` into a complete document.
///
/// An empty slice produces one blank page.
pub fn encode(pages: &[Page], layout: &Layout) -> Vec<u8> {
    let section = document::build(pages, layout);
    let mut out = Vec::new();
    SimpleEncoder::write_to(&section, &mut out);
    log::debug!("encoded {} objects into {} bytes", section.objects().len(), out.len());
    out
}

/// Render `text` with the default layout.
pub fn encode_text(text: &str) -> Vec<u8> {
    let laid_out = text::lay_out(text, &Layout::default());
    encode(&laid_out.pages, &Layout::default())
}

/// Render `text` with `layout`, after checking that `layout` is usable.
pub fn encode_text_with(text: &str, layout: &Layout) -> Result<Encoded, TbError> {
    layout.validate()?;

    let laid_out = text::lay_out(text, layout);
    let bytes = encode(&laid_out.pages, layout);

    Ok(Encoded {
        bytes,
        page_count: laid_out.pages.len(),
        line_count: laid_out.line_count,
        notices: laid_out.notices,
    })
}

/// Parse a document from its bytes.
pub fn read(bytes: &[u8]) -> Result<RawDocument, TbError> {
    let (_, pdf) = parse_complete(span(bytes))?;
    Ok(pdf)
}

/// Read a PDF file and return the parsed document.
pub fn read_file(file_path: &std::path::Path) -> Result<RawDocument, TbError> {
    let mut input_file = File::open(file_path)?;
    let mut buf = Vec::new();
    input_file.read_to_end(&mut buf)?;

    read(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::{document::ObjectNumbering, PdfString};

    fn read_back(bytes: &[u8]) -> RawDocument {
        match read(bytes) {
            Ok(doc) => doc,
            Err(e) => panic!("produced document can't be read: {}", e),
        }
    }

    fn shown(doc: &RawDocument, page: usize) -> Vec<String> {
        doc.page_text(page)
            .expect("page text")
            .iter()
            .map(|s| String::from_utf8_lossy(s).into_owned())
            .collect()
    }

    fn numbered_lines(count: usize) -> String {
        (0..count).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn starts_with_header() {
        for text in ["", "a", "Hello (world)", "\u{1F600}"] {
            let bytes = encode_text(text);
            assert!(bytes.starts_with(b"%PDF-1.4\n"));
            assert!(bytes.ends_with(b"%%EOF\n"));
        }
    }

    #[test]
    fn page_count_follows_line_count() {
        for (lines, pages) in [(1, 1), (52, 1), (53, 2), (104, 2), (105, 3)] {
            let encoded = encode_text_with(&numbered_lines(lines), &Layout::default()).expect("valid layout");
            assert_eq!(encoded.line_count, lines);
            assert_eq!(encoded.page_count, pages);

            let doc = read_back(&encoded.bytes);
            assert_eq!(doc.page_count(), Ok(pages));
            assert_eq!(doc.xref().len(), 3 + 2 * pages + 1);
        }
    }

    #[test]
    fn blank_input_renders_one_empty_line() {
        for text in ["", "  ", "\n\n \t\r\n"] {
            let encoded = encode_text_with(text, &Layout::default()).expect("valid layout");
            assert_eq!(encoded.page_count, 1);
            assert_eq!(encoded.notices, vec![Notice::DegenerateInputPage]);

            let doc = read_back(&encoded.bytes);
            assert_eq!(doc.page_count(), Ok(1));
            assert_eq!(shown(&doc, 0), vec![String::new()]);
        }
    }

    #[test]
    fn xref_offsets_point_to_objects() {
        let bytes = encode_text(&numbered_lines(150));
        let doc = read_back(&bytes);
        assert_eq!(doc.object_count(), 3 + 2 * 3);

        for entry in doc.xref().used_objects() {
            let marker = format!("{} 0 obj", entry.number);
            assert!(bytes[entry.byte_offset..].starts_with(marker.as_bytes()));
        }
        assert!(bytes[doc.startxref()..].starts_with(b"xref\n0 10\n"));
    }

    #[test]
    fn hello_world_scenario() {
        let encoded = encode_text_with("Hello (world)\nSecond line", &Layout::default()).expect("valid layout");
        assert_eq!(encoded.page_count, 1);
        assert_eq!(encoded.line_count, 2);
        assert!(encoded.notices.is_empty());

        let doc = read_back(&encoded.bytes);
        // catalog, page tree, font, one page, one content stream and the
        // free head
        assert_eq!(doc.xref().len(), 6);
        assert_eq!(doc.xref().used_objects().count(), 5);
        assert_eq!(doc.trailer().size, 6);

        let numbering = ObjectNumbering::new(1);
        let content = doc
            .object(numbering.content(0))
            .and_then(|o| o.object().stream())
            .expect("content stream");
        let content = String::from_utf8_lossy(&content.data);
        assert!(content.contains("(Hello \\(world\\)) Tj\n"));
        assert!(content.contains("T* (Second line) Tj\n"));

        assert_eq!(shown(&doc, 0), vec!["Hello (world)", "Second line"]);
    }

    #[test]
    fn escaped_lines_read_back_unchanged() {
        let line = r"C:\temp\(draft) ((nested)) \ end";
        let bytes = encode_text(line);
        assert!(String::from_utf8_lossy(&bytes).contains(r"(C:\\temp\\\(draft\) \(\(nested\)\) \\ end) Tj"));

        let doc = read_back(&bytes);
        assert_eq!(doc.page_text(0), Ok(vec![PdfString::from(line)]));
    }

    #[test]
    fn non_ascii_is_replaced() {
        let bytes = encode_text("Caf\u{e9} \u{1F389} na\u{ef}ve\ttab");
        let doc = read_back(&bytes);
        assert_eq!(shown(&doc, 0), vec!["Caf? ? na?ve?tab"]);

        let numbering = ObjectNumbering::new(1);
        let content = doc
            .object(numbering.content(0))
            .and_then(|o| o.object().stream())
            .expect("content stream");
        assert!(content
            .data
            .iter()
            .all(|&b| b == b'\n' || (0x20..=0x7e).contains(&b)));
    }

    #[test]
    fn output_is_deterministic() {
        let text = "lorem ".repeat(600);
        assert_eq!(encode_text(&text), encode_text(&text));
    }

    #[test]
    fn compressed_document_reads_back() {
        let layout = Layout {
            compress: true,
            ..Layout::default()
        };
        let text = numbered_lines(60);
        let encoded = encode_text_with(&text, &layout).expect("valid layout");
        let plain = encode_text(&text);
        assert!(encoded.bytes.len() < plain.len());

        let doc = read_back(&encoded.bytes);
        assert_eq!(doc.page_count(), Ok(2));
        let expected: Vec<String> = (0..52).map(|i| format!("line {}", i)).collect();
        assert_eq!(shown(&doc, 0), expected);
        assert_eq!(shown(&doc, 1).len(), 8);
    }

    #[test]
    fn invalid_layout_is_rejected() {
        let layout = Layout {
            max_lines_per_page: 0,
            ..Layout::default()
        };
        assert_eq!(
            encode_text_with("text", &layout),
            Err(TbError::Config(ConfigError::ZeroPageLines))
        );
    }

    #[test]
    fn huge_page_limit_is_accepted() {
        let layout = Layout {
            max_lines_per_page: usize::MAX,
            ..Layout::default()
        };
        assert_eq!(layout.validate(), Ok(()));
        let encoded = encode_text_with("one\ntwo", &layout).expect("valid layout");
        assert_eq!(encoded.page_count, 1);
        assert_eq!(encoded.line_count, 2);
    }

    #[test]
    fn deeply_nested_object_is_rejected() {
        let mut bytes = b"%PDF-1.4\n".to_vec();
        let object_offset = bytes.len();
        bytes.extend_from_slice(b"1 0 obj\n");
        bytes.extend_from_slice("[".repeat(200_000).as_bytes());
        bytes.extend_from_slice(b"\nendobj\n");
        let xref_offset = bytes.len();
        bytes.extend_from_slice(
            format!(
                "xref\n0 2\n0000000000 65535 f \n{:010} 00000 n \ntrailer\n<</Size 2 /Root 1 0 R>>\nstartxref\n{}\n%%EOF\n",
                object_offset, xref_offset
            )
            .as_bytes(),
        );

        assert!(matches!(
            read(&bytes),
            Err(TbError::Parse(parse::error::TbParseErrorKind::NestingTooDeep))
        ));
    }

    #[test]
    fn truncated_document_is_rejected() {
        let bytes = encode_text("Hello");
        assert!(read(&bytes[..bytes.len() - 20]).is_err());
        assert!(read(b"not a pdf").is_err());
    }
}
