//! DOCX text extraction via the OOXML main document part.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::AppError;

/// Extracts the text of every paragraph in `word/document.xml`, joining
/// paragraphs with a single space.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::DocumentFormat(format!("could not open DOCX archive: {e}")))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| AppError::DocumentFormat(format!("DOCX has no main document part: {e}")))?
        .read_to_string(&mut document_xml)
        .map_err(|e| AppError::DocumentFormat(format!("could not read document part: {e}")))?;

    parse_document_xml(&document_xml)
}

/// Walks the document XML collecting run text (`<w:t>`) per paragraph
/// (`<w:p>`). Empty paragraphs stay in the join, so paragraph ordering is
/// preserved even where they contribute no text.
fn parse_document_xml(xml: &str) -> Result<String, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text_run = true;
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            // Self-closed <w:p/> is an empty paragraph.
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"p" {
                    paragraphs.push(String::new());
                }
            }
            Ok(Event::Text(t)) => {
                if in_text_run {
                    let text = t.unescape().map_err(|e| {
                        AppError::DocumentFormat(format!("invalid text run in DOCX: {e}"))
                    })?;
                    current.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(AppError::DocumentFormat(format!(
                    "could not parse DOCX document XML: {e}"
                )))
            }
        }
    }

    Ok(paragraphs.join(" "))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    /// Builds a minimal in-memory DOCX containing the given document XML.
    fn docx_with_document_xml(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn wrap_body(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body}</w:body></w:document>"#
        )
    }

    #[test]
    fn test_paragraphs_joined_with_single_space() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>React developer</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Redux experience</w:t></w:r></w:p>",
        );
        let bytes = docx_with_document_xml(&xml);
        assert_eq!(
            extract_text(&bytes).unwrap(),
            "React developer Redux experience"
        );
    }

    #[test]
    fn test_multiple_runs_concatenated_within_paragraph() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>SQL </w:t></w:r><w:r><w:t>Developer</w:t></w:r></w:p>",
        );
        let bytes = docx_with_document_xml(&xml);
        assert_eq!(extract_text(&bytes).unwrap(), "SQL Developer");
    }

    #[test]
    fn test_empty_paragraphs_preserve_ordering() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>first</w:t></w:r></w:p>\
             <w:p/>\
             <w:p><w:r><w:t>last</w:t></w:r></w:p>",
        );
        let bytes = docx_with_document_xml(&xml);
        // The empty middle paragraph contributes only its separator.
        assert_eq!(extract_text(&bytes).unwrap(), "first  last");
    }

    #[test]
    fn test_document_with_no_text_is_empty_not_an_error() {
        let xml = wrap_body("<w:p/>");
        let bytes = docx_with_document_xml(&xml);
        assert_eq!(extract_text(&bytes).unwrap(), "");
    }

    #[test]
    fn test_entities_unescaped() {
        let xml = wrap_body("<w:p><w:r><w:t>C&amp;I analyst</w:t></w:r></w:p>");
        let bytes = docx_with_document_xml(&xml);
        assert_eq!(extract_text(&bytes).unwrap(), "C&I analyst");
    }

    #[test]
    fn test_non_zip_bytes_are_a_format_error() {
        let result = extract_text(b"plainly not a zip archive");
        assert!(matches!(result, Err(AppError::DocumentFormat(_))));
    }

    #[test]
    fn test_zip_without_document_part_is_a_format_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("unrelated.txt", options).unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let result = extract_text(&bytes);
        assert!(matches!(result, Err(AppError::DocumentFormat(_))));
    }
}
