//! DOCX extraction
//!
//! DOCX files are ZIP archives; the body lives in `word/document.xml`.
//! Only body paragraphs are read. Paragraphs nested in tables or text boxes
//! are skipped.

use crate::error::{ExtractionError, ExtractionResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Path of the main document part inside the archive
const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts paragraph text from DOCX files
pub struct DocxExtractor;

impl DocxExtractor {
    /// Concatenate every body paragraph, each followed by a newline
    pub fn extract(path: &Path) -> ExtractionResult {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| ExtractionError::Docx(format!("{}: {}", DOCUMENT_PART, e)))?
            .read_to_string(&mut xml)?;

        let mut text = String::new();
        for paragraph in body_paragraphs(&xml) {
            text.push_str(&paragraph);
            text.push('\n');
        }
        Ok(text)
    }
}

/// Walk the WordprocessingML markup and collect body paragraph texts
fn body_paragraphs(xml: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut nested_depth = 0usize; // inside w:tbl or w:txbxContent
    let mut in_properties = false; // inside w:pPr (tab stop definitions)
    let mut in_text = false;
    let mut pos = 0;

    while let Some(offset) = xml[pos..].find('<') {
        let lt = pos + offset;

        if in_text && nested_depth == 0 {
            if let Some(paragraph) = current.as_mut() {
                paragraph.push_str(&decode_entities(&xml[pos..lt]));
            }
        }

        let Some(gt_offset) = xml[lt..].find('>') else {
            break;
        };
        let gt = lt + gt_offset;
        let tag = &xml[lt + 1..gt];
        pos = gt + 1;

        let closing = tag.starts_with('/');
        let self_closing = tag.ends_with('/');
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default();

        match name {
            "w:tbl" | "w:txbxContent" => {
                if closing {
                    nested_depth = nested_depth.saturating_sub(1);
                } else if !self_closing {
                    nested_depth += 1;
                }
            }
            "w:p" if nested_depth == 0 => {
                if closing {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                } else if self_closing {
                    paragraphs.push(String::new());
                } else {
                    current = Some(String::new());
                }
            }
            "w:pPr" => {
                in_properties = !closing && !self_closing;
            }
            "w:t" => {
                in_text = !closing && !self_closing;
            }
            "w:tab" | "w:br" | "w:cr" if !closing && !in_properties && nested_depth == 0 => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push(if name == "w:tab" { '\t' } else { '\n' });
                }
            }
            _ => {}
        }
    }

    paragraphs
}

/// Decode the predefined XML entities and numeric character references
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];
        let Some(semi) = after.find(';') else {
            out.push_str(after);
            return out;
        };

        let entity = &after[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                .and_then(char::from_u32),
        };

        match decoded {
            Some(c) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
