//! Parse the model's reply into an [`AnalysisRecord`]
//!
//! Parsing never fails. Anything the reply does not provide is left at the
//! record's defaults, so a malformed reply degrades to sentinels rather
//! than an error.
//!
//! Two passes run over the reply:
//!
//! 1. A line scan. A line whose trimmed text starts with a heading marker
//!    opens that section; following lines are collected until the next
//!    heading. Markers are matched case-sensitively.
//! 2. A pattern fallback, only when the scan found neither a summary nor a
//!    reasoning. Each section is searched for case-insensitively anywhere in
//!    the text, between its marker and the next one. This is best-effort
//!    and catches replies where the model ran the headings together.

use bidscope_domain::{AnalysisRecord, Recommendation, Section};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;
use tracing::{debug, warn};

/// Replies starting with this are upstream failure messages, not analyses
pub const ERROR_MARKER: &str = "Error";

/// Result of parsing with diagnostics about how the record was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The parsed record
    pub record: AnalysisRecord,

    /// Sections the line scan recognised, in report order
    pub sections_found: Vec<Section>,

    /// Whether the pattern fallback ran
    pub used_fallback: bool,
}

/// Parse a reply with the default settings (fallback enabled)
pub fn parse_llm_response(raw: &str) -> AnalysisRecord {
    parse_with_diagnostics(raw).record
}

/// Parse a reply and report which passes produced it
pub fn parse_with_diagnostics(raw: &str) -> ParseOutcome {
    ResponseParser::default().parse(raw)
}

/// Parse the outcome of a completion call
///
/// A failed call becomes a record whose reasoning carries the error
/// message, exactly as if the message had been the reply.
pub fn parse_llm_outcome<E: Display>(outcome: &Result<String, E>) -> AnalysisRecord {
    match outcome {
        Ok(reply) => parse_llm_response(reply),
        Err(e) => AnalysisRecord::from_failure(e.to_string()),
    }
}

/// Configurable reply parser
#[derive(Debug, Clone, Copy)]
pub struct ResponseParser {
    fallback_enabled: bool,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self {
            fallback_enabled: true,
        }
    }
}

impl ResponseParser {
    /// Create a parser, choosing whether the pattern fallback may run
    pub fn new(fallback_enabled: bool) -> Self {
        Self { fallback_enabled }
    }

    /// Parse a reply
    pub fn parse(&self, raw: &str) -> ParseOutcome {
        if raw.is_empty() || raw.starts_with(ERROR_MARKER) {
            warn!("Reply is empty or an error message, skipping section parsing");
            return ParseOutcome {
                record: AnalysisRecord::from_failure(raw),
                sections_found: Vec::new(),
                used_fallback: false,
            };
        }

        let mut scanner = SectionScanner::default();
        for line in split_lines(raw) {
            scanner.feed(line);
        }
        let captured = scanner.finish();

        let mut record = AnalysisRecord::default();
        let mut sections_found = Vec::new();
        for section in Section::ALL {
            let Some(body) = captured[section.index()].as_deref() else {
                continue;
            };
            sections_found.push(section);
            match record.text_mut(section) {
                Some(field) => *field = body.to_string(),
                None => record.recommendation = Recommendation::classify(body),
            }
        }

        debug!(
            "Line scan found {} of {} sections",
            sections_found.len(),
            Section::ALL.len()
        );

        let used_fallback = self.fallback_enabled && record.lacks_structure();
        if used_fallback {
            debug!("No summary or reasoning found, trying section patterns");
            apply_fallback(raw, &mut record);
        }

        ParseOutcome {
            record,
            sections_found,
            used_fallback,
        }
    }
}

/// Whether `c` ends a line: `\n`, `\r`, vertical tab, form feed, the
/// ASCII group separators, NEL, and the Unicode line/paragraph separators
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split into lines on any line break, treating `\r\n` as one break
///
/// A trailing break does not produce a final empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        let mut end = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Line scanner state
#[derive(Debug, Default)]
enum ScanState {
    /// Before the first heading
    #[default]
    Idle,

    /// Collecting the body of a section
    InSection {
        section: Section,
        buffer: Vec<String>,
    },
}

#[derive(Debug, Default)]
struct SectionScanner {
    state: ScanState,
    captured: [Option<String>; 5],
}

impl SectionScanner {
    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        match Section::from_heading_line(trimmed) {
            Some(section) => {
                self.flush();
                let inline = line.replace(section.marker(), "").trim().to_string();
                self.state = ScanState::InSection {
                    section,
                    buffer: vec![inline],
                };
            }
            None => {
                if let ScanState::InSection { buffer, .. } = &mut self.state {
                    buffer.push(trimmed.to_string());
                }
            }
        }
    }

    fn flush(&mut self) {
        if let ScanState::InSection { section, buffer } = std::mem::take(&mut self.state) {
            // A repeated heading overwrites the earlier body
            self.captured[section.index()] = Some(buffer.join("\n").trim().to_string());
        }
    }

    fn finish(mut self) -> [Option<String>; 5] {
        self.flush();
        self.captured
    }
}

static FALLBACK_PATTERNS: Lazy<Vec<(Section, Regex)>> = Lazy::new(|| {
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let start = regex::escape(section.marker());
            let pattern = match section.next() {
                Some(next) => format!(r"(?is){}(.*?){}", start, regex::escape(next.marker())),
                None => format!(r"(?is){}(.*)", start),
            };
            match Regex::new(&pattern) {
                Ok(regex) => Some((section, regex)),
                Err(e) => {
                    warn!("Skipping fallback pattern for {}: {}", section, e);
                    None
                }
            }
        })
        .collect()
});

/// Overwrite each field whose pattern matches; unmatched fields are kept
fn apply_fallback(raw: &str, record: &mut AnalysisRecord) {
    for (section, pattern) in FALLBACK_PATTERNS.iter() {
        let Some(body) = pattern.captures(raw).and_then(|c| c.get(1)) else {
            continue;
        };
        let body = body.as_str().trim();
        debug!("Fallback matched {}", section);

        match record.text_mut(*section) {
            Some(field) => *field = body.to_string(),
            None => record.recommendation = Recommendation::classify(body),
        }
    }
}
