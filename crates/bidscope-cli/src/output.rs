//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use bidscope_analyzer::{AnalysisMetadata, AnalysisReport};
use bidscope_domain::{AnalysisRecord, Recommendation, Section};
use colored::*;
use serde_json::{json, Value};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an analysis record.
    pub fn format_record(&self, record: &AnalysisRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&record_json(record))?),
            OutputFormat::Text => Ok(self.record_text(record)),
        }
    }

    /// Format a full analysis report.
    pub fn format_report(&self, report: &AnalysisReport, show_text: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = json!({
                    "source": report.source.as_ref().map(|p| p.display().to_string()),
                    "analysis": report.record.as_ref().map(record_json),
                    "metadata": metadata_json(&report.metadata),
                });
                if show_text {
                    value["extracted_text"] = Value::String(report.extracted_text.clone());
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Text => {
                let mut out = String::new();
                if show_text {
                    out.push_str(&self.heading("Extracted Text"));
                    out.push('\n');
                    out.push_str(report.extracted_text.trim_end());
                    out.push_str("\n\n");
                }
                match &report.record {
                    Some(record) => out.push_str(&self.record_text(record)),
                    None => out.push_str(&self.warning(
                        "Could not extract text from the document or the document is empty.",
                    )),
                }
                Ok(out)
            }
        }
    }

    /// Format extracted document text.
    pub fn format_extracted(&self, text: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "text": text,
                "length": text.chars().count(),
            }))?),
            OutputFormat::Text => Ok(text.to_string()),
        }
    }

    fn record_text(&self, record: &AnalysisRecord) -> String {
        let mut out = String::new();
        for section in Section::ALL {
            let label = self.heading(label(section));
            match section {
                Section::Recommendation => {
                    out.push_str(&format!("{}: {}\n\n", label, self.badge(&record.recommendation)));
                }
                _ => {
                    out.push_str(&format!("{}:\n{}\n\n", label, record.text(section)));
                }
            }
        }
        out.trim_end().to_string()
    }

    /// Recommendation badge, colored by verdict.
    pub fn badge(&self, recommendation: &Recommendation) -> String {
        let text = recommendation.as_str();
        if !self.color_enabled {
            return text.to_string();
        }

        match recommendation {
            Recommendation::Go => text.green().bold().to_string(),
            Recommendation::NoGo => text.red().bold().to_string(),
            Recommendation::Uncertain => text.yellow().bold().to_string(),
            Recommendation::Other(_) => text.to_string(),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Label shown for a section in text output.
fn label(section: Section) -> &'static str {
    match section {
        Section::Reasoning => "Reasoning",
        _ => section.title(),
    }
}

/// JSON object with the five analysis fields.
pub fn record_json(record: &AnalysisRecord) -> Value {
    let mut object = serde_json::Map::new();
    for section in Section::ALL {
        object.insert(
            section.field_name().to_string(),
            Value::String(record.text(section).to_string()),
        );
    }
    Value::Object(object)
}

fn metadata_json(metadata: &AnalysisMetadata) -> Value {
    json!({
        "model_name": metadata.model_name,
        "timestamp": metadata.timestamp,
        "processing_time_ms": metadata.processing_time_ms,
        "text_length": metadata.text_length,
        "sections_found": metadata
            .sections_found
            .iter()
            .map(|s| s.field_name())
            .collect::<Vec<_>>(),
        "used_fallback": metadata.used_fallback,
    })
}
