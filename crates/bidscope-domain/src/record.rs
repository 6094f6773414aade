//! Analysis record module - the parsed result of one analysis

use crate::recommendation::Recommendation;
use crate::section::Section;

/// Sentinel stored in a text field the reply did not provide
pub const NOT_AVAILABLE: &str = "Not available";

/// Structured analysis of a call for tenders
///
/// Every field is always populated. A section the model did not provide
/// holds [`NOT_AVAILABLE`] (or [`Recommendation::Uncertain`]), so rendering
/// never needs to check for absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    /// Brief summary of the project
    pub summary: String,

    /// Key requirements, usually a bullet list
    pub requirements: String,

    /// Potential challenges, usually a bullet list
    pub challenges: String,

    /// Normalized verdict
    pub recommendation: Recommendation,

    /// Explanation of the verdict, or the failure message for a failed analysis
    pub reasoning: String,
}

impl AnalysisRecord {
    /// Record for an analysis that never reached the parser
    ///
    /// All fields are at their defaults and `reasoning` carries the message
    /// so the user sees what went wrong.
    pub fn from_failure(message: impl Into<String>) -> Self {
        Self {
            reasoning: message.into(),
            ..Self::default()
        }
    }

    /// Text of a section's field
    pub fn text(&self, section: Section) -> &str {
        match section {
            Section::Summary => &self.summary,
            Section::Requirements => &self.requirements,
            Section::Challenges => &self.challenges,
            Section::Recommendation => self.recommendation.as_str(),
            Section::Reasoning => &self.reasoning,
        }
    }

    /// Mutable access to a free-text field
    ///
    /// Returns `None` for [`Section::Recommendation`], which is not free text.
    pub fn text_mut(&mut self, section: Section) -> Option<&mut String> {
        match section {
            Section::Summary => Some(&mut self.summary),
            Section::Requirements => Some(&mut self.requirements),
            Section::Challenges => Some(&mut self.challenges),
            Section::Recommendation => None,
            Section::Reasoning => Some(&mut self.reasoning),
        }
    }

    /// Whether a text section still holds the sentinel
    pub fn is_missing(&self, section: Section) -> bool {
        match section {
            Section::Recommendation => false,
            _ => self.text(section) == NOT_AVAILABLE,
        }
    }

    /// True when neither the summary nor the reasoning was found
    ///
    /// This is a heuristic for "the reply had no recognisable structure",
    /// typically because headings were embedded mid-paragraph instead of
    /// starting their own lines. It is best-effort, not a guarantee.
    pub fn lacks_structure(&self) -> bool {
        self.is_missing(Section::Summary) && self.is_missing(Section::Reasoning)
    }
}

impl Default for AnalysisRecord {
    fn default() -> Self {
        Self {
            summary: NOT_AVAILABLE.to_string(),
            requirements: NOT_AVAILABLE.to_string(),
            challenges: NOT_AVAILABLE.to_string(),
            recommendation: Recommendation::Uncertain,
            reasoning: NOT_AVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = AnalysisRecord::default();
        assert_eq!(record.summary, NOT_AVAILABLE);
        assert_eq!(record.requirements, NOT_AVAILABLE);
        assert_eq!(record.challenges, NOT_AVAILABLE);
        assert_eq!(record.recommendation, Recommendation::Uncertain);
        assert_eq!(record.reasoning, NOT_AVAILABLE);
        assert!(record.lacks_structure());
    }

    #[test]
    fn test_failure_record() {
        let record = AnalysisRecord::from_failure("Error: something broke");
        assert_eq!(record.reasoning, "Error: something broke");
        assert_eq!(record.summary, NOT_AVAILABLE);
        assert!(!record.lacks_structure());
    }

    #[test]
    fn test_text_by_section() {
        let record = AnalysisRecord {
            summary: "A bridge".to_string(),
            recommendation: Recommendation::NoGo,
            ..AnalysisRecord::default()
        };
        assert_eq!(record.text(Section::Summary), "A bridge");
        assert_eq!(record.text(Section::Recommendation), "NO-GO");
        assert!(record.is_missing(Section::Challenges));
        assert!(!record.is_missing(Section::Summary));
        assert!(!record.lacks_structure());
    }
}
