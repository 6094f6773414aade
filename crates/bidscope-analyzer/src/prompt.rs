//! Prompt construction for tender analysis

use bidscope_domain::Section;

/// System role message sent with every analysis request
pub const SYSTEM_PROMPT: &str =
    "You are an expert assistant helping to decide whether to respond to a call for tenders.";

const ANALYSIS_INSTRUCTIONS: &str = "\
You are an expert assistant helping to decide whether to respond to a call for tenders.
Based on the following call for tenders text, please provide your analysis in the following structured format:";

/// Placeholder shown under each heading in the template
fn placeholder(section: Section) -> &'static str {
    match section {
        Section::Summary => "\n[Provide a brief summary of the project here]",
        Section::Requirements => "\n- [Requirement 1]\n- [Requirement 2]\n...",
        Section::Challenges => "\n- [Challenge 1]\n- [Challenge 2]\n...",
        Section::Recommendation => " [GO / NO-GO / UNCERTAIN]",
        Section::Reasoning => "\n[Explain your recommendation here]",
    }
}

/// Builds the user prompt for one document
///
/// The headings come from [`Section::marker`], so the template always
/// matches what the parser looks for.
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::with_capacity(self.text.len() + 1024);

        prompt.push('\n');
        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        for section in Section::ALL {
            prompt.push_str(section.marker());
            prompt.push_str(placeholder(section));
            prompt.push_str("\n\n");
        }

        prompt.push_str("Call for Tenders Text:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n");
        prompt.push_str("Analysis:\n");

        prompt
    }
}
