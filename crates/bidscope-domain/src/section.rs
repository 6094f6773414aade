//! Section module - the five headings of the analysis report template

/// A section of the structured analysis report
///
/// The model is asked to answer with exactly these five bolded headings,
/// in this order. The order matters: the fallback pass of the parser looks
/// for each section's body between its marker and the next section's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Brief summary of the project
    Summary,

    /// Bullet list of key requirements
    Requirements,

    /// Bullet list of potential challenges
    Challenges,

    /// GO / NO-GO / UNCERTAIN verdict
    Recommendation,

    /// Explanation of the verdict
    Reasoning,
}

impl Section {
    /// All sections in report order
    pub const ALL: [Section; 5] = [
        Section::Summary,
        Section::Requirements,
        Section::Challenges,
        Section::Recommendation,
        Section::Reasoning,
    ];

    /// Heading title as it appears between the asterisks
    pub fn title(&self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::Requirements => "Key Requirements",
            Section::Challenges => "Potential Challenges",
            Section::Recommendation => "Overall Recommendation",
            Section::Reasoning => "Reasoning for Recommendation",
        }
    }

    /// Exact heading marker, e.g. `**Summary:**`
    ///
    /// Matching against this marker is case-sensitive in the line scan.
    pub fn marker(&self) -> &'static str {
        match self {
            Section::Summary => "**Summary:**",
            Section::Requirements => "**Key Requirements:**",
            Section::Challenges => "**Potential Challenges:**",
            Section::Recommendation => "**Overall Recommendation:**",
            Section::Reasoning => "**Reasoning for Recommendation:**",
        }
    }

    /// Name of the record field this section fills
    pub fn field_name(&self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Requirements => "requirements",
            Section::Challenges => "challenges",
            Section::Recommendation => "recommendation",
            Section::Reasoning => "reasoning",
        }
    }

    /// Position in report order (0-based)
    pub fn index(&self) -> usize {
        match self {
            Section::Summary => 0,
            Section::Requirements => 1,
            Section::Challenges => 2,
            Section::Recommendation => 3,
            Section::Reasoning => 4,
        }
    }

    /// The section that follows this one in the template
    pub fn next(&self) -> Option<Self> {
        match self {
            Section::Summary => Some(Section::Requirements),
            Section::Requirements => Some(Section::Challenges),
            Section::Challenges => Some(Section::Recommendation),
            Section::Recommendation => Some(Section::Reasoning),
            Section::Reasoning => None, // Last section runs to end of text
        }
    }

    /// Find the section whose marker starts the given (already trimmed) line
    pub fn from_heading_line(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| line.starts_with(section.marker()))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        assert_eq!(Section::Summary.next(), Some(Section::Requirements));
        assert_eq!(Section::Challenges.next(), Some(Section::Recommendation));
        assert_eq!(Section::Reasoning.next(), None);

        for (idx, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), idx);
        }
    }

    #[test]
    fn test_marker_format() {
        for section in Section::ALL {
            assert_eq!(section.marker(), format!("**{}:**", section.title()));
        }
    }

    #[test]
    fn test_heading_detection() {
        assert_eq!(
            Section::from_heading_line("**Summary:** short"),
            Some(Section::Summary)
        );
        assert_eq!(
            Section::from_heading_line("**Overall Recommendation:** GO"),
            Some(Section::Recommendation)
        );
        assert_eq!(Section::from_heading_line("Summary: short"), None);
        assert_eq!(Section::from_heading_line("**summary:**"), None);
        assert_eq!(Section::from_heading_line("text **Summary:**"), None);
    }
}
