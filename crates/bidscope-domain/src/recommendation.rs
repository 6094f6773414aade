//! Recommendation module - normalization of the model's verdict

/// Captured answers with fewer words than this are kept verbatim when they
/// contain no recognised keyword.
pub const SHORT_ANSWER_WORD_LIMIT: usize = 4;

/// Overall recommendation for a call for tenders
///
/// After normalization the value is one of the three canonical verdicts.
/// A short answer that matches none of them is kept as [`Recommendation::Other`],
/// so presentation code must be prepared to render arbitrary text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Recommendation {
    /// Respond to the call for tenders
    Go,

    /// Do not respond
    NoGo,

    /// Not enough information to decide
    #[default]
    Uncertain,

    /// Short, unclassified answer kept as captured
    Other(String),
}

impl Recommendation {
    /// Get the recommendation as display text
    pub fn as_str(&self) -> &str {
        match self {
            Recommendation::Go => "GO",
            Recommendation::NoGo => "NO-GO",
            Recommendation::Uncertain => "UNCERTAIN",
            Recommendation::Other(text) => text,
        }
    }

    /// Whether this is one of GO / NO-GO / UNCERTAIN
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Recommendation::Other(_))
    }

    /// Classify text by keyword only
    ///
    /// `"GO"` is a substring of `"NO-GO"`, so NO-GO is tested first.
    /// Matching is case-insensitive and substring-based: `"Go for it"` is GO.
    pub fn from_keywords(text: &str) -> Option<Self> {
        let upper = text.to_uppercase();
        if upper.contains("NO-GO") {
            Some(Recommendation::NoGo)
        } else if upper.contains("GO") {
            Some(Recommendation::Go)
        } else if upper.contains("UNCERTAIN") {
            Some(Recommendation::Uncertain)
        } else {
            None
        }
    }

    /// Normalize the text captured under the recommendation heading
    ///
    /// Keyword matches win. Otherwise a non-empty answer of fewer than
    /// [`SHORT_ANSWER_WORD_LIMIT`] words is kept verbatim; anything longer
    /// is treated as noise and becomes UNCERTAIN.
    pub fn classify(captured: &str) -> Self {
        if let Some(recommendation) = Self::from_keywords(captured) {
            return recommendation;
        }

        let captured = captured.trim();
        if !captured.is_empty() && captured.split_whitespace().count() < SHORT_ANSWER_WORD_LIMIT {
            Recommendation::Other(captured.to_string())
        } else {
            Recommendation::Uncertain
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Recommendation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::classify(s))
    }
}
