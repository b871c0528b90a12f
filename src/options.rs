//! Per-request highlighting options

use crate::syntax::Language;

/// What to highlight and how to present it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Language selecting the formatter
    pub language: Language,
    /// The code body to highlight
    pub code: String,
    /// Prefix each output line with its number
    pub display_line_numbers: bool,
    /// Stripe alternate lines
    pub alternate_line_numbers: bool,
    /// Caption shown above the block, never tokenized
    pub title: String,
}

impl HighlightOptions {
    /// Create options with decoration off and no title
    pub fn new(language: Language, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
            display_line_numbers: false,
            alternate_line_numbers: false,
            title: String::new(),
        }
    }

    /// Builder: set line numbering
    pub fn with_line_numbers(mut self, on: bool) -> Self {
        self.display_line_numbers = on;
        self
    }

    /// Builder: set alternate-line striping
    pub fn with_alternate(mut self, on: bool) -> Self {
        self.alternate_line_numbers = on;
        self
    }

    /// Builder: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
