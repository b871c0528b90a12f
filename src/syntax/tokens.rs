//! Token types for syntax highlighting
//!
//! This module defines the classifications a scanner can assign to a
//! slice of source text and the CSS class each one renders with.

/// Semantic classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Comments, rendered one span per physical line
    Comment,
    /// String and character literals
    StringLiteral,
    /// Preprocessor directives (#region, -eq)
    Preprocessor,
    /// Language keywords
    Keyword,
    /// Markup tag delimiters (<, </, />, >)
    TagDelimiter,
    /// Template directive delimiters (<%, %>, <%@ ... %>)
    DirectiveDelimiter,
    /// Markup tag names
    TagName,
    /// Everything between a tag name and its closing delimiter
    AttributeRegion,
    /// Character entity references (&amp;)
    Entity,
    /// Body of a script block, delegated to the script formatter
    EmbeddedScript,
    /// Body of a directive block, delegated to the host formatter
    EmbeddedCode,
    /// Unclassified text between matches
    PlainText,
}

impl TokenKind {
    /// CSS class used for a token rendered as a single span
    ///
    /// Kinds that render through another path (plain text, multi-line
    /// comments, attribute regions and embedded code) have no class.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            TokenKind::StringLiteral => Some("str"),
            TokenKind::Preprocessor => Some("preproc"),
            TokenKind::Keyword => Some("kwrd"),
            TokenKind::TagDelimiter => Some("kwrd"),
            TokenKind::DirectiveDelimiter => Some("asp"),
            TokenKind::TagName => Some("html"),
            TokenKind::Entity => Some("attr"),
            TokenKind::Comment
            | TokenKind::AttributeRegion
            | TokenKind::EmbeddedScript
            | TokenKind::EmbeddedCode
            | TokenKind::PlainText => None,
        }
    }
}

/// A classified slice of the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    /// Classification of the slice
    pub kind: TokenKind,
    /// The matched text, borrowed from the input
    pub text: &'t str,
}

impl<'t> Token<'t> {
    /// Create a new token
    pub fn new(kind: TokenKind, text: &'t str) -> Self {
        Self { kind, text }
    }

    /// Create a plain text token
    pub fn plain(text: &'t str) -> Self {
        Self::new(TokenKind::PlainText, text)
    }
}
