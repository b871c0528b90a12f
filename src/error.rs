//! Error types for codeformat

use thiserror::Error;

/// Result type alias for codeformat operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern for {language} failed to compile: {source}")]
    Pattern {
        language: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Unsupported word form in {language}: {word}")]
    InvalidWord { language: String, word: String },

    #[error("Pattern for {language} has {found} capture groups, expected {expected}")]
    GroupCount {
        language: String,
        found: usize,
        expected: usize,
    },

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid setting {key}: {message}")]
    InvalidSetting { key: String, message: String },
}

impl HighlightError {
    /// Wrap a pattern compile failure for a language
    pub fn pattern(language: &str, source: fancy_regex::Error) -> Self {
        HighlightError::Pattern {
            language: language.to_string(),
            source: Box::new(source),
        }
    }
}
