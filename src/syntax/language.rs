//! Language descriptors and the closed set of supported languages
//!
//! A `LanguageDescriptor` is pure data: word lists plus the comment and
//! string pattern fragments. `Language` maps request tags onto those
//! descriptors (or onto the markup tokenizer).

use super::builtin;

/// Static per-language configuration for the four-way code scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// Language name (e.g., "C#", "JavaScript")
    pub name: &'static str,
    /// Keyword set. Each entry is one of the supported word forms.
    pub keywords: &'static [&'static str],
    /// Preprocessor set, may be empty
    pub preprocessors: &'static [&'static str],
    /// Pattern fragment matching string and character literals
    pub string_pattern: &'static str,
    /// Pattern fragment matching comments
    pub comment_pattern: &'static str,
    /// Whether keyword matching is case sensitive
    pub case_sensitive: bool,
}

/// Languages that can be requested by tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    CSharp,
    VisualBasic,
    JavaScript,
    Msh,
    Tsql,
    Html,
    Xml,
    /// A tag with no registered formatter
    Unsupported(String),
}

impl Language {
    /// Every supported language, in registry order
    pub const SUPPORTED: [Language; 7] = [
        Language::CSharp,
        Language::VisualBasic,
        Language::JavaScript,
        Language::Msh,
        Language::Tsql,
        Language::Html,
        Language::Xml,
    ];

    /// Resolve a request tag such as `c#` or `html`
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        match tag.as_str() {
            "c#" | "cs" | "csharp" => Language::CSharp,
            "vb" | "vbnet" | "vb.net" => Language::VisualBasic,
            "js" | "javascript" => Language::JavaScript,
            "msh" | "ps" | "powershell" => Language::Msh,
            "sql" | "tsql" => Language::Tsql,
            "html" | "htm" | "aspx" => Language::Html,
            "xml" => Language::Xml,
            _ => Language::Unsupported(tag),
        }
    }

    /// Canonical tag for this language
    pub fn tag(&self) -> &str {
        match self {
            Language::CSharp => "c#",
            Language::VisualBasic => "vb",
            Language::JavaScript => "js",
            Language::Msh => "msh",
            Language::Tsql => "sql",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Unsupported(tag) => tag,
        }
    }

    /// Descriptor driving the code scanner, if this is a code language
    pub fn descriptor(&self) -> Option<&'static LanguageDescriptor> {
        match self {
            Language::CSharp => Some(&builtin::CSHARP),
            Language::VisualBasic => Some(&builtin::VISUAL_BASIC),
            Language::JavaScript => Some(&builtin::JAVASCRIPT),
            Language::Msh => Some(&builtin::MSH),
            Language::Tsql => Some(&builtin::TSQL),
            Language::Html | Language::Xml | Language::Unsupported(_) => None,
        }
    }

    /// Check if this language goes through the markup tokenizer
    pub fn is_markup(&self) -> bool {
        matches!(self, Language::Html | Language::Xml)
    }
}
