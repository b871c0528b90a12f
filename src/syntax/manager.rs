//! Highlighter: formatter dispatch and the shared pattern cache
//!
//! Every built-in pattern is compiled once when the highlighter is
//! created. Formatters borrow those patterns, so building one per
//! request is cheap and a highlighter can be shared across threads.

use std::collections::HashMap;

use tracing::debug;

use super::builtin;
use super::formatter::{Engine, Formatter};
use super::language::{Language, LanguageDescriptor};
use super::markup::MarkupPattern;
use super::pattern::CompiledPattern;
use super::render;
use crate::config::Config;
use crate::error::Result;
use crate::options::HighlightOptions;

/// Main syntax highlighting manager
#[derive(Debug)]
pub struct Highlighter {
    /// Compiled code patterns, keyed by descriptor name
    patterns: HashMap<&'static str, CompiledPattern>,
    /// Markup tokenizer shared by HTML and XML
    markup: MarkupPattern,
    config: Config,
}

impl Highlighter {
    /// Create a highlighter with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a highlighter, compiling every built-in pattern
    pub fn with_config(config: Config) -> Result<Self> {
        let mut patterns = HashMap::new();
        for descriptor in builtin::all_languages() {
            patterns.insert(
                descriptor.name,
                CompiledPattern::with_backtrack_limit(descriptor, config.backtrack_limit)?,
            );
        }
        let markup = MarkupPattern::with_backtrack_limit(config.backtrack_limit)?;

        debug!(languages = patterns.len(), "highlighter ready");
        Ok(Self {
            patterns,
            markup,
            config,
        })
    }

    /// Settings this highlighter was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the compiled pattern for a descriptor
    pub fn pattern(&self, descriptor: &LanguageDescriptor) -> Option<&CompiledPattern> {
        self.patterns.get(descriptor.name)
    }

    /// Build a formatter for a language
    ///
    /// Returns `None` only for `Language::Unsupported`.
    pub fn formatter(&self, language: &Language) -> Option<Formatter<'_>> {
        let engine = match language {
            Language::Unsupported(_) => return None,
            Language::Html | Language::Xml => Engine::Markup {
                markup: &self.markup,
                script: self.pattern(&builtin::JAVASCRIPT)?,
                directive: self.pattern(&builtin::CSHARP)?,
            },
            code => Engine::Code(self.pattern(code.descriptor()?)?),
        };
        Some(Formatter::new(engine, self.config.tab_width))
    }

    /// Highlight one request: title, then the decorated code block
    ///
    /// Returns `None` when the language has no formatter; what to emit
    /// instead is the caller's decision.
    pub fn highlight(&self, options: &HighlightOptions) -> Option<String> {
        let formatter = self
            .formatter(&options.language)?
            .with_line_numbers(options.display_line_numbers)
            .with_alternate(options.alternate_line_numbers);

        debug!(
            language = options.language.tag(),
            len = options.code.len(),
            "highlighting block"
        );
        let code = formatter.format_code(&options.code);
        if options.title.is_empty() {
            Some(code)
        } else {
            Some(render::title(&options.title) + &code)
        }
    }

    /// List available language names
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.patterns.keys().copied().collect();
        names.push("HTML");
        names.push("XML");
        names.sort();
        names
    }
}
