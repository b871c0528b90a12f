//! Code block extraction
//!
//! Finds `[code:...]...[/code]` regions in rich text, highlights each
//! body and substitutes the result in place. The begin marker carries the
//! request options:
//!
//! ```text
//! [code:c#;ln=on;alt=off;Example title]
//! int x = 1;
//! [/code]
//! ```
//!
//! Only the language is required. Text whose markers don't pair up is
//! left as it is.

use std::borrow::Cow;

use regex::{Captures, Regex};
use tracing::{trace, warn};

use crate::config::UnknownLanguagePolicy;
use crate::error::Result;
use crate::options::HighlightOptions;
use crate::syntax::{Highlighter, Language};

const BLOCK: &str = r"(?is)(?P<begin>\[code:(?P<lang>[^;\]]*)(?:;ln=(?P<linenumbers>on|off))?(?:;alt=(?P<altlinenumbers>on|off))?(?:;(?P<title>[^\]]*))?\])(?P<code>.*?)(?P<end>\[/code\])";
const SIMPLE_BLOCK: &str = r"(?is)\[code\](?P<inner>.*?)\[/code\]";

/// Rewrites code blocks inside rich text
#[derive(Debug)]
pub struct BlockFormatter<'h> {
    highlighter: &'h Highlighter,
    block: Regex,
    simple: Regex,
}

impl<'h> BlockFormatter<'h> {
    /// Create a block formatter over a highlighter
    pub fn new(highlighter: &'h Highlighter) -> Result<Self> {
        Ok(Self {
            highlighter,
            block: Regex::new(BLOCK)?,
            simple: Regex::new(SIMPLE_BLOCK)?,
        })
    }

    /// Highlight every marked block, reading options from its marker
    pub fn format_text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.block
            .replace_all(text, |caps: &Captures| self.format_block(caps))
    }

    /// Highlight bare `[code]` blocks in the configured simple language
    ///
    /// Empty text gives empty output; text without a closing marker comes
    /// back unchanged.
    pub fn format_text_simple<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if text.is_empty() || !contains_ignore_case(text, "[/code]") {
            return Cow::Borrowed(text);
        }

        let language = Language::from_tag(&self.highlighter.config().simple_language);
        self.simple.replace_all(text, |caps: &Captures| {
            let options = HighlightOptions::new(language.clone(), &caps["inner"]);
            self.resolve(&options, &caps[0])
        })
    }

    fn format_block(&self, caps: &Captures) -> String {
        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

        let options = HighlightOptions::new(Language::from_tag(group("lang")), group("code"))
            .with_line_numbers(group("linenumbers").eq_ignore_ascii_case("on"))
            .with_alternate(group("altlinenumbers").eq_ignore_ascii_case("on"))
            .with_title(group("title").trim());
        trace!(language = options.language.tag(), "code block");
        self.resolve(&options, &caps[0])
    }

    /// Highlight a block, applying the unknown-language policy
    fn resolve(&self, options: &HighlightOptions, original: &str) -> String {
        if let Language::Unsupported(tag) = &options.language {
            warn!(tag = %tag, "no formatter for code block language");
            return match self.highlighter.config().unknown_language {
                UnknownLanguagePolicy::Empty => String::new(),
                UnknownLanguagePolicy::Passthrough => original.to_string(),
            };
        }
        self.highlighter.highlight(options).unwrap_or_default()
    }
}

fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_ascii_lowercase().contains(needle)
}
