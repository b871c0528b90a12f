//! Markup tokenizer
//!
//! HTML, XML and ASP-style pages don't fit the four-way scheme: tag
//! syntax and attribute syntax are two separate grammars, and a page can
//! embed script blocks and directive code in other languages. The master
//! pattern has eight classifications, in priority order:
//!
//! 1. script block body, delegated to the script formatter
//! 2. markup comment
//! 3. directive delimiter (`<%@ ... %>`, `<%`, `%>`)
//! 4. directive body, delegated to the host-language formatter
//! 5. tag delimiter (`<`, `</`, `/>`, `>`)
//! 6. tag name
//! 7. attribute region, re-scanned by a second pattern
//! 8. entity reference
//!
//! The engine only supports fixed-width lookbehind, so two of these ride
//! on a neighbour's alternative. The script body alternative also
//! captures its opening tag, which is re-scanned as markup. The
//! attribute region is an optional capture right after the tag name it
//! belongs to; a tag with no closing `>` yields the name alone.

use std::collections::VecDeque;

use fancy_regex::{Captures, Regex};

use super::pattern::{self, Classify, Tokens, DEFAULT_BACKTRACK_LIMIT};
use super::render::HtmlWriter;
use super::tokens::{Token, TokenKind};
use crate::error::{HighlightError, Result};

const SCRIPT: &str =
    r"(?P<script_open><script(?:\s[^>]*)?>)(?P<script>(?:(?!</script>).)+)(?=</script>)";
const COMMENT: &str = r"(?P<comment><!--.*?-->)";
const DIRECTIVE_TAG: &str = r"(?P<directive_tag><%@.*?%>|<%|%>)";
const DIRECTIVE: &str = r"(?P<directive>(?<=<%).*?(?=%>))";
// One delimiter per token, so `><` can't swallow the start of a script tag
const TAG_DELIMITER: &str = r"(?P<delimiter></?!?\??(?!%)|(?<!%)/?>)";
// The attribute region is optional so a tag left open still gets its name
const TAG_NAME: &str =
    r"(?P<tag_name>(?:(?<=<)|(?<=</)|(?<=<!)|(?<=<\?))[\w.:-]+)(?:(?P<attributes>.*?)(?=(?<!%)/?>))?";
const ENTITY: &str = r"(?P<entity>&#?\w+;)";

/// Quoted attribute value (with its `=`) or bare attribute name
const ATTRIBUTE: &str = r#"(?s)(=?".*?"|=?'.*?')|([\w:-]+)"#;

/// The compiled markup master pattern plus the attribute pattern
#[derive(Debug)]
pub struct MarkupPattern {
    regex: Regex,
    attributes: regex::Regex,
    backtrack_limit: usize,
}

impl MarkupPattern {
    /// Compile the markup patterns
    pub fn build() -> Result<Self> {
        Self::with_backtrack_limit(DEFAULT_BACKTRACK_LIMIT)
    }

    /// Compile the markup patterns with a custom backtrack limit
    pub fn with_backtrack_limit(backtrack_limit: usize) -> Result<Self> {
        let source = format!(
            "(?is){SCRIPT}|{COMMENT}|{DIRECTIVE_TAG}|{DIRECTIVE}|{TAG_DELIMITER}|{TAG_NAME}|{ENTITY}"
        );
        let regex = pattern::compile(&source, backtrack_limit)
            .map_err(|e| HighlightError::pattern("markup", e))?;
        let attributes = regex::Regex::new(ATTRIBUTE)?;
        Ok(Self {
            regex,
            attributes,
            backtrack_limit,
        })
    }

    /// Scan markup into classified tokens
    ///
    /// Script and directive bodies come out as `EmbeddedScript` and
    /// `EmbeddedCode`; attribute regions as `AttributeRegion`.
    pub fn tokens<'p, 't>(&'p self, text: &'t str) -> Tokens<'p, 't> {
        Tokens::new(self, &self.regex, self.backtrack_limit, text)
    }

    /// Render an attribute region: values get `kwrd`, names get `attr`
    pub fn render_attributes(&self, writer: &mut HtmlWriter, region: &str) {
        let mut pos = 0;
        for captures in self.attributes.captures_iter(region) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            writer.text(&region[pos..whole.start()]);
            if captures.get(1).is_some() {
                writer.span("kwrd", whole.as_str());
            } else {
                writer.span("attr", whole.as_str());
            }
            pos = whole.end();
        }
        writer.text(&region[pos..]);
    }
}

impl Classify for MarkupPattern {
    fn classify<'t>(&self, matched: &'t str, captures: &Captures<'t>, out: &mut VecDeque<Token<'t>>) {
        let group = |name: &str| captures.name(name).map(|m| m.as_str());

        if let (Some(open), Some(body)) = (group("script_open"), group("script")) {
            out.extend(self.tokens(open));
            out.push_back(Token::new(TokenKind::EmbeddedScript, body));
        } else if group("comment").is_some() {
            out.push_back(Token::new(TokenKind::Comment, matched));
        } else if group("directive_tag").is_some() {
            out.push_back(Token::new(TokenKind::DirectiveDelimiter, matched));
        } else if group("directive").is_some() {
            out.push_back(Token::new(TokenKind::EmbeddedCode, matched));
        } else if group("delimiter").is_some() {
            out.push_back(Token::new(TokenKind::TagDelimiter, matched));
        } else if let Some(name) = group("tag_name") {
            out.push_back(Token::new(TokenKind::TagName, name));
            if let Some(attributes) = group("attributes").filter(|a| !a.is_empty()) {
                out.push_back(Token::new(TokenKind::AttributeRegion, attributes));
            }
        } else if group("entity").is_some() {
            out.push_back(Token::new(TokenKind::Entity, matched));
        } else {
            panic!("markup pattern matched {matched:?} without a classifying group");
        }
    }
}
