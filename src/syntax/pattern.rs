//! Pattern builder and token scanner
//!
//! A language descriptor compiles into one master pattern with exactly
//! four capturing alternatives, in this order:
//!
//! 1. comment
//! 2. string literal
//! 3. preprocessor word
//! 4. keyword
//!
//! The order is the only disambiguation there is. At a given offset the
//! engine tries the alternatives left to right, so a comment wins over
//! string-looking text and a string wins over the keywords inside it.

use std::collections::VecDeque;
use std::sync::OnceLock;

use fancy_regex::{Captures, Regex, RegexBuilder};
use tracing::{debug, warn};

use super::language::LanguageDescriptor;
use super::tokens::{Token, TokenKind};
use crate::error::{HighlightError, Result};

/// Stands in for an empty word list. Keeps group numbering intact and
/// never matches, unlike an empty alternative which matches everywhere.
pub const NEVER_MATCH: &str = "(?!x)x";

/// Backtracking steps a single search may take before it is abandoned
pub const DEFAULT_BACKTRACK_LIMIT: usize = 10_000_000;

/// Compile a master pattern under a backtrack limit
pub(crate) fn compile(
    source: &str,
    backtrack_limit: usize,
) -> std::result::Result<Regex, fancy_regex::Error> {
    RegexBuilder::new(source)
        .backtrack_limit(backtrack_limit)
        .build()
}

/// Boundary assertion wrapped around each listed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Start of text or a non-word character before, a non-word character
    /// or end of text after. Unlike `\b` this lets words start with
    /// punctuation such as `#`, `-` or `@@`.
    Word,
    /// Start of text or whitespace before, whitespace or end of text after
    Whitespace,
}

impl Boundary {
    /// Wrap a single word in this boundary
    pub fn wrap(&self, word: &str) -> String {
        match self {
            Boundary::Word => format!(r"(?<!\w){word}(?!\w)"),
            Boundary::Whitespace => format!(r"(?<!\S){word}(?!\S)"),
        }
    }
}

/// Word forms a descriptor may list: `word`, `-word`, `#word`, `@@word`,
/// compound directives like `#\s*word`, and the `@\w*` variable form.
fn word_form() -> &'static regex::Regex {
    static FORM: OnceLock<regex::Regex> = OnceLock::new();
    FORM.get_or_init(|| {
        regex::Regex::new(r"^(?:\w+|-\w+|#\w+|@@\w+|#(?:\\[sw][*+]?\w+)+|@\\w\*+)$")
            .expect("word form pattern is valid")
    })
}

/// Join a word list into one alternation, each word boundary-wrapped
///
/// An empty list yields `NEVER_MATCH`.
pub fn word_alternation(language: &str, words: &[&str], boundary: Boundary) -> Result<String> {
    if words.is_empty() {
        return Ok(NEVER_MATCH.to_string());
    }

    let mut wrapped = Vec::with_capacity(words.len());
    for word in words {
        if !word_form().is_match(word) {
            return Err(HighlightError::InvalidWord {
                language: language.to_string(),
                word: word.to_string(),
            });
        }
        wrapped.push(boundary.wrap(word));
    }
    Ok(wrapped.join("|"))
}

/// Turns one master-pattern match into tokens
pub(crate) trait Classify {
    /// Push the tokens for `matched` onto `out`. Together they must
    /// cover `matched` exactly.
    fn classify<'t>(&self, matched: &'t str, captures: &Captures<'t>, out: &mut VecDeque<Token<'t>>);
}

/// A descriptor compiled into its four-alternative master pattern
#[derive(Debug)]
pub struct CompiledPattern {
    name: &'static str,
    regex: Regex,
    backtrack_limit: usize,
}

impl CompiledPattern {
    pub const COMMENT: usize = 1;
    pub const STRING: usize = 2;
    pub const PREPROCESSOR: usize = 3;
    pub const KEYWORD: usize = 4;

    /// Build the master pattern for a descriptor
    ///
    /// Comment and string fragments must only use non-capturing groups;
    /// a fragment that adds groups is rejected.
    pub fn build(descriptor: &LanguageDescriptor) -> Result<Self> {
        Self::with_backtrack_limit(descriptor, DEFAULT_BACKTRACK_LIMIT)
    }

    /// Build the master pattern with a custom backtrack limit
    pub fn with_backtrack_limit(
        descriptor: &LanguageDescriptor,
        backtrack_limit: usize,
    ) -> Result<Self> {
        let keywords = word_alternation(descriptor.name, descriptor.keywords, Boundary::Word)?;
        let preprocessors = word_alternation(
            descriptor.name,
            descriptor.preprocessors,
            Boundary::Whitespace,
        )?;

        let flags = if descriptor.case_sensitive { "(?s)" } else { "(?si)" };
        let source = format!(
            "{flags}({})|({})|({})|({})",
            descriptor.comment_pattern, descriptor.string_pattern, preprocessors, keywords
        );

        let regex = compile(&source, backtrack_limit)
            .map_err(|e| HighlightError::pattern(descriptor.name, e))?;
        // Group 0 plus the four alternatives
        if regex.captures_len() != 5 {
            return Err(HighlightError::GroupCount {
                language: descriptor.name.to_string(),
                found: regex.captures_len().saturating_sub(1),
                expected: 4,
            });
        }

        debug!(language = descriptor.name, len = source.len(), "compiled master pattern");
        Ok(Self {
            name: descriptor.name,
            regex,
            backtrack_limit,
        })
    }

    /// Scan text into classified tokens
    pub fn tokens<'p, 't>(&'p self, text: &'t str) -> Tokens<'p, 't> {
        Tokens::new(self, &self.regex, self.backtrack_limit, text)
    }
}

impl Classify for CompiledPattern {
    fn classify<'t>(&self, matched: &'t str, captures: &Captures<'t>, out: &mut VecDeque<Token<'t>>) {
        let kind = if captures.get(Self::COMMENT).is_some() {
            TokenKind::Comment
        } else if captures.get(Self::STRING).is_some() {
            TokenKind::StringLiteral
        } else if captures.get(Self::PREPROCESSOR).is_some() {
            TokenKind::Preprocessor
        } else if captures.get(Self::KEYWORD).is_some() {
            TokenKind::Keyword
        } else {
            panic!(
                "{} master pattern matched {:?} without a classifying group",
                self.name, matched
            );
        };
        out.push_back(Token::new(kind, matched));
    }
}

/// Lazy left-to-right token stream over one text
///
/// Tokens never overlap and cover the whole input; the text between
/// matches comes out as `PlainText`.
///
/// Each search runs under the pattern's backtrack limit, and the engine
/// charges every start position it tries against that one budget. When a
/// search runs out, scanning continues in bounded windows from the same
/// offset until a window yields a match, then goes back to whole-text
/// searches. A construct that spans a window edge may be missed while
/// windowed; the text itself always comes through.
pub struct Tokens<'p, 't> {
    classifier: &'p dyn Classify,
    regex: &'p Regex,
    text: &'t str,
    /// End of the last token handed to the queue
    pos: usize,
    /// Where the next search starts; past `pos` after an empty match
    search_from: usize,
    /// Window length while recovering from an exhausted search
    window: usize,
    windowed: bool,
    queue: VecDeque<Token<'t>>,
    exhausted: bool,
}

/// Outcome of one search step
enum Step<'t> {
    Match(Captures<'t>),
    /// Nothing found before this offset
    Skip(usize),
    /// Try again with a smaller window
    Retry,
}

impl<'p, 't> Tokens<'p, 't> {
    pub(crate) fn new(
        classifier: &'p dyn Classify,
        regex: &'p Regex,
        backtrack_limit: usize,
        text: &'t str,
    ) -> Self {
        Self {
            classifier,
            regex,
            text,
            pos: 0,
            search_from: 0,
            window: scan_window(backtrack_limit),
            windowed: false,
            queue: VecDeque::new(),
            exhausted: false,
        }
    }

    fn step(&mut self) -> Step<'t> {
        if !self.windowed {
            match self.regex.captures_from_pos(self.text, self.search_from) {
                Ok(Some(captures)) => return Step::Match(captures),
                Ok(None) => return Step::Skip(self.text.len()),
                Err(err) => {
                    warn!(
                        error = %err,
                        offset = self.search_from,
                        window = self.window,
                        "search exhausted, scanning in windows"
                    );
                    self.windowed = true;
                }
            }
        }

        let text: &'t str = self.text;
        let end = window_end(text, self.search_from, self.window);
        match self.regex.captures_from_pos(&text[..end], self.search_from) {
            Ok(Some(captures)) => {
                self.windowed = false;
                Step::Match(captures)
            }
            Ok(None) => Step::Skip(end),
            Err(_) if self.window > MIN_SCAN_WINDOW => {
                self.window = (self.window / 2).max(MIN_SCAN_WINDOW);
                Step::Retry
            }
            Err(err) => {
                warn!(error = %err, offset = self.search_from, end, "window left as plain text");
                Step::Skip(end)
            }
        }
    }

    /// Queue the text up to `end` as plain text
    fn flush_to(&mut self, end: usize) {
        if end > self.pos {
            self.queue.push_back(Token::plain(&self.text[self.pos..end]));
            self.pos = end;
        }
    }
}

impl<'p, 't> Iterator for Tokens<'p, 't> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Token<'t>> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            if self.exhausted {
                return None;
            }
            if self.search_from >= self.text.len() {
                self.exhausted = true;
                self.flush_to(self.text.len());
                continue;
            }

            match self.step() {
                Step::Match(captures) => {
                    let Some(whole) = captures.get(0) else {
                        self.search_from = self.text.len();
                        continue;
                    };
                    if whole.start() == whole.end() {
                        self.search_from = next_char(self.text, whole.end());
                        continue;
                    }
                    self.flush_to(whole.start());
                    self.classifier
                        .classify(whole.as_str(), &captures, &mut self.queue);
                    self.pos = whole.end();
                    self.search_from = whole.end();
                }
                Step::Skip(end) => {
                    self.search_from = end;
                    if self.windowed {
                        self.flush_to(end);
                    }
                }
                Step::Retry => {}
            }
        }
    }
}

/// Smallest recovery window, in bytes
const MIN_SCAN_WINDOW: usize = 16;

/// Recovery window sized so one windowed search, at up to twice this
/// length, stays inside the backtrack limit with a couple of hundred
/// alternatives tried per offset
fn scan_window(backtrack_limit: usize) -> usize {
    (backtrack_limit / 512).clamp(MIN_SCAN_WINDOW, 64 * 1024)
}

/// End of the recovery window starting at `from`
///
/// Prefers to stop just after a line break within one extra window
/// length; runs to the end of the text when that is close.
fn window_end(text: &str, from: usize, window: usize) -> usize {
    let min = from + window;
    if min >= text.len() {
        return text.len();
    }
    let limit = (min + window).min(text.len());
    match text.as_bytes()[min..limit].iter().position(|&b| b == b'\n') {
        Some(i) => min + i + 1,
        None if limit == text.len() => limit,
        None => {
            let mut end = limit;
            while !text.is_char_boundary(end) {
                end += 1;
            }
            end
        }
    }
}

/// Offset of the character after the one at `at`
fn next_char(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| at + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin;

    fn kinds<'t>(pattern: &CompiledPattern, text: &'t str) -> Vec<(TokenKind, &'t str)> {
        pattern.tokens(text).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_word_alternation() {
        let joined = word_alternation("Test", &["if", "else"], Boundary::Word).unwrap();
        assert_eq!(joined, r"(?<!\w)if(?!\w)|(?<!\w)else(?!\w)");
    }

    #[test]
    fn test_empty_word_list_never_matches() {
        let joined = word_alternation("Test", &[], Boundary::Whitespace).unwrap();
        assert_eq!(joined, NEVER_MATCH);
    }

    #[test]
    fn test_word_forms() {
        for word in ["class", "-eq", "#region", "@@ERROR", r"#\s*include", r"@\w*"] {
            assert!(word_form().is_match(word), "{word} should be accepted");
        }
        for word in ["a|b", "(x)", "", "has space"] {
            assert!(!word_form().is_match(word), "{word} should be rejected");
        }
    }

    #[test]
    fn test_invalid_word_rejected() {
        let descriptor = LanguageDescriptor {
            name: "Broken",
            keywords: &["ok", "no|pe"],
            preprocessors: &[],
            string_pattern: r#"".*?""#,
            comment_pattern: r"//.*?(?=\n|$)",
            case_sensitive: true,
        };
        match CompiledPattern::build(&descriptor) {
            Err(HighlightError::InvalidWord { word, .. }) => assert_eq!(word, "no|pe"),
            other => panic!("expected InvalidWord, got {other:?}"),
        }
    }

    #[test]
    fn test_capturing_fragment_rejected() {
        let descriptor = LanguageDescriptor {
            name: "Groups",
            keywords: &["if"],
            preprocessors: &[],
            string_pattern: r#"(")[^"]*""#,
            comment_pattern: r"//.*?(?=\n|$)",
            case_sensitive: true,
        };
        assert!(matches!(
            CompiledPattern::build(&descriptor),
            Err(HighlightError::GroupCount { found: 5, .. })
        ));
    }

    #[test]
    fn test_all_builtins_compile() {
        for descriptor in builtin::all_languages() {
            let pattern = CompiledPattern::build(descriptor).unwrap();
            assert_eq!(pattern.name, descriptor.name);
        }
    }

    #[test]
    fn test_keyword_boundaries() {
        let pattern = CompiledPattern::build(&builtin::CSHARP).unwrap();
        assert_eq!(
            kinds(&pattern, "class classic"),
            vec![
                (TokenKind::Keyword, "class"),
                (TokenKind::PlainText, " classic"),
            ]
        );
        assert_eq!(kinds(&pattern, "myclass"), vec![(TokenKind::PlainText, "myclass")]);
    }

    #[test]
    fn test_keyword_at_end_of_text() {
        let pattern = CompiledPattern::build(&builtin::CSHARP).unwrap();
        assert_eq!(
            kinds(&pattern, "return"),
            vec![(TokenKind::Keyword, "return")]
        );
    }

    #[test]
    fn test_string_beats_keyword() {
        let pattern = CompiledPattern::build(&builtin::CSHARP).unwrap();
        let text = r#"x = "a keyword like if inside a string";"#;
        assert_eq!(
            kinds(&pattern, text),
            vec![
                (TokenKind::PlainText, "x = "),
                (TokenKind::StringLiteral, r#""a keyword like if inside a string""#),
                (TokenKind::PlainText, ";"),
            ]
        );
    }

    #[test]
    fn test_comment_beats_string() {
        let pattern = CompiledPattern::build(&builtin::CSHARP).unwrap();
        let tokens = kinds(&pattern, "// say \"hi\"\nif");
        assert_eq!(tokens[0], (TokenKind::Comment, "// say \"hi\""));
        assert_eq!(tokens[1], (TokenKind::PlainText, "\n"));
        assert_eq!(tokens[2], (TokenKind::Keyword, "if"));
    }

    #[test]
    fn test_escaped_quote_stays_in_string() {
        let pattern = CompiledPattern::build(&builtin::CSHARP).unwrap();
        let tokens = kinds(&pattern, r#""a\"b" c"#);
        assert_eq!(tokens[0], (TokenKind::StringLiteral, r#""a\"b""#));
    }

    #[test]
    fn test_preprocessor_needs_whitespace_boundary() {
        let pattern = CompiledPattern::build(&builtin::CSHARP).unwrap();
        let tokens = kinds(&pattern, "#region Setup\nx#region");
        assert_eq!(tokens[0], (TokenKind::Preprocessor, "#region"));
        assert_eq!(
            tokens.iter().filter(|(kind, _)| *kind == TokenKind::Preprocessor).count(),
            1
        );
    }

    #[test]
    fn test_punctuated_keywords() {
        let msh = CompiledPattern::build(&builtin::MSH).unwrap();
        let tokens = kinds(&msh, "if ($a -eq $b) { return }");
        assert!(tokens.contains(&(TokenKind::Keyword, "if")));
        assert!(tokens.contains(&(TokenKind::Preprocessor, "-eq")));
        assert!(tokens.contains(&(TokenKind::Keyword, "return")));

        let sql = CompiledPattern::build(&builtin::TSQL).unwrap();
        let tokens = kinds(&sql, "SELECT @@ERROR, @count");
        assert!(tokens.contains(&(TokenKind::Keyword, "@@ERROR")));
        assert!(tokens.contains(&(TokenKind::Keyword, "@count")));
    }

    #[test]
    fn test_case_insensitive_language() {
        let vb = CompiledPattern::build(&builtin::VISUAL_BASIC).unwrap();
        for spelling in ["Dim", "dim", "DIM", "dIm"] {
            assert_eq!(kinds(&vb, spelling), vec![(TokenKind::Keyword, spelling)]);
        }
    }

    #[test]
    fn test_case_sensitive_language() {
        let cs = CompiledPattern::build(&builtin::CSHARP).unwrap();
        assert_eq!(kinds(&cs, "class"), vec![(TokenKind::Keyword, "class")]);
        assert_eq!(kinds(&cs, "Class"), vec![(TokenKind::PlainText, "Class")]);
        assert_eq!(kinds(&cs, "CLASS"), vec![(TokenKind::PlainText, "CLASS")]);
    }

    #[test]
    fn test_tokens_cover_input() {
        let pattern = CompiledPattern::build(&builtin::JAVASCRIPT).unwrap();
        let text = "/* a\n b */ var s = 'x'; // done\nfunction f() { return null; }";
        let joined: String = pattern.tokens(text).map(|t| t.text).collect();
        assert_eq!(joined, text);
    }

    fn long_plain_stretch(lines: usize) -> String {
        "Foo = Bar + Baz;\n".repeat(lines)
    }

    #[test]
    fn test_long_plain_stretch_keeps_highlighting() {
        let pattern = CompiledPattern::build(&builtin::CSHARP).unwrap();
        let text = long_plain_stretch(1000) + "return x;";
        let tokens = kinds(&pattern, &text);
        assert_eq!(
            &tokens[tokens.len() - 2..],
            &[(TokenKind::Keyword, "return"), (TokenKind::PlainText, " x;")]
        );
    }

    #[test]
    fn test_exhausted_search_resumes() {
        let pattern = CompiledPattern::with_backtrack_limit(&builtin::CSHARP, 20_000).unwrap();
        let text = format!(
            "int a;\n{}if (b) c(); // note\n{}return x;",
            long_plain_stretch(500),
            long_plain_stretch(500)
        );
        let tokens = kinds(&pattern, &text);

        let joined: String = tokens.iter().map(|(_, t)| *t).collect();
        assert_eq!(joined, text);
        let classified: Vec<_> = tokens
            .iter()
            .filter(|(kind, _)| *kind != TokenKind::PlainText)
            .copied()
            .collect();
        assert_eq!(
            classified,
            vec![
                (TokenKind::Keyword, "int"),
                (TokenKind::Keyword, "if"),
                (TokenKind::Comment, "// note"),
                (TokenKind::Keyword, "return"),
            ]
        );
    }

    #[test]
    fn test_window_end_prefers_line_breaks() {
        let text = "aaaa\nbbbb\ncccc";
        assert_eq!(window_end(text, 0, 3), 5);
        assert_eq!(window_end(text, 0, 20), text.len());
        assert_eq!(window_end(text, 10, 4), text.len());
        assert_eq!(window_end("aéééééé", 0, 3), 7);
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        let pattern = CompiledPattern::build(&builtin::CSHARP).unwrap();
        assert_eq!(pattern.tokens("").count(), 0);
    }
}
