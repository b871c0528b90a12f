//! Formatter engine
//!
//! Binds a compiled pattern (or the markup tokenizer and its two
//! sub-formatters) to the presentation flags of one request, and turns
//! scanned tokens into HTML.

use tracing::{trace, warn};

use super::markup::MarkupPattern;
use super::pattern::{CompiledPattern, Tokens};
use super::render::{self, HtmlWriter};
use super::tokens::{Token, TokenKind};

/// Deepest sub-formatting level accepted before a region is left plain
pub const MAX_NESTING_DEPTH: usize = 4;

/// What a formatter scans with
#[derive(Debug, Clone, Copy)]
pub enum Engine<'h> {
    /// Four-way code scanner
    Code(&'h CompiledPattern),
    /// Markup tokenizer delegating script and directive bodies
    Markup {
        markup: &'h MarkupPattern,
        script: &'h CompiledPattern,
        directive: &'h CompiledPattern,
    },
}

/// One language bound to the presentation flags of a request
///
/// Holds only references to shared patterns, so it is cheap to build per
/// request.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'h> {
    engine: Engine<'h>,
    line_numbers: bool,
    alternate: bool,
    tab_width: usize,
}

impl<'h> Formatter<'h> {
    /// Create a formatter with decoration off
    pub fn new(engine: Engine<'h>, tab_width: usize) -> Self {
        Self {
            engine,
            line_numbers: false,
            alternate: false,
            tab_width,
        }
    }

    /// Builder: prefix each output line with its number
    pub fn with_line_numbers(mut self, on: bool) -> Self {
        self.line_numbers = on;
        self
    }

    /// Builder: stripe alternate lines
    pub fn with_alternate(mut self, on: bool) -> Self {
        self.alternate = on;
        self
    }

    /// Scan text into top-level tokens without rendering
    pub fn tokens<'t>(&self, text: &'t str) -> Tokens<'h, 't> {
        match self.engine {
            Engine::Code(pattern) => pattern.tokens(text),
            Engine::Markup { markup, .. } => markup.tokens(text),
        }
    }

    /// Format a standalone block of code, decorated for display
    pub fn format_code(&self, text: &str) -> String {
        let body = self.render(text, 0);
        render::decorate(&body, self.line_numbers, self.alternate)
    }

    /// Format a fragment embedded in another formatter's output
    ///
    /// Never decorated: line numbers and striping belong to the
    /// outermost request.
    pub fn format_sub_code(&self, text: &str) -> String {
        self.render(text, 1)
    }

    fn render(&self, text: &str, depth: usize) -> String {
        let mut writer = HtmlWriter::new(text.len(), self.tab_width);
        if depth > MAX_NESTING_DEPTH {
            warn!(depth, "nesting too deep, region left as plain text");
            writer.text(text);
            return writer.finish();
        }

        trace!(depth, len = text.len(), "formatting region");
        for token in self.tokens(text) {
            self.render_token(&mut writer, token, depth);
        }
        writer.finish()
    }

    fn render_token(&self, writer: &mut HtmlWriter, token: Token<'_>, depth: usize) {
        match token.kind {
            TokenKind::PlainText => writer.text(token.text),
            TokenKind::Comment => writer.comment(token.text),
            TokenKind::AttributeRegion => match self.engine {
                Engine::Markup { markup, .. } => markup.render_attributes(writer, token.text),
                Engine::Code(_) => writer.text(token.text),
            },
            TokenKind::EmbeddedScript | TokenKind::EmbeddedCode => match self.engine {
                Engine::Markup {
                    script, directive, ..
                } => {
                    let pattern = if token.kind == TokenKind::EmbeddedScript {
                        script
                    } else {
                        directive
                    };
                    let nested = Formatter::new(Engine::Code(pattern), self.tab_width);
                    writer.raw(&nested.render(token.text, depth + 1));
                }
                Engine::Code(_) => writer.text(token.text),
            },
            kind => match kind.css_class() {
                Some(class) => writer.span(class, token.text),
                None => writer.text(token.text),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin;

    /// Strip tags and undo escaping
    fn strip(html: &str) -> String {
        let tags = regex::Regex::new(r"<[^>]*>").unwrap();
        let text = tags.replace_all(html, "");
        html_escape::decode_html_entities(&text).into_owned()
    }

    fn with_patterns<F: FnOnce(Formatter<'_>, Formatter<'_>)>(f: F) {
        let csharp = CompiledPattern::build(&builtin::CSHARP).unwrap();
        let javascript = CompiledPattern::build(&builtin::JAVASCRIPT).unwrap();
        let markup = MarkupPattern::build().unwrap();
        let code = Formatter::new(Engine::Code(&csharp), 4);
        let html = Formatter::new(
            Engine::Markup {
                markup: &markup,
                script: &javascript,
                directive: &csharp,
            },
            4,
        );
        f(code, html);
    }

    #[test]
    fn test_format_sub_code_spans() {
        with_patterns(|code, _| {
            let html = code.format_sub_code("if (a < b) return \"x\"; // done");
            assert_eq!(
                html,
                "<span class=\"kwrd\">if</span> (a &lt; b) <span class=\"kwrd\">return</span> \
                 <span class=\"str\">\"x\"</span>; <span class=\"rem\">// done</span>"
            );
        });
    }

    #[test]
    fn test_format_code_wraps() {
        with_patterns(|code, _| {
            assert_eq!(
                code.format_code("null"),
                "<pre class=\"csharpcode\"><span class=\"kwrd\">null</span></pre>"
            );
        });
    }

    #[test]
    fn test_empty_body() {
        with_patterns(|code, html| {
            assert_eq!(code.format_sub_code(""), "");
            assert_eq!(html.format_sub_code(""), "");
            assert_eq!(code.format_code(""), "<pre class=\"csharpcode\"></pre>");
        });
    }

    #[test]
    fn test_multiline_comment_spans() {
        with_patterns(|code, _| {
            let html = code.format_sub_code("/* one\n   two\n   three */");
            assert_eq!(html.matches("<span class=\"rem\">").count(), 3);
            assert!(!html.contains("<span class=\"rem\">/* one\n"));
        });
    }

    #[test]
    fn test_sub_code_never_decorated() {
        with_patterns(|code, _| {
            let code = code.with_line_numbers(true).with_alternate(true);
            let html = code.format_sub_code("int a;\nint b;");
            assert!(!html.contains("lnum"));
            assert!(!html.contains("<pre"));
        });
    }

    #[test]
    fn test_line_numbers() {
        with_patterns(|code, _| {
            let html = code.with_line_numbers(true).format_code("int a;\nint b;");
            assert!(html.contains("<span class=\"lnum\">   1:  </span><span class=\"kwrd\">int</span> a;"));
            assert!(html.contains("<span class=\"lnum\">   2:  </span>"));
        });
    }

    #[test]
    fn test_line_numbers_split_multiline_string() {
        with_patterns(|code, _| {
            let html = code.with_line_numbers(true).format_code("var s = @\"a\nb\";");
            assert!(html.contains(
                "<span class=\"kwrd\">var</span> s = <span class=\"str\">@\"a</span></pre>"
            ));
            assert!(html.contains(
                "<span class=\"lnum\">   2:  </span><span class=\"str\">b\"</span>;</pre>"
            ));
        });
    }

    #[test]
    fn test_crlf_comment_roundtrip() {
        with_patterns(|code, _| {
            let source = "/* one\r\n two */\r\nint x;";
            assert_eq!(strip(&code.format_sub_code(source)), source);
        });
    }

    #[test]
    fn test_markup_closing_tag() {
        with_patterns(|_, html| {
            assert_eq!(
                html.format_sub_code("</tag>"),
                "<span class=\"kwrd\">&lt;/</span><span class=\"html\">tag</span><span class=\"kwrd\">&gt;</span>"
            );
        });
    }

    #[test]
    fn test_markup_delegates_script() {
        with_patterns(|_, html| {
            let out = html.format_sub_code("<p class=\"a\">&amp;</p><script>var s = 'if';</script>");
            // markup outside the script block
            assert!(out.contains("<span class=\"html\">p</span>"));
            assert!(out.contains("<span class=\"attr\">class</span><span class=\"kwrd\">=\"a\"</span>"));
            assert!(out.contains("<span class=\"attr\">&amp;amp;</span>"));
            // script body classified as JavaScript, boundary at the tags
            assert!(out.contains(
                "<span class=\"html\">script</span><span class=\"kwrd\">&gt;</span>\
                 <span class=\"kwrd\">var</span> s = <span class=\"str\">'if'</span>;\
                 <span class=\"kwrd\">&lt;/</span>"
            ));
        });
    }

    #[test]
    fn test_markup_delegates_directive() {
        with_patterns(|_, html| {
            let out = html.format_sub_code("<% if (ok) { %>yes<% } %>");
            assert!(out.starts_with(
                "<span class=\"asp\">&lt;%</span> <span class=\"kwrd\">if</span> (ok) { \
                 <span class=\"asp\">%&gt;</span>yes"
            ));
        });
    }

    #[test]
    fn test_roundtrip_text_content() {
        with_patterns(|code, html| {
            let source = "#region X\nusing System;\n/* a\n b */\nclass C { string s = \"<if>\"; } // c & d\n#endregion";
            assert_eq!(strip(&code.format_sub_code(source)), source);
            assert_eq!(strip(&code.format_code(source)), source);

            let page = "<html>\n<!-- c\n d -->\n<body id='x'>a &lt; b &amp; c\n<script>\nvar x = \"</p>\";\n</script>\n<%= Name %>\n</body></html>";
            assert_eq!(strip(&html.format_sub_code(page)), page);
        });
    }

    #[test]
    fn test_nesting_guard() {
        with_patterns(|code, _| {
            assert_eq!(code.render("if <x>", MAX_NESTING_DEPTH + 1), "if &lt;x&gt;");
            assert_eq!(
                code.render("if", MAX_NESTING_DEPTH),
                "<span class=\"kwrd\">if</span>"
            );
        });
    }
}
