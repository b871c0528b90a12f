//! HTML output helpers
//!
//! Escaping, span emission and the line-numbering pass. Source text is
//! escaped here, token by token, so the scanners always see raw text.

use std::borrow::Cow;

/// Class on the outer `<pre>`/`<div>` wrapping a formatted block
pub const CONTAINER_CLASS: &str = "csharpcode";
/// Class on odd lines when alternation is on
pub const ALT_CLASS: &str = "alt";
/// Class on line-number prefixes
pub const LINE_NUMBER_CLASS: &str = "lnum";
/// Class on the block title
pub const TITLE_CLASS: &str = "codetitle";
/// Class on comment lines
pub const COMMENT_CLASS: &str = "rem";

/// Escape `&`, `<` and `>`, expanding tabs when `tab_width` is non-zero
pub fn escape(text: &str, tab_width: usize) -> Cow<'_, str> {
    let escaped = html_escape::encode_text(text);
    if tab_width == 0 || !escaped.contains('\t') {
        return escaped;
    }
    Cow::Owned(escaped.replace('\t', &" ".repeat(tab_width)))
}

/// Accumulates an HTML fragment
#[derive(Debug)]
pub struct HtmlWriter {
    out: String,
    tab_width: usize,
}

impl HtmlWriter {
    /// Create a writer sized for roughly `capacity` bytes of source
    pub fn new(capacity: usize, tab_width: usize) -> Self {
        Self {
            out: String::with_capacity(capacity + capacity / 2),
            tab_width,
        }
    }

    /// Append escaped text
    pub fn text(&mut self, text: &str) {
        self.out.push_str(&escape(text, self.tab_width));
    }

    /// Append already-rendered HTML
    pub fn raw(&mut self, html: &str) {
        self.out.push_str(html);
    }

    /// Append escaped text wrapped in a span
    pub fn span(&mut self, class: &str, text: &str) {
        self.out.push_str("<span class=\"");
        self.out.push_str(class);
        self.out.push_str("\">");
        self.text(text);
        self.out.push_str("</span>");
    }

    /// Append a comment, one span per physical line joined by `\n`
    ///
    /// A `\r` ending a line stays in the output, just outside its span.
    pub fn comment(&mut self, text: &str) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            let (line, cr) = match line.strip_suffix('\r') {
                Some(line) => (line, true),
                None => (line, false),
            };
            if !line.is_empty() {
                self.span(COMMENT_CLASS, line);
            }
            if cr {
                self.out.push('\r');
            }
        }
    }

    /// Take the finished fragment
    pub fn finish(self) -> String {
        self.out
    }
}

/// Wrap a fragment for display, numbering and striping lines if asked
///
/// This only splits the finished fragment on line breaks; it never
/// looks at tokens again. A span still open at a line break is closed
/// there and reopened on the next line, so each `<pre>` is balanced.
pub fn decorate(body: &str, line_numbers: bool, alternate: bool) -> String {
    if !line_numbers && !alternate {
        return format!("<pre class=\"{CONTAINER_CLASS}\">{body}</pre>");
    }

    let mut out = String::with_capacity(body.len() * 2);
    let mut open: Vec<&str> = Vec::new();
    out.push_str(&format!("<div class=\"{CONTAINER_CLASS}\">\n"));
    for (i, line) in body.lines().enumerate() {
        let number = i + 1;
        if alternate && number % 2 == 1 {
            out.push_str(&format!("<pre class=\"{ALT_CLASS}\">"));
        } else {
            out.push_str("<pre>");
        }
        if line_numbers {
            out.push_str(&format!(
                "<span class=\"{LINE_NUMBER_CLASS}\">{number:>4}:  </span>"
            ));
        }
        for tag in &open {
            out.push_str(tag);
        }
        if line.is_empty() {
            out.push_str("&nbsp;");
        } else {
            out.push_str(line);
        }
        track_spans(line, &mut open);
        for _ in &open {
            out.push_str("</span>");
        }
        out.push_str("</pre>\n");
    }
    out.push_str("</div>");
    out
}

/// Update the stack of span opening tags left open after `line`
fn track_spans<'b>(line: &'b str, open: &mut Vec<&'b str>) {
    for (at, _) in line.match_indices('<') {
        let rest = &line[at..];
        if rest.starts_with("</span>") {
            open.pop();
        } else if rest.starts_with("<span") {
            if let Some(end) = rest.find('>') {
                open.push(&rest[..=end]);
            }
        }
    }
}

/// Render a block title
pub fn title(title: &str) -> String {
    format!("<div class=\"{TITLE_CLASS}\">{}</div>", escape(title, 0))
}
