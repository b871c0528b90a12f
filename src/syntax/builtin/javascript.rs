//! JavaScript language definition

use crate::syntax::language::LanguageDescriptor;

const KEYWORDS: &[&str] = &[
    "var", "let", "const", "function", "return", "if", "else", "for", "while", "do",
    "switch", "case", "default", "break", "continue", "new", "delete", "typeof",
    "instanceof", "in", "of", "this", "null", "undefined", "true", "false", "try", "catch",
    "finally", "throw", "class", "extends", "super", "import", "export", "void", "with",
    "yield", "async", "await", "debugger",
];

/// JavaScript language descriptor
pub const JAVASCRIPT: LanguageDescriptor = LanguageDescriptor {
    name: "JavaScript",
    keywords: KEYWORDS,
    preprocessors: &[],
    string_pattern: r#"""|".*?(?!\\)."|''|'.*?(?!\\).'"#,
    comment_pattern: r"/\*.*?\*/|//.*?(?=\r|\n|$)",
    case_sensitive: true,
};
