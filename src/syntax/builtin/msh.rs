//! MSH (PowerShell) language definition

use crate::syntax::language::LanguageDescriptor;

const KEYWORDS: &[&str] = &[
    "function", "filter", "global", "script", "local", "private", "if", "else", "elseif",
    "for", "foreach", "in", "while", "switch", "continue", "break", "return", "default",
    "param", "begin", "process", "end", "throw", "trap",
];

/// Comparison operators, highlighted through the preprocessor class
const OPERATORS: &[&str] = &[
    "-band", "-bor", "-match", "-notmatch", "-like", "-notlike", "-eq", "-ne", "-gt", "-ge",
    "-lt", "-le", "-is", "-imatch", "-inotmatch", "-ilike", "-inotlike", "-ieq", "-ine",
    "-igt", "-ige", "-ilt", "-ile",
];

/// MSH language descriptor (case insensitive)
pub const MSH: LanguageDescriptor = LanguageDescriptor {
    name: "MSH",
    keywords: KEYWORDS,
    preprocessors: OPERATORS,
    // Backtick escapes the closing quote
    string_pattern: r#"@?(?<!`)".*?(?<!`)"|'.*?'"#,
    comment_pattern: r"#.*?(?=\r|\n|$)",
    case_sensitive: false,
};
