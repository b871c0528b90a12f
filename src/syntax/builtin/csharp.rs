//! C# language definition

use crate::syntax::language::LanguageDescriptor;

/// C# keywords
const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "get", "goto", "if", "implicit", "in", "int", "interface", "internal", "is",
    "lock", "long", "namespace", "new", "null", "object", "operator", "out", "override",
    "partial", "params", "private", "protected", "public", "readonly", "ref", "return",
    "sbyte", "sealed", "set", "short", "sizeof", "stackalloc", "static", "string", "struct",
    "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong", "unchecked",
    "unsafe", "ushort", "using", "value", "var", "virtual", "void", "volatile", "where",
    "while", "yield", "async", "await",
];

/// C# preprocessor directives
const PREPROCESSORS: &[&str] = &[
    "#if", "#else", "#elif", "#endif", "#define", "#undef", "#warning", "#error", "#line",
    "#region", "#endregion", "#pragma", "#nullable",
];

/// C# language descriptor
pub const CSHARP: LanguageDescriptor = LanguageDescriptor {
    name: "C#",
    keywords: KEYWORDS,
    preprocessors: PREPROCESSORS,
    // Verbatim and regular strings, then character literals
    string_pattern: r#"@?""|@?".*?(?!\\)."|''|'.*?(?!\\).'"#,
    comment_pattern: r"/\*.*?\*/|//.*?(?=\r|\n|$)",
    case_sensitive: true,
};
