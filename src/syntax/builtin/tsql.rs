//! T-SQL language definition

use crate::syntax::language::LanguageDescriptor;

// Global variables come before the `@\w*` local variable form so the
// longer spelling wins at the same offset.
const KEYWORDS: &[&str] = &[
    "@@CONNECTIONS", "@@CPU_BUSY", "@@CURSOR_ROWS", "@@DATEFIRST", "@@ERROR", "@@FETCH_STATUS",
    "@@IDENTITY", "@@LANGID", "@@LANGUAGE", "@@NESTLEVEL", "@@ROWCOUNT", "@@SERVERNAME",
    "@@SPID", "@@TRANCOUNT", "@@VERSION", r"@\w*",
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BEGIN", "BETWEEN", "BIGINT", "BIT",
    "BREAK", "BY", "CASE", "CHAR", "CHECK", "CLOSE", "COLUMN", "COMMIT", "CONSTRAINT",
    "CONTINUE", "CREATE", "CROSS", "CURSOR", "DATETIME", "DEALLOCATE", "DECIMAL", "DECLARE",
    "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXEC", "EXECUTE",
    "EXISTS", "FETCH", "FOR", "FOREIGN", "FROM", "FULL", "FUNCTION", "GO", "GOTO", "GRANT",
    "GROUP", "HAVING", "IF", "IN", "INDEX", "INNER", "INSERT", "INT", "INTO", "IS", "JOIN",
    "KEY", "LEFT", "LIKE", "NEXT", "NOCOUNT", "NOT", "NULL", "NVARCHAR", "OF", "OFF", "ON",
    "OPEN", "OR", "ORDER", "OUTER", "OUTPUT", "PRIMARY", "PRINT", "PROCEDURE", "RAISERROR",
    "REFERENCES", "RETURN", "RETURNS", "REVOKE", "RIGHT", "ROLLBACK", "SELECT", "SET",
    "TABLE", "THEN", "TOP", "TRAN", "TRANSACTION", "TRIGGER", "TRUNCATE", "UNION", "UNIQUE",
    "UPDATE", "VALUES", "VARCHAR", "VIEW", "WHEN", "WHERE", "WHILE", "WITH",
];

/// T-SQL language descriptor (case insensitive, no preprocessor words)
pub const TSQL: LanguageDescriptor = LanguageDescriptor {
    name: "T-SQL",
    keywords: KEYWORDS,
    preprocessors: &[],
    string_pattern: r"N?'(?:''|[^'])*'",
    comment_pattern: r"--.*?(?=\r|\n|$)|/\*.*?\*/",
    case_sensitive: false,
};
