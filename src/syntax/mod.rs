//! Syntax highlighting engine
//!
//! This module turns source text into HTML span markup:
//! - Language descriptors and the built-in registry
//! - The pattern builder and token scanner
//! - The markup tokenizer with embedded script/directive delegation
//! - The formatter engine and the highlighter that dispatches to it

mod builtin;
mod formatter;
mod language;
mod manager;
mod markup;
mod pattern;
mod render;
mod tokens;

pub use builtin::{all_languages, CSHARP, JAVASCRIPT, MSH, TSQL, VISUAL_BASIC};
pub use formatter::{Engine, Formatter, MAX_NESTING_DEPTH};
pub use language::{Language, LanguageDescriptor};
pub use manager::Highlighter;
pub use markup::MarkupPattern;
pub use pattern::{
    word_alternation, Boundary, CompiledPattern, Tokens, DEFAULT_BACKTRACK_LIMIT, NEVER_MATCH,
};
pub use render::{decorate, escape};
pub use tokens::{Token, TokenKind};
