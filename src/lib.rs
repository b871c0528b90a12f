//! codeformat - regex-driven source highlighting into HTML
//!
//! Source text goes in, an HTML fragment with `str`, `kwrd`, `preproc`,
//! `rem`, `attr` and `html` span classes comes out.
//!
//! ```no_run
//! use codeformat::{HighlightOptions, Highlighter, Language};
//!
//! let highlighter = Highlighter::new()?;
//! let options = HighlightOptions::new(Language::from_tag("c#"), "int x = 1;")
//!     .with_line_numbers(true);
//! let html = highlighter.highlight(&options);
//! # Ok::<(), codeformat::HighlightError>(())
//! ```

pub mod blocks;
pub mod config;
pub mod error;
pub mod options;
pub mod syntax;

pub use blocks::BlockFormatter;
pub use config::{Config, UnknownLanguagePolicy};
pub use error::{HighlightError, Result};
pub use options::HighlightOptions;
pub use syntax::{Formatter, Highlighter, Language, Token, TokenKind};
