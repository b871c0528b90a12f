//! Configuration file support
//!
//! Loads settings from ~/.codeformat.toml (or %USERPROFILE%\.codeformat.toml
//! on Windows). A missing file means defaults.
//!
//! Example:
//! ```text
//! # codeformat configuration
//! tab-width = 2
//! unknown-language = "passthrough"
//! simple-language = "c#"
//! backtrack-limit = 10000000
//! ```

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{HighlightError, Result};
use crate::syntax::DEFAULT_BACKTRACK_LIMIT;

/// What a code block with an unsupported language turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownLanguagePolicy {
    /// Drop the block, markers and body, from the output
    #[default]
    Empty,
    /// Leave the whole block, markers included, as it was
    Passthrough,
}

impl UnknownLanguagePolicy {
    /// Parse a policy from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "empty" => Some(UnknownLanguagePolicy::Empty),
            "passthrough" => Some(UnknownLanguagePolicy::Passthrough),
            _ => None,
        }
    }
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Spaces per tab in output, 0 keeps tabs
    pub tab_width: usize,
    /// Output for blocks in an unsupported language
    pub unknown_language: UnknownLanguagePolicy,
    /// Language tag assumed by bare `[code]` blocks
    pub simple_language: String,
    /// Backtracking steps one pattern search may take
    pub backtrack_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 4,
            unknown_language: UnknownLanguagePolicy::Empty,
            simple_language: "c#".to_string(),
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeformat.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeformat.toml"))
        }
    }

    /// Load configuration from the config file, if there is one
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading config");
                Self::parse(&fs::read_to_string(&path)?)
            }
            _ => Ok(Config::default()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table; unknown keys are ignored
    fn apply(&mut self, table: &toml::Table) -> Result<()> {
        if let Some(value) = table.get("tab-width") {
            let width = value
                .as_integer()
                .filter(|n| (0..=16).contains(n))
                .ok_or_else(|| invalid("tab-width", "expected an integer from 0 to 16"))?;
            self.tab_width = width as usize;
        }

        if let Some(value) = table.get("unknown-language") {
            self.unknown_language = value
                .as_str()
                .and_then(UnknownLanguagePolicy::from_name)
                .ok_or_else(|| invalid("unknown-language", "expected \"empty\" or \"passthrough\""))?;
        }

        if let Some(value) = table.get("simple-language") {
            let tag = value
                .as_str()
                .filter(|s| !s.trim().is_empty())
                .ok_or_else(|| invalid("simple-language", "expected a language tag"))?;
            self.simple_language = tag.trim().to_string();
        }

        if let Some(value) = table.get("backtrack-limit") {
            let limit = value
                .as_integer()
                .filter(|n| (10_000..=1_000_000_000).contains(n))
                .ok_or_else(|| {
                    invalid("backtrack-limit", "expected an integer from 10000 to 1000000000")
                })?;
            self.backtrack_limit = limit as usize;
        }

        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> HighlightError {
    HighlightError::InvalidSetting {
        key: key.to_string(),
        message: message.to_string(),
    }
}
