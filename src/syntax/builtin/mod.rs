//! Built-in language descriptors
//!
//! Adding a language is a data change: write a descriptor here and map
//! its tags in `Language::from_tag`.

mod csharp;
mod javascript;
mod msh;
mod tsql;
mod visual_basic;

use super::language::LanguageDescriptor;

pub use csharp::CSHARP;
pub use javascript::JAVASCRIPT;
pub use msh::MSH;
pub use tsql::TSQL;
pub use visual_basic::VISUAL_BASIC;

/// Get all built-in code language descriptors
pub fn all_languages() -> [&'static LanguageDescriptor; 5] {
    [&CSHARP, &VISUAL_BASIC, &JAVASCRIPT, &MSH, &TSQL]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let languages = all_languages();
        for (i, a) in languages.iter().enumerate() {
            for b in &languages[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_case_sensitivity() {
        assert!(CSHARP.case_sensitive);
        assert!(JAVASCRIPT.case_sensitive);
        assert!(!VISUAL_BASIC.case_sensitive);
        assert!(!MSH.case_sensitive);
        assert!(!TSQL.case_sensitive);
    }
}
