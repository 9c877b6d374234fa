//! Tokenizer and style resolver built on syntect's bundled syntaxes and
//! themes.

use lazy_static::lazy_static;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{ParsingError, ScopeError, SyntaxSet};
use thiserror::Error;

pub mod theme;
pub mod tokenizer;

pub use theme::{Palette, ResolvedStyle, StyleDef, StyleTable};
pub use tokenizer::{find_syntax, CodeHighlighter};

lazy_static! {
    static ref SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
    static ref THEME_SET: ThemeSet = ThemeSet::load_defaults();
}

#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("theme '{name}' not found (available: {})", available.join(", "))]
    ThemeNotFound { name: String, available: Vec<String> },

    #[error("syntax parse error: {0}")]
    Parse(#[from] ParsingError),

    #[error("scope stack error: {0}")]
    Scope(#[from] ScopeError),
}

pub fn syntax_set() -> &'static SyntaxSet {
    &SYNTAX_SET
}

/// Names of all bundled themes, sorted.
pub fn theme_names() -> Vec<String> {
    THEME_SET.themes.keys().cloned().collect()
}

pub fn theme_by_name(name: &str) -> Result<&'static Theme, HighlightError> {
    THEME_SET
        .themes
        .get(name)
        .ok_or_else(|| HighlightError::ThemeNotFound {
            name: name.to_string(),
            available: theme_names(),
        })
}
