use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source is empty: {0}")]
    EmptySource(String),
}

/// Source text ready for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub text: String,
    /// Where the text came from, e.g. `file:src/main.rs` or `clipboard`
    pub origin: String,
    /// Language token or file extension used to pick a syntax
    pub language_hint: Option<String>,
}

impl LoadedSource {
    pub fn new(text: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: origin.into(),
            language_hint: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language_hint = Some(language.into());
        self
    }
}

pub mod clipboard;
pub mod file;
