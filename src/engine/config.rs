// Configuration for the wrap engine and the terminal-window renderers.
// Every struct carries the defaults the CLI falls back to.

use super::error::WrapError;

/// Column budget for the line wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct WrapConfig {
    /// Printable chars per row (default 80)
    pub columns: usize,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self { columns: 80 }
    }
}

/// Row windowing and frame layout, applied after wrapping
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Keep only the last N rows (default: all rows)
    pub rows: Option<usize>,

    /// Pad with empty rows up to `rows`
    pub pad_rows: bool,

    /// Blank columns left and right of the code (default 2)
    pub padding: usize,

    /// Text shown in the title bar next to the traffic lights
    pub title: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            rows: None,
            pad_rows: false,
            padding: 2,
            title: None,
        }
    }
}

/// Syntax theme selection
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Name of a bundled syntect theme
    pub name: String,
}

impl ThemeConfig {
    pub const DEFAULT_THEME: &'static str = "base16-ocean.dark";
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_THEME.to_string(),
        }
    }
}

/// Master configuration combining all codevista settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub wrap: WrapConfig,
    pub window: WindowConfig,
    pub theme: ThemeConfig,
}

impl Config {
    /// Reject settings the wrapper cannot work with.
    ///
    /// # Errors
    /// Returns [`WrapError::InvalidWidth`] when `wrap.columns` is zero.
    pub fn validate(&self) -> Result<(), WrapError> {
        if self.wrap.columns < 1 {
            return Err(WrapError::InvalidWidth(self.wrap.columns));
        }
        Ok(())
    }
}
