use crate::color::Rgba;
use crate::engine::config::WindowConfig;
use crate::engine::Row;
use crate::highlight::Palette;
use crate::engine::Token;
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// Terminal-window chrome colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowTheme {
    pub title_bar: Rgba,
    pub title_text: Rgba,
    /// Close, minimize, zoom
    pub traffic_lights: [Rgba; 3],
}

impl Default for WindowTheme {
    fn default() -> Self {
        WindowTheme::macos()
    }
}

impl WindowTheme {
    pub fn macos() -> Self {
        Self {
            title_bar: Rgba::rgb(30, 30, 30),   // #1E1E1E
            title_text: Rgba::rgb(160, 160, 160), // #A0A0A0
            traffic_lights: [
                Rgba::rgb(255, 95, 86),  // #FF5F56
                Rgba::rgb(255, 189, 46), // #FFBD2E
                Rgba::rgb(39, 201, 63),  // #27C93F
            ],
        }
    }
}

/// Everything a renderer needs besides the rows themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub palette: Palette,
    pub chrome: WindowTheme,
    /// Column budget the rows were wrapped to
    pub columns: usize,
    pub padding: usize,
    pub title: Option<String>,
}

impl Frame {
    pub fn new(palette: Palette, columns: usize, window: &WindowConfig) -> Self {
        Self {
            palette,
            chrome: WindowTheme::default(),
            columns,
            padding: window.padding,
            title: window.title.clone(),
        }
    }

    /// Width of the code area: the column budget, or wider when whitespace
    /// relocation pushed a row past it.
    pub fn content_width(&self, rows: &[Row]) -> usize {
        rows.iter()
            .map(row_display_width)
            .max()
            .unwrap_or(0)
            .max(self.columns)
    }
}

/// Token text as drawn: no line terminators, and each tab as one space to
/// match the one printable char the wrapper counted for it.
pub fn drawn_text(token: &Token) -> Cow<'_, str> {
    let text = token.visible_text();
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Terminal cell width of a row as drawn.
pub fn row_display_width(row: &Row) -> usize {
    row.iter().map(|token| drawn_text(token).width()).sum()
}
