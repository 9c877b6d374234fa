//! Category → style resolution with ancestor fallback.

use crate::color::Rgba;
use crate::engine::token::{Category, Emphasis, Token};
use std::collections::HashMap;
use syntect::highlighting::{FontStyle, StyleModifier, Theme};

const FALLBACK_FOREGROUND: &str = "#ffffff";
const FALLBACK_BACKGROUND: &str = "#282a36";

/// Theme-wide colors used outside of individual tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub foreground: String,
    pub background: String,
}

impl Palette {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            foreground: theme
                .settings
                .foreground
                .map(|c| Rgba::from(c).to_hex())
                .unwrap_or_else(|| FALLBACK_FOREGROUND.to_string()),
            background: theme
                .settings
                .background
                .map(|c| Rgba::from(c).to_hex())
                .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string()),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: FALLBACK_FOREGROUND.to_string(),
            background: FALLBACK_BACKGROUND.to_string(),
        }
    }
}

/// Style attached to one category in a theme. A missing color means the
/// theme foreground.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleDef {
    pub color: Option<String>,
    pub bold: bool,
    pub italic: bool,
}

impl StyleDef {
    fn from_modifier(modifier: &StyleModifier) -> Self {
        let font_style = modifier.font_style.unwrap_or_else(FontStyle::empty);
        Self {
            color: modifier.foreground.map(|c| Rgba::from(c).to_hex()),
            bold: font_style.contains(FontStyle::BOLD),
            italic: font_style.contains(FontStyle::ITALIC),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub color: String,
    pub emphasis: Emphasis,
}

/// Lookup table from category names to styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    default_color: String,
    entries: HashMap<String, StyleDef>,
}

impl StyleTable {
    pub fn new(default_color: impl Into<String>) -> Self {
        Self {
            default_color: default_color.into(),
            entries: HashMap::new(),
        }
    }

    /// Flatten a syntect theme into a category table.
    ///
    /// Single-scope selectors are keyed by their scope. Compound selectors
    /// (`meta.function keyword`) are keyed by their innermost scope and only
    /// fill keys no single-scope selector defines.
    pub fn from_theme(theme: &Theme) -> Self {
        let mut table = Self::new(Palette::from_theme(theme).foreground);
        let mut compound = Vec::new();

        for item in &theme.scopes {
            let style = StyleDef::from_modifier(&item.style);
            for selector in &item.scope.selectors {
                let path = selector.path.as_slice();
                let Some(innermost) = path.last() else {
                    continue;
                };
                let key = innermost.build_string();
                if path.len() == 1 && selector.excludes.is_empty() {
                    table.entries.insert(key, style.clone());
                } else {
                    compound.push((key, style.clone()));
                }
            }
        }

        for (key, style) in compound {
            table.entries.entry(key).or_insert(style);
        }
        table
    }

    pub fn insert(&mut self, category: impl Into<String>, style: StyleDef) {
        self.entries.insert(category.into(), style);
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    /// Style of the nearest styled ancestor of `category`, or the theme
    /// default when none is styled.
    pub fn resolve(&self, category: &Category) -> ResolvedStyle {
        match category.ancestors().find_map(|name| self.entries.get(name)) {
            Some(style) => ResolvedStyle {
                color: style
                    .color
                    .clone()
                    .unwrap_or_else(|| self.default_color.clone()),
                emphasis: Emphasis::from_flags(style.bold, style.italic),
            },
            None => ResolvedStyle {
                color: self.default_color.clone(),
                emphasis: Emphasis::Regular,
            },
        }
    }

    /// Build a styled token for `text` in `category`.
    pub fn token(&self, text: &str, category: Category) -> Token {
        let style = self.resolve(&category);
        Token::new(text, style.color, style.emphasis, category)
    }
}
