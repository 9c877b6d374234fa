//! Source text → styled tokens.

use super::theme::{Palette, StyleTable};
use super::{syntax_set, theme_by_name, HighlightError};
use crate::engine::token::{Category, Token};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference};
use syntect::util::LinesWithEndings;
use tracing::debug;

/// Pick a syntax: the explicit language (name, token or extension), then
/// the file's own hint, then the first line of the source, then plain text.
pub fn find_syntax(
    explicit: Option<&str>,
    file_hint: Option<&str>,
    source: &str,
) -> &'static SyntaxReference {
    let set = syntax_set();
    let first_line = source.lines().next().unwrap_or_default();
    let by_hint = |hint: &str| {
        let hint = hint.trim();
        if hint.is_empty() {
            return None;
        }
        set.find_syntax_by_token(hint)
            .or_else(|| set.find_syntax_by_extension(hint))
    };

    explicit
        .and_then(by_hint)
        .or_else(|| file_hint.and_then(by_hint))
        .or_else(|| set.find_syntax_by_first_line(first_line))
        .unwrap_or_else(|| set.find_syntax_plain_text())
}

/// A syntax paired with a resolved theme.
pub struct CodeHighlighter {
    syntax: &'static SyntaxReference,
    styles: StyleTable,
    palette: Palette,
}

impl CodeHighlighter {
    /// # Errors
    /// Returns [`HighlightError::ThemeNotFound`] for unknown theme names.
    pub fn new(theme_name: &str, syntax: &'static SyntaxReference) -> Result<Self, HighlightError> {
        let theme = theme_by_name(theme_name)?;
        Ok(Self {
            syntax,
            styles: StyleTable::from_theme(theme),
            palette: Palette::from_theme(theme),
        })
    }

    pub fn syntax_name(&self) -> &str {
        &self.syntax.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Tokenize `source` into styled tokens.
    ///
    /// CRLF is normalized to LF. Every newline becomes its own line-break
    /// token, and whitespace-only fragments are tagged `text.whitespace`.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, HighlightError> {
        let source = source.replace("\r\n", "\n");
        let mut state = ParseState::new(self.syntax);
        let mut stack = ScopeStack::new();
        let mut tokens = Vec::new();

        for line in LinesWithEndings::from(&source) {
            let ops = state.parse_line(line, syntax_set())?;
            let mut cursor = 0;
            for (offset, op) in ops {
                if offset > cursor {
                    self.push_fragment(&mut tokens, &line[cursor..offset], &stack);
                    cursor = offset;
                }
                stack.apply(&op)?;
            }
            if cursor < line.len() {
                self.push_fragment(&mut tokens, &line[cursor..], &stack);
            }
        }

        debug!(syntax = %self.syntax.name, tokens = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    fn push_fragment(&self, tokens: &mut Vec<Token>, fragment: &str, stack: &ScopeStack) {
        for piece in fragment.split_inclusive('\n') {
            let (body, newline) = match piece.strip_suffix('\n') {
                Some(body) => (body, true),
                None => (piece, false),
            };
            for run in whitespace_runs(body) {
                let category = if run.starts_with(char::is_whitespace) {
                    Category::whitespace()
                } else {
                    innermost_category(stack)
                };
                tokens.push(self.styles.token(run, category));
            }
            if newline {
                tokens.push(Token::line_break());
            }
        }
    }
}

/// Split `text` into maximal runs that are either all whitespace or contain
/// no whitespace.
fn whitespace_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut previous: Option<bool> = None;

    for (idx, c) in text.char_indices() {
        let is_space = c.is_whitespace();
        if previous.is_some_and(|prev| prev != is_space) {
            runs.push(&text[start..idx]);
            start = idx;
        }
        previous = Some(is_space);
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }
    runs
}

fn innermost_category(stack: &ScopeStack) -> Category {
    stack
        .as_slice()
        .last()
        .map(|scope| Category::new(scope.build_string()))
        .unwrap_or_else(Category::text)
}
