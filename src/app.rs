//! Pipeline from loaded source to renderable rows.

use crate::engine::config::Config;
use crate::engine::{wrap_tokens, Row, WrapError};
use crate::highlight::{find_syntax, CodeHighlighter, HighlightError, Palette};
use crate::input::{LoadError, LoadedSource};
use crate::rendering::{Frame, RendererError, RowRenderer, RowWindow};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Wrap(#[from] WrapError),

    #[error(transparent)]
    Highlight(#[from] HighlightError),

    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Wrapped rows plus what a renderer needs to frame them.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub rows: Vec<Row>,
    pub palette: Palette,
    pub syntax: String,
}

impl Snapshot {
    pub fn frame(&self, config: &Config) -> Frame {
        Frame::new(self.palette.clone(), config.wrap.columns, &config.window)
    }
}

/// Highlight, wrap and window `source` according to `config`.
///
/// An explicit `language` takes precedence over the source's own hint,
/// which is still tried when `language` names no known syntax.
pub fn prepare(source: &LoadedSource, language: Option<&str>, config: &Config) -> Result<Snapshot, AppError> {
    config.validate()?;

    let syntax = find_syntax(language, source.language_hint.as_deref(), &source.text);
    let highlighter = CodeHighlighter::new(&config.theme.name, syntax)?;
    let tokens = highlighter.tokenize(&source.text)?;
    let rows = wrap_tokens(tokens, config.wrap.columns)?;
    let rows = RowWindow::from_config(&config.window).apply(rows);

    debug!(origin = %source.origin, syntax = highlighter.syntax_name(), rows = rows.len(), "prepared snapshot");

    Ok(Snapshot {
        rows,
        palette: highlighter.palette().clone(),
        syntax: highlighter.syntax_name().to_string(),
    })
}

/// Draw a prepared snapshot with any renderer.
pub fn render(snapshot: &Snapshot, renderer: &mut dyn RowRenderer) -> Result<(), AppError> {
    renderer.render_rows(&snapshot.rows)?;
    Ok(())
}
