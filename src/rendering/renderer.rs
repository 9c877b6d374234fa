//! RowRenderer trait definition for pluggable output backends
//!
//! Backends receive wrapped rows and draw them inside a terminal-window
//! frame. Layout is already decided by the wrapper; a renderer only maps
//! printable chars to terminal cells and token colors to terminal colors.

use super::frame::Frame;
use crate::color::{ColorError, Rgba};
use crate::engine::{Emphasis, Row, Token};
use std::io;
use thiserror::Error;

/// Errors that can occur while drawing rows
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid color: {0}")]
    Color(#[from] ColorError),
}

/// Core trait for row rendering backends
pub trait RowRenderer {
    /// Draw `rows` inside the window frame.
    ///
    /// # Errors
    /// Returns `RendererError::Color` if a token or palette color cannot be
    /// parsed, and `RendererError::Io` if the output cannot be written.
    fn render_rows(&mut self, rows: &[Row]) -> Result<(), RendererError>;
}

/// Foreground color and emphasis for one token.
pub(crate) fn token_style(token: &Token) -> Result<(Rgba, Emphasis), RendererError> {
    Ok((Rgba::parse(token.color())?, token.emphasis()))
}

pub(crate) fn background(frame: &Frame) -> Result<Rgba, RendererError> {
    Ok(Rgba::parse(&frame.palette.background)?)
}
