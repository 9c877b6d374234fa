//! Render source code as a syntax-highlighted, word-wrapped terminal window.
//!
//! The pipeline is: tokenize with a syntect syntax, resolve each token's
//! style from a theme, reflow the token stream to a fixed column width, then
//! draw the rows with one of the terminal renderers.

pub mod app;
pub mod color;
pub mod engine;
pub mod highlight;
pub mod input;
pub mod rendering;
