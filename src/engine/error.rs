use thiserror::Error;

/// Errors raised by the token model, splitter and wrapper.
///
/// All of these are caller-contract violations: the operations are pure, so
/// the same inputs always fail the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("split position {pos} out of range (max {max})")]
    InvalidSplitPosition { pos: usize, max: usize },

    #[error("invalid wrap width {0}: must be at least 1")]
    InvalidWidth(usize),

    #[error("printable length {printable_length} exceeds text length {text_length}")]
    InvalidPrintableLength {
        printable_length: usize,
        text_length: usize,
    },
}
