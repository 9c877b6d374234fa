//! Row assembly: reflow a token stream to a fixed column width.

use super::error::WrapError;
use super::row::Row;
use super::split::cut;
use super::token::Token;
use std::collections::VecDeque;
use std::mem;
use tracing::{debug, trace};

/// Wrap `tokens` into rows of at most `width` printable chars.
///
/// Tokens are consumed in order. A token that would push the running count
/// past `width` is split at the boundary; its tail is reconsidered before the
/// next input token. Line-break tokens close the current row. Rows are never
/// padded or truncated.
///
/// # Errors
/// Returns [`WrapError::InvalidWidth`] if `width` is zero.
pub fn wrap_tokens<I>(tokens: I, width: usize) -> Result<Vec<Row>, WrapError>
where
    I: IntoIterator<Item = Token>,
{
    if width < 1 {
        return Err(WrapError::InvalidWidth(width));
    }

    let mut queue: VecDeque<Token> = tokens.into_iter().collect();
    let mut rows = Vec::new();
    let mut row = Row::new();
    let mut count = 0;

    while let Some(token) = queue.pop_front() {
        if count + token.printable_length() > width {
            let pos = width - count;
            trace!(pos, text = token.text(), "splitting token");
            match cut(&token, pos)? {
                Some(split) => {
                    if let Some(head) = split.head {
                        row.push(head);
                    }
                    row.push(split.line_break);
                    rows.push(mem::take(&mut row));
                    count = 0;
                    if let Some(tail) = split.tail {
                        queue.push_front(tail);
                    }
                }
                // zero-length tokens never overflow
                None => row.push(token),
            }
        } else if token.is_line_break() {
            row.push(token);
            rows.push(mem::take(&mut row));
            count = 0;
        } else {
            count += token.printable_length();
            row.push(token);
        }
    }

    if !row.is_empty() {
        rows.push(row);
    }

    debug!(rows = rows.len(), width, "wrapped tokens");
    Ok(rows)
}

/// Concatenate rows back into a single token stream.
pub fn flatten(rows: impl IntoIterator<Item = Row>) -> Vec<Token> {
    rows.into_iter().flat_map(Row::into_tokens).collect()
}
