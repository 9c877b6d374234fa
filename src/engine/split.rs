//! Token splitting around an inserted line break.

use super::error::WrapError;
use super::token::{printable_length, Token};

/// Result of cutting a token: head and tail are `None` when their text
/// ends up empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Split {
    pub head: Option<Token>,
    pub line_break: Token,
    pub tail: Option<Token>,
}

impl Split {
    fn into_tokens(self) -> Vec<Token> {
        self.head
            .into_iter()
            .chain(std::iter::once(self.line_break))
            .chain(self.tail)
            .collect()
    }
}

/// Split `token` at printable position `pos`, inserting a line break.
///
/// Returns one to three tokens: head, line break, tail, with empty fragments
/// dropped. Leading whitespace of the tail moves to the end of the head and
/// does not count toward the head's printable length. Tokens with zero
/// printable length come back unchanged.
///
/// # Errors
/// Returns [`WrapError::InvalidSplitPosition`] unless
/// `pos <= max(0, printable_length - 1)`.
pub fn split_token(token: &Token, pos: usize) -> Result<Vec<Token>, WrapError> {
    match cut(token, pos)? {
        Some(split) => Ok(split.into_tokens()),
        None => Ok(vec![token.clone()]),
    }
}

pub(crate) fn cut(token: &Token, pos: usize) -> Result<Option<Split>, WrapError> {
    let max = token.printable_length().saturating_sub(1);
    if pos > max {
        return Err(WrapError::InvalidSplitPosition { pos, max });
    }
    if token.printable_length() == 0 {
        return Ok(None);
    }

    let text = token.text();
    let byte_pos = text
        .char_indices()
        .nth(pos)
        .map_or(text.len(), |(idx, _)| idx);
    let (head_text, tail_text) = text.split_at(byte_pos);
    let head_length = printable_length(head_text);

    let ws_end = tail_text
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(tail_text.len());
    let (relocated, tail_text) = tail_text.split_at(ws_end);

    let head_text = format!("{head_text}{relocated}");
    let head = if head_text.is_empty() {
        None
    } else {
        Some(token.restyle(head_text, head_length)?)
    };
    let tail = if tail_text.is_empty() {
        None
    } else {
        Some(token.restyle(tail_text.to_string(), printable_length(tail_text))?)
    };

    Ok(Some(Split {
        head,
        line_break: Token::line_break(),
        tail,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::token::{Category, Emphasis};

    fn keyword(text: &str, len: usize) -> Token {
        Token::with_printable_length(text, "#66d9ef", Emphasis::Regular, Category::new("keyword"), len)
            .unwrap()
    }

    #[test]
    fn test_split_in_the_middle() {
        let parts = split_token(&keyword("import", 6), 3).unwrap();
        assert_eq!(parts, vec![keyword("imp", 3), Token::line_break(), keyword("ort", 3)]);
    }

    #[test]
    fn test_split_at_zero_drops_empty_head() {
        let parts = split_token(&keyword("import", 6), 0).unwrap();
        assert_eq!(parts, vec![Token::line_break(), keyword("import", 6)]);
    }

    #[test]
    fn test_split_at_last_printable_char() {
        let parts = split_token(&keyword("import", 6), 5).unwrap();
        assert_eq!(parts, vec![keyword("impor", 5), Token::line_break(), keyword("t", 1)]);
    }

    #[test]
    fn test_split_at_printable_length_is_rejected() {
        let err = split_token(&keyword("import", 6), 6).unwrap_err();
        assert_eq!(err, WrapError::InvalidSplitPosition { pos: 6, max: 5 });
    }

    #[test]
    fn test_zero_length_token_is_unchanged() {
        let newline = Token::line_break();
        assert_eq!(split_token(&newline, 0).unwrap(), vec![newline.clone()]);

        let empty = keyword("", 0);
        assert_eq!(split_token(&empty, 0).unwrap(), vec![empty.clone()]);
    }

    #[test]
    fn test_zero_length_token_rejects_nonzero_position() {
        let err = split_token(&Token::line_break(), 1).unwrap_err();
        assert_eq!(err, WrapError::InvalidSplitPosition { pos: 1, max: 0 });
    }

    #[test]
    fn test_leading_whitespace_moves_to_head() {
        let token = Token::new("ab  cd", "#fff", Emphasis::Italic, Category::text());
        let parts = split_token(&token, 2).unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].text(), "ab  ");
        assert_eq!(parts[0].printable_length(), 2);
        assert_eq!(parts[0].emphasis(), Emphasis::Italic);
        assert!(parts[1].is_line_break());
        assert_eq!(parts[2].text(), "cd");
        assert_eq!(parts[2].printable_length(), 2);
    }

    #[test]
    fn test_whitespace_only_tail_is_absorbed() {
        let token = Token::new(" ", "#f8f8f2", Emphasis::Regular, Category::whitespace());
        let parts = split_token(&token, 0).unwrap();

        let relocated =
            Token::with_printable_length(" ", "#f8f8f2", Emphasis::Regular, Category::whitespace(), 0)
                .unwrap();
        assert_eq!(parts, vec![relocated, Token::line_break()]);
    }

    #[test]
    fn test_trailing_newline_follows_relocated_whitespace() {
        let token = Token::new("ab  \n", "#fff", Emphasis::Regular, Category::text());
        let parts = split_token(&token, 2).unwrap();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text(), "ab  \n");
        assert_eq!(parts[0].printable_length(), 2);
        assert!(parts[1].is_line_break());
    }

    #[test]
    fn test_split_keeps_multibyte_chars_intact() {
        let token = Token::new("héllo", "#fff", Emphasis::Regular, Category::text());
        let parts = split_token(&token, 2).unwrap();
        assert_eq!(parts[0].text(), "hé");
        assert_eq!(parts[2].text(), "llo");
    }

    #[test]
    fn test_split_preserves_color_and_category() {
        let token = Token::new("comment", "#959077", Emphasis::Bold, Category::new("comment.line"));
        for part in split_token(&token, 4).unwrap().iter().filter(|t| !t.is_line_break()) {
            assert_eq!(part.color(), "#959077");
            assert_eq!(part.emphasis(), Emphasis::Bold);
            assert_eq!(part.category(), &Category::new("comment.line"));
        }
    }
}
