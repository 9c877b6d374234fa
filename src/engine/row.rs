use super::token::Token;

/// One output line of wrapped tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    tokens: Vec<Token>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Sum of the tokens' printable lengths.
    pub fn printable_length(&self) -> usize {
        self.tokens.iter().map(Token::printable_length).sum()
    }

    /// Concatenated token text, line terminators included.
    pub fn text(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }

    pub fn ends_with_line_break(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_line_break)
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl From<Vec<Token>> for Row {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl IntoIterator for Row {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
