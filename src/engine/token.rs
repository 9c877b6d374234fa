//! Styled token model shared by the tokenizer, splitter and wrapper.

use super::error::WrapError;
use std::fmt;

/// Text of the line-break token, whether it came from the source or was
/// inserted by the splitter.
pub const LINE_BREAK: &str = "\n";

/// Color carried by synthetic line breaks. Never drawn.
pub const LINE_BREAK_COLOR: &str = "#f8f8f2";

/// Font emphasis resolved from a theme's bold/italic flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    #[default]
    Regular,
    Italic,
    Bold,
    BoldItalic,
}

impl Emphasis {
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Emphasis::Regular,
            (false, true) => Emphasis::Italic,
            (true, false) => Emphasis::Bold,
            (true, true) => Emphasis::BoldItalic,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Emphasis::Bold | Emphasis::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, Emphasis::Italic | Emphasis::BoldItalic)
    }
}

/// Hierarchical lexical category, e.g. `keyword.control.import.python`.
///
/// Each dotted segment narrows the parent. Style lookup walks from the full
/// name towards the root until a styled entry is found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub const WHITESPACE: &'static str = "text.whitespace";
    pub const TEXT: &'static str = "text";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn whitespace() -> Self {
        Self::new(Self::WHITESPACE)
    }

    pub fn text() -> Self {
        Self::new(Self::TEXT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Category one level up, or `None` at the root.
    pub fn parent(&self) -> Option<Category> {
        self.0
            .rfind('.')
            .map(|idx| Category::new(&self.0[..idx]))
    }

    /// The category name followed by each ancestor name, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> + '_ {
        let name = self.0.as_str();
        std::iter::successors(Some(name), |current| {
            current.rfind('.').map(|idx| &current[..idx])
        })
    }

    pub fn is_whitespace(&self) -> bool {
        self.ancestors().any(|name| name == Self::WHITESPACE)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Character count of `text` with trailing `\r`/`\n` removed.
pub fn printable_length(text: &str) -> usize {
    text.trim_end_matches(['\r', '\n']).chars().count()
}

/// An immutable, styled fragment of source text.
///
/// `printable_length` never exceeds the char count of `text`; the only way
/// to build a token with an explicit length is through
/// [`Token::with_printable_length`], which enforces that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    color: String,
    emphasis: Emphasis,
    category: Category,
    printable_length: usize,
}

impl Token {
    /// Build a token whose printable length is derived from its text.
    pub fn new(
        text: impl Into<String>,
        color: impl Into<String>,
        emphasis: Emphasis,
        category: Category,
    ) -> Self {
        let text = text.into();
        let printable_length = printable_length(&text);
        Self {
            text,
            color: color.into(),
            emphasis,
            category,
            printable_length,
        }
    }

    /// Build a token with an explicit printable length.
    ///
    /// # Errors
    /// Returns [`WrapError::InvalidPrintableLength`] if `printable_length`
    /// is larger than the number of chars in `text`.
    pub fn with_printable_length(
        text: impl Into<String>,
        color: impl Into<String>,
        emphasis: Emphasis,
        category: Category,
        printable_length: usize,
    ) -> Result<Self, WrapError> {
        let text = text.into();
        let text_length = text.chars().count();
        if printable_length > text_length {
            return Err(WrapError::InvalidPrintableLength {
                printable_length,
                text_length,
            });
        }
        Ok(Self {
            text,
            color: color.into(),
            emphasis,
            category,
            printable_length,
        })
    }

    /// The line-break token inserted at width-forced breaks.
    pub fn line_break() -> Self {
        Self {
            text: LINE_BREAK.to_string(),
            color: LINE_BREAK_COLOR.to_string(),
            emphasis: Emphasis::Regular,
            category: Category::whitespace(),
            printable_length: 0,
        }
    }

    /// Same style and category, new text and length.
    pub(crate) fn restyle(&self, text: String, printable_length: usize) -> Result<Self, WrapError> {
        Self::with_printable_length(
            text,
            self.color.clone(),
            self.emphasis,
            self.category.clone(),
            printable_length,
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text without trailing line terminators, as it is drawn.
    pub fn visible_text(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn printable_length(&self) -> usize {
        self.printable_length
    }

    pub fn is_line_break(&self) -> bool {
        self.text == LINE_BREAK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_from_flags() {
        assert_eq!(Emphasis::from_flags(false, false), Emphasis::Regular);
        assert_eq!(Emphasis::from_flags(false, true), Emphasis::Italic);
        assert_eq!(Emphasis::from_flags(true, false), Emphasis::Bold);
        assert_eq!(Emphasis::from_flags(true, true), Emphasis::BoldItalic);
        assert!(Emphasis::BoldItalic.is_bold());
        assert!(Emphasis::BoldItalic.is_italic());
        assert!(!Emphasis::Italic.is_bold());
    }

    #[test]
    fn test_category_parent_chain() {
        let category = Category::new("keyword.control.import");
        assert_eq!(category.parent(), Some(Category::new("keyword.control")));
        assert_eq!(Category::new("keyword").parent(), None);

        let ancestors: Vec<&str> = category.ancestors().collect();
        assert_eq!(ancestors, vec!["keyword.control.import", "keyword.control", "keyword"]);
    }

    #[test]
    fn test_category_whitespace_detection() {
        assert!(Category::whitespace().is_whitespace());
        assert!(Category::new("text.whitespace.indent").is_whitespace());
        assert!(!Category::text().is_whitespace());
    }

    #[test]
    fn test_printable_length_strips_trailing_terminators() {
        assert_eq!(printable_length("def"), 3);
        assert_eq!(printable_length("def\n"), 3);
        assert_eq!(printable_length("def\r\n"), 3);
        assert_eq!(printable_length("\n"), 0);
        assert_eq!(printable_length(""), 0);
        // only trailing terminators count as non-printable
        assert_eq!(printable_length("a\nb"), 3);
    }

    #[test]
    fn test_printable_length_counts_chars_not_bytes() {
        assert_eq!(printable_length("héllo"), 5);
        assert_eq!(printable_length("你好\n"), 2);
    }

    #[test]
    fn test_new_derives_printable_length() {
        let token = Token::new("import\n", "#66d9ef", Emphasis::Bold, Category::new("keyword"));
        assert_eq!(token.printable_length(), 6);
        assert_eq!(token.visible_text(), "import");
        assert_eq!(token.emphasis(), Emphasis::Bold);
    }

    #[test]
    fn test_with_printable_length_rejects_overlong() {
        let result = Token::with_printable_length("ab", "#fff", Emphasis::Regular, Category::text(), 3);
        assert_eq!(
            result,
            Err(WrapError::InvalidPrintableLength {
                printable_length: 3,
                text_length: 2
            })
        );
    }

    #[test]
    fn test_with_printable_length_accepts_shorter() {
        let token =
            Token::with_printable_length(" ", "#fff", Emphasis::Regular, Category::whitespace(), 0)
                .unwrap();
        assert_eq!(token.printable_length(), 0);
        assert_eq!(token.text(), " ");
    }

    #[test]
    fn test_line_break_token() {
        let token = Token::line_break();
        assert!(token.is_line_break());
        assert_eq!(token.printable_length(), 0);
        assert_eq!(token.emphasis(), Emphasis::Regular);
        assert!(token.category().is_whitespace());
        assert_eq!(token.color(), LINE_BREAK_COLOR);
    }

    #[test]
    fn test_only_bare_newline_is_line_break() {
        let token = Token::new("x\n", "#fff", Emphasis::Regular, Category::text());
        assert!(!token.is_line_break());
    }
}
