//! Integration tests for token splitting and line wrapping

use codevista::engine::{flatten, split_token, wrap_tokens, Category, Emphasis, Row, Token, WrapError};

fn tok(text: &str, color: &str, category: &str, printable_length: usize) -> Token {
    Token::with_printable_length(text, color, Emphasis::Regular, Category::new(category), printable_length)
        .unwrap()
}

fn whitespace(text: &str, color: &str, printable_length: usize) -> Token {
    tok(text, color, Category::WHITESPACE, printable_length)
}

fn rows_of(rows: Vec<Vec<Token>>) -> Vec<Row> {
    rows.into_iter().map(Row::from).collect()
}

#[test]
fn test_no_wrap_single_short_token() {
    let tokens = vec![tok("import", "#ff4689", "keyword.control.import", 6)];
    let result = wrap_tokens(tokens.clone(), 10).unwrap();
    assert_eq!(result, rows_of(vec![tokens]));
}

#[test]
fn test_wrap_single_long_token() {
    let tokens = vec![tok("# a_longer_comment", "#959077", "comment.line", 18)];
    let expected = rows_of(vec![
        vec![tok("# a_longer", "#959077", "comment.line", 10), Token::line_break()],
        vec![tok("_comment", "#959077", "comment.line", 8)],
    ]);
    assert_eq!(wrap_tokens(tokens, 10).unwrap(), expected);
}

#[test]
fn test_wrap_long_line_at_token() {
    let tokens = vec![
        tok("class", "#66d9ef", "keyword", 5),
        whitespace(" ", "#f8f8f2", 1),
        tok("C", "#a6e22e", "entity.name.class", 1),
        tok(":", "#f8f8f2", "punctuation", 1),
    ];
    let expected = rows_of(vec![
        vec![
            tok("class", "#66d9ef", "keyword", 5),
            // the space moved to the end of the row and no longer counts
            whitespace(" ", "#f8f8f2", 0),
            Token::line_break(),
        ],
        vec![
            tok("C", "#a6e22e", "entity.name.class", 1),
            tok(":", "#f8f8f2", "punctuation", 1),
        ],
    ]);
    assert_eq!(wrap_tokens(tokens, 5).unwrap(), expected);
}

#[test]
fn test_split_at_zero_puts_break_first() {
    let token = tok("import", "#66d9ef", "keyword", 6);
    assert_eq!(
        split_token(&token, 0).unwrap(),
        vec![Token::line_break(), token.clone()]
    );
}

#[test]
fn test_split_at_printable_length_is_rejected() {
    let token = tok("import", "#66d9ef", "keyword", 6);
    assert_eq!(
        split_token(&token, 6),
        Err(WrapError::InvalidSplitPosition { pos: 6, max: 5 })
    );
}

#[test]
fn test_zero_width_is_rejected() {
    let tokens = vec![tok("import", "#66d9ef", "keyword", 6)];
    assert_eq!(wrap_tokens(tokens, 0), Err(WrapError::InvalidWidth(0)));
}

fn sample_stream() -> Vec<Token> {
    let keyword = |t: &str| Token::new(t, "#66d9ef", Emphasis::Bold, Category::new("keyword"));
    let name = |t: &str| Token::new(t, "#a6e22e", Emphasis::Regular, Category::new("entity.name"));
    let space = |t: &str| Token::new(t, "#f8f8f2", Emphasis::Regular, Category::whitespace());
    let string = |t: &str| Token::new(t, "#e6db74", Emphasis::Italic, Category::new("string.quoted"));

    vec![
        keyword("def"),
        space(" "),
        name("example_very_long_function"),
        Token::new("():", "#f8f8f2", Emphasis::Regular, Category::new("punctuation")),
        Token::line_break(),
        space("    "),
        name("print"),
        Token::new("(", "#f8f8f2", Emphasis::Regular, Category::new("punctuation")),
        string("\"This is   a very long line that should be wrapped if it exceeds the width.\""),
        Token::new(")", "#f8f8f2", Emphasis::Regular, Category::new("punctuation")),
        Token::line_break(),
        space("    "),
        keyword("return"),
        space(" "),
        keyword("True"),
        Token::line_break(),
    ]
}

fn non_break_chars(tokens: &[Token]) -> Vec<char> {
    let mut chars: Vec<char> = tokens
        .iter()
        .filter(|t| !t.is_line_break())
        .flat_map(|t| t.text().chars())
        .collect();
    chars.sort_unstable();
    chars
}

#[test]
fn test_order_and_characters_are_preserved() {
    let input = sample_stream();
    for width in [1, 3, 7, 12, 20, 80] {
        let rows = wrap_tokens(input.clone(), width).unwrap();
        let output = flatten(rows);

        let input_text: String = input.iter().map(Token::text).collect();
        let output_text: String = output.iter().map(Token::text).collect();
        // dropping every newline removes both source and synthetic breaks
        assert_eq!(
            input_text.replace('\n', ""),
            output_text.replace('\n', ""),
            "width {width}"
        );

        let source_breaks = input.iter().filter(|t| t.is_line_break()).count();
        let output_breaks = output.iter().filter(|t| t.is_line_break()).count();
        assert!(output_breaks >= source_breaks);

        // removing only the inserted breaks leaves the input characters
        assert_eq!(non_break_chars(&output), non_break_chars(&input), "width {width}");
    }
}

#[test]
fn test_rows_respect_width() {
    let input = sample_stream();
    for width in [1, 4, 9, 16, 33] {
        for row in wrap_tokens(input.clone(), width).unwrap() {
            assert!(
                row.printable_length() <= width,
                "row {:?} exceeds width {width}",
                row.text()
            );
        }
    }
}

#[test]
fn test_token_reaching_width_exactly_is_not_split() {
    let tokens = vec![
        tok("abc", "#fff", "text", 3),
        tok("de", "#fff", "text", 2),
        tok("f", "#fff", "text", 1),
    ];
    let rows = wrap_tokens(tokens, 5).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].tokens()[1], tok("de", "#fff", "text", 2));
    // the boundary falls before "f", so it is split at position 0
    assert_eq!(rows[0].tokens()[2], Token::line_break());
    assert_eq!(rows[1].text(), "f");
}

#[test]
fn test_rewrapping_output_is_idempotent() {
    let input = sample_stream();
    for width in [2, 5, 11, 24, 80] {
        let rows = wrap_tokens(input.clone(), width).unwrap();
        let again = wrap_tokens(flatten(rows.clone()), width).unwrap();
        assert_eq!(rows, again, "width {width}");
    }
}

#[test]
fn test_style_is_kept_on_every_fragment() {
    let rows = wrap_tokens(sample_stream(), 7).unwrap();
    for token in flatten(rows).iter().filter(|t| !t.is_line_break()) {
        match token.category().as_str() {
            "keyword" => assert_eq!(token.emphasis(), Emphasis::Bold),
            "string.quoted" => {
                assert_eq!(token.emphasis(), Emphasis::Italic);
                assert_eq!(token.color(), "#e6db74");
            }
            _ => assert_eq!(token.emphasis(), Emphasis::Regular),
        }
    }
}
