use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(LexErrorKind::UnclosedComment.to_string(), "unclosed comment");
    assert_eq!(
        LexErrorKind::UnterminatedString.to_string(),
        "unterminated quoted string"
    );
    assert_eq!(LexErrorKind::DuplicateExtends.to_string(), "duplicate @extends");
    assert_eq!(
        LexErrorKind::UnexpectedInDirective { found: ',' }.to_string(),
        "unexpected token in directive: ','"
    );
}

#[test]
fn found_character_or_end_of_input() {
    assert_eq!(
        LexErrorKind::ExpectedCloseDirective { found: Some(']') }.to_string(),
        "unclosed directive: expected `)`, got ']'"
    );
    assert_eq!(
        LexErrorKind::ExpectedQuote { found: None }.to_string(),
        "expected `\"` after @extends(, got end of input"
    );
}

#[test]
fn line_column_counts_from_one() {
    assert_eq!(line_column("abc", 0), (1, 1));
    assert_eq!(line_column("abc", 2), (1, 3));
    assert_eq!(line_column("ab\ncd", 3), (2, 1));
    assert_eq!(line_column("ab\ncd\nef", 7), (3, 2));
}

#[test]
fn line_column_counts_chars_not_bytes() {
    // "héé" is 5 bytes; offset 5 is the 4th char position.
    assert_eq!(line_column("héé!", 5), (1, 4));
}

#[test]
fn line_column_clamps_past_end() {
    assert_eq!(line_column("ab\n", 99), (2, 1));
}

#[test]
fn from_error_token() {
    let source = "line one\n  @extends(\"x\")";
    let token = Token::new(
        TokenKind::Error(LexErrorKind::MisplacedExtends),
        11,
        "",
    );
    let err = LexError::from_token("page.tmpl", source, &token);
    assert_eq!(
        err,
        Some(LexError {
            source_name: "page.tmpl".to_string(),
            offset: 11,
            line: 2,
            column: 3,
            kind: LexErrorKind::MisplacedExtends,
        })
    );
}

#[test]
fn from_non_error_token_is_none() {
    let token = Token::new(TokenKind::Text, 0, "hi");
    assert!(LexError::from_token("t", "hi", &token).is_none());
}

#[test]
fn display_names_source_and_position() {
    let err = LexError::new("a.tmpl", "x\n{{/* oops", 2, LexErrorKind::UnclosedComment);
    assert_eq!(err.to_string(), "a.tmpl:2:1: unclosed comment");
}
