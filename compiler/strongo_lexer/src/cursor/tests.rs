use super::*;
use proptest::prelude::*;

// === Basic Navigation ===

#[test]
fn bump_returns_chars_in_order() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.bump(), Some('a'));
    assert_eq!(cursor.bump(), Some('b'));
    assert_eq!(cursor.bump(), None);
    assert!(cursor.is_eof());
}

#[test]
fn bump_advances_by_encoded_width() {
    let mut cursor = Cursor::new("é日🦀x");
    assert_eq!(cursor.bump(), Some('é'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.bump(), Some('日'));
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.bump(), Some('🦀'));
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.bump(), Some('x'));
    assert_eq!(cursor.pos(), cursor.source_len());
}

#[test]
fn peek_does_not_consume() {
    let cursor = Cursor::new("xy");
    assert_eq!(cursor.peek(), Some('x'));
    assert_eq!(cursor.peek(), Some('x'));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn peek_at_eof_is_none() {
    let cursor = Cursor::new("");
    assert_eq!(cursor.peek(), None);
    assert!(cursor.is_eof());
}

// === Pushback ===

#[test]
fn back_up_undoes_one_multibyte_step() {
    let mut cursor = Cursor::new("日本");
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.pos(), 6);
    cursor.back_up();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.peek(), Some('本'));
}

#[test]
fn back_up_after_eof_bump_is_noop() {
    let mut cursor = Cursor::new("a");
    cursor.bump();
    assert_eq!(cursor.bump(), None);
    cursor.back_up();
    assert_eq!(cursor.pos(), 1);
}

#[test]
#[should_panic(expected = "back_up without a preceding bump")]
fn double_back_up_is_rejected() {
    let mut cursor = Cursor::new("ab");
    cursor.bump();
    cursor.back_up();
    cursor.back_up();
}

#[test]
#[should_panic(expected = "back_up without a preceding bump")]
fn back_up_after_bulk_move_is_rejected() {
    let mut cursor = Cursor::new("{{x");
    cursor.bump();
    cursor.advance_by(1);
    cursor.back_up();
}

// === Bulk Moves ===

#[test]
fn eat_while_stops_at_first_mismatch() {
    let mut cursor = Cursor::new("abc_1 rest");
    cursor.eat_while(|c| c.is_alphanumeric() || c == '_');
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.rest(), " rest");
}

#[test]
fn eat_while_handles_multibyte() {
    let mut cursor = Cursor::new("привет!");
    cursor.eat_while(char::is_alphabetic);
    assert_eq!(cursor.slice_from(0), "привет");
}

#[test]
fn find_reports_byte_distance() {
    let mut cursor = Cursor::new("/* note */}}");
    cursor.advance_by(2);
    assert_eq!(cursor.find("*/"), Some(6));
    assert_eq!(cursor.find("nope"), None);
}

#[test]
fn skip_to_either_lands_on_first_match() {
    let mut cursor = Cursor::new("hello @x {{y}}");
    assert!(cursor.skip_to_either(b'{', b'@'));
    assert_eq!(cursor.pos(), 6);
    assert!(cursor.starts_with("@x"));
}

#[test]
fn skip_to_either_without_match_goes_to_eof() {
    let mut cursor = Cursor::new("plain text");
    assert!(!cursor.skip_to_either(b'{', b'@'));
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_quote_escape_and_newline() {
    let mut cursor = Cursor::new(r#"abc\"def"#);
    assert_eq!(cursor.skip_to_string_delim(), Some(b'\\'));
    assert_eq!(cursor.pos(), 3);

    let mut cursor = Cursor::new("ab\ncd\"");
    assert_eq!(cursor.skip_to_string_delim(), Some(b'\n'));

    let mut cursor = Cursor::new("no end");
    assert_eq!(cursor.skip_to_string_delim(), None);
    assert!(cursor.is_eof());
}

// === Property Tests ===

proptest! {
    #[test]
    fn bumping_visits_every_char(s in "\\PC{0,40}") {
        let mut cursor = Cursor::new(&s);
        let mut seen = String::new();
        while let Some(c) = cursor.bump() {
            seen.push(c);
        }
        prop_assert_eq!(seen, s.clone());
        prop_assert_eq!(cursor.pos(), s.len());
    }

    #[test]
    fn bump_then_back_up_restores_position(s in "\\PC{1,40}", steps in 0usize..40) {
        let mut cursor = Cursor::new(&s);
        for _ in 0..steps.min(s.chars().count() - 1) {
            cursor.bump();
        }
        let before = cursor.pos();
        let c = cursor.bump();
        cursor.back_up();
        prop_assert_eq!(cursor.pos(), before);
        prop_assert_eq!(cursor.peek(), c);
    }
}
