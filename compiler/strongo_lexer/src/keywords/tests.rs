use super::*;

// === Keyword tests ===

#[test]
fn control_keywords() {
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("else"), Some(TokenKind::Else));
    assert_eq!(lookup("end"), Some(TokenKind::End));
    assert_eq!(lookup("with"), Some(TokenKind::With));
    assert_eq!(lookup("range"), Some(TokenKind::Range));
}

#[test]
fn template_keywords() {
    assert_eq!(lookup("define"), Some(TokenKind::Define));
    assert_eq!(lookup("template"), Some(TokenKind::Template));
    assert_eq!(lookup("block"), Some(TokenKind::Block));
    assert_eq!(lookup("nil"), Some(TokenKind::Nil));
}

#[test]
fn non_keywords() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("i"), None);
    assert_eq!(lookup("iff"), None);
    assert_eq!(lookup("If"), None);
    assert_eq!(lookup("ending"), None);
    assert_eq!(lookup("templates"), None);
    assert_eq!(lookup("include"), None);
}

// === Directive tests ===

#[test]
fn directive_names() {
    assert_eq!(directive("extends"), Some(TokenKind::Extends));
    assert_eq!(directive("import"), Some(TokenKind::Import));
    assert_eq!(directive("params"), Some(TokenKind::Params));
    assert_eq!(directive("include"), Some(TokenKind::Include));
}

#[test]
fn non_directives() {
    assert_eq!(directive("extend"), None);
    assert_eq!(directive("Extends"), None);
    assert_eq!(directive("if"), None);
    assert_eq!(directive(""), None);
}

#[test]
fn directive_kinds_are_directives() {
    for word in ["extends", "import", "params", "include"] {
        assert!(directive(word).is_some_and(TokenKind::is_directive), "{word}");
    }
}

// === Identifier characters ===

#[test]
fn ident_chars() {
    assert!(is_ident_char('a'));
    assert!(is_ident_char('Z'));
    assert!(is_ident_char('_'));
    assert!(is_ident_char('7'));
    assert!(is_ident_char('é'));
    assert!(!is_ident_char('-'));
    assert!(!is_ident_char('('));
    assert!(!is_ident_char(' '));
}
