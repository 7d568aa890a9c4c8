use super::*;
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let options = LexerOptions::default();
    assert_eq!(options.directive_marker, "@");
    assert_eq!(options.left_delim, "{{");
    assert_eq!(options.right_delim, "}}");
}

#[test]
fn builder_overrides() {
    let options = LexerOptions::default()
        .with_directive_marker("#")
        .with_left_delim("<%")
        .with_right_delim("%>");
    assert_eq!(options.directive_marker, "#");
    assert_eq!(options.left_delim, "<%");
    assert_eq!(options.right_delim, "%>");
}

#[test]
fn empty_overrides_fall_back_to_defaults() {
    let options = LexerOptions::default()
        .with_directive_marker("")
        .with_left_delim("[[")
        .with_right_delim("")
        .normalized();
    assert_eq!(
        options,
        LexerOptions {
            directive_marker: "@".to_string(),
            left_delim: "[[".to_string(),
            right_delim: "}}".to_string(),
        }
    );
}

#[test]
fn deserializes_partial_json() {
    let options: LexerOptions =
        serde_json::from_str(r#"{"left_delim": "<%", "right_delim": "%>"}"#).unwrap_or_default();
    assert_eq!(options.directive_marker, "@");
    assert_eq!(options.left_delim, "<%");
    assert_eq!(options.right_delim, "%>");
}
