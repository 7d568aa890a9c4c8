//! Terminal rendering of lex errors.

use std::io::{self, Write};

use ariadne::{Config, Label, Report, ReportKind, Source};
use strongo_lexer::{LexError, Token};

/// Render `error` against its source as an annotated snippet.
///
/// `token` is the error token the error was built from; its slice is the
/// labelled span.
pub fn write_lex_error(
    error: &LexError,
    token: &Token<'_>,
    source: &str,
    color: bool,
    out: &mut dyn Write,
) -> io::Result<()> {
    let name = error.source_name.as_str();
    // Spans are in chars.
    let start = char_offset(source, token.offset);
    let end = char_offset(source, token.end())
        .max(start + 1)
        .min(source.chars().count());

    Report::build(ReportKind::Error, name, start)
        .with_config(Config::default().with_color(color))
        .with_message(error.kind.to_string())
        .with_label(Label::new((name, start..end)).with_message("scanning stopped here"))
        .finish()
        .write((name, Source::from(source)), out)
}

fn char_offset(source: &str, byte_offset: usize) -> usize {
    let mut offset = byte_offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    source[..offset].chars().count()
}
