//! Lexer error types.
//!
//! The scanner reports failures as [`TokenKind::Error`] tokens carrying a
//! [`LexErrorKind`]; the kind's `Display` is the message. Consumers that
//! want to report an error turn the token into a [`LexError`], which adds
//! the source name and a line/column position.

use serde::Serialize;
use thiserror::Error;

use crate::{Token, TokenKind};

/// What went wrong while scanning.
///
/// Every kind is terminal: the lexer emits one error token and halts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error, Serialize)]
pub enum LexErrorKind {
    // === Structural ===
    /// `{{/*` with no matching `*/`.
    #[error("unclosed comment")]
    UnclosedComment,
    /// `*/` not immediately followed by the right delimiter.
    #[error("comment ends before closing delimiter")]
    CommentEndsBeforeDelimiter,
    /// End of input or a raw newline before the closing `"`.
    #[error("unterminated quoted string")]
    UnterminatedString,
    /// End of input inside a directive body.
    #[error("unclosed directive")]
    UnclosedDirective,
    /// `@extends(` not followed by a quoted string.
    #[error("expected `\"` after @extends(, got {}", found_text(.found))]
    ExpectedQuote { found: Option<char> },
    /// Anything but `)` after the `@extends` parameter.
    #[error("unclosed directive: expected `)`, got {}", found_text(.found))]
    ExpectedCloseDirective { found: Option<char> },
    /// End of input inside an action.
    #[error("unclosed action")]
    UnclosedAction,
    /// Right delimiter reached with open parentheses.
    #[error("unclosed left paren")]
    UnclosedLeftParen,
    /// `)` with no matching `(` in an action.
    #[error("unexpected right paren")]
    UnexpectedRightParen,

    // === Ordering ===
    /// A second `@extends` in the same source.
    #[error("duplicate @extends")]
    DuplicateExtends,
    /// `@extends` anywhere but offset 0.
    #[error("@extends should be the first thing in a template")]
    MisplacedExtends,

    // === Unexpected Character ===
    /// A character that cannot start anything in a directive body.
    #[error("unexpected token in directive: {found:?}")]
    UnexpectedInDirective { found: char },
    /// A character that cannot start anything in an action.
    #[error("unrecognized character in action: {found:?}")]
    UnrecognizedInAction { found: char },
}

fn found_text(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_string(),
    }
}

/// A lexer error located in its source, ready for reporting.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{source_name}:{line}:{column}: {kind}")]
pub struct LexError {
    /// Name of the template the error occurred in.
    pub source_name: String,
    /// Byte offset of the failing construct.
    pub offset: usize,
    /// 1-based line of `offset`.
    pub line: usize,
    /// 1-based column of `offset`, counted in chars.
    pub column: usize,
    pub kind: LexErrorKind,
}

impl LexError {
    /// Locate `kind` at `offset` within `source`.
    pub fn new(source_name: impl Into<String>, source: &str, offset: usize, kind: LexErrorKind) -> Self {
        let (line, column) = line_column(source, offset);
        Self {
            source_name: source_name.into(),
            offset,
            line,
            column,
            kind,
        }
    }

    /// Build an error from an error token; `None` for any other token.
    pub fn from_token(source_name: impl Into<String>, source: &str, token: &Token<'_>) -> Option<Self> {
        match token.kind {
            TokenKind::Error(kind) => Some(Self::new(source_name, source, token.offset, kind)),
            _ => None,
        }
    }
}

/// 1-based line and column of a byte offset. Offsets past the end clamp.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line_start = memchr::memrchr(b'\n', before.as_bytes()).map_or(0, |i| i + 1);
    let line = 1 + memchr::memchr_iter(b'\n', before.as_bytes()).count();
    let column = 1 + before[line_start..].chars().count();
    (line, column)
}

#[cfg(test)]
mod tests;
