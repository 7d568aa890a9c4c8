//! Token types for the template lexer.

use std::fmt;

use serde::Serialize;

use crate::LexErrorKind;

/// Token kinds.
///
/// Directive names and keywords are distinct kinds so the parser can match
/// on them without re-reading the text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum TokenKind {
    /// Scan failed; always the last token.
    Error(LexErrorKind),
    /// Literal template text.
    Text,
    /// End of the source; always the last token of a successful scan.
    Eof,
    /// Line break inside a directive body.
    EndOfLine,
    LeftDelim,
    RightDelim,
    Identifier,
    /// Quoted string, quotes included.
    String,

    // Action tokens
    /// Run of whitespace inside an action.
    Space,
    LeftParen,
    RightParen,
    Pipe,
    /// `:=`
    ColonEquals,
    /// `$name` (or a bare `$`)
    Variable,
    /// `.name`
    Field,
    Number,
    /// Any other printable ASCII punctuation inside an action.
    Char,

    // Directives
    /// `(` opening a directive body.
    OpenDirective,
    Extends,
    Import,
    Params,
    Include,
    /// `)` closing a directive body.
    CloseDirective,

    // Keywords
    /// The cursor, spelled `.`
    Dot,
    Block,
    Define,
    Else,
    End,
    If,
    Nil,
    Range,
    Template,
    With,
}

impl TokenKind {
    /// Returns `true` for reserved words (including the `.` cursor).
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Dot
                | TokenKind::Block
                | TokenKind::Define
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Range
                | TokenKind::Template
                | TokenKind::With
        )
    }

    /// Returns `true` for directive-name kinds.
    pub fn is_directive(self) -> bool {
        matches!(
            self,
            TokenKind::Extends | TokenKind::Import | TokenKind::Params | TokenKind::Include
        )
    }

    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Error(_))
    }

    /// Returns `true` for the kinds that end a stream.
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenKind::Eof | TokenKind::Error(_))
    }

    /// Short human-readable name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Error(_) => "error",
            TokenKind::Text => "text",
            TokenKind::Eof => "end of input",
            TokenKind::EndOfLine => "end of line",
            TokenKind::LeftDelim => "left delimiter",
            TokenKind::RightDelim => "right delimiter",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Space => "space",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Pipe => "|",
            TokenKind::ColonEquals => ":=",
            TokenKind::Variable => "variable",
            TokenKind::Field => "field",
            TokenKind::Number => "number",
            TokenKind::Char => "character",
            TokenKind::OpenDirective => "directive (",
            TokenKind::Extends => "@extends",
            TokenKind::Import => "@import",
            TokenKind::Params => "@params",
            TokenKind::Include => "@include",
            TokenKind::CloseDirective => "directive )",
            TokenKind::Dot => ".",
            TokenKind::Block => "block",
            TokenKind::Define => "define",
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Range => "range",
            TokenKind::Template => "template",
            TokenKind::With => "with",
        }
    }
}

/// A token: kind, starting byte offset, and the exact source slice.
///
/// Tokens are immutable `Copy` values borrowing from the source, so a
/// consumer may keep them after the scanner has moved on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub offset: usize,
    /// Source slice; for error tokens, what the failing construct consumed.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, offset: usize, text: &'src str) -> Self {
        Token { kind, offset, text }
    }

    /// Byte offset just past the token's slice.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// The error message, for error tokens.
    pub fn error_message(&self) -> Option<String> {
        match self.kind {
            TokenKind::Error(kind) => Some(kind.to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::Error(kind) => write!(f, "{kind}"),
            kind if kind.is_keyword() || kind.is_directive() => write!(f, "<{}>", self.text),
            _ if self.text.chars().count() > 10 => {
                let head: String = self.text.chars().take(10).collect();
                write!(f, "{:?}:{head:?}...", self.kind)
            }
            _ => write!(f, "{:?}:{:?}", self.kind, self.text),
        }
    }
}
