//! Template-source lexer for Strongo templates.
//!
//! Turns raw template text into a stream of [`Token`]s for the template
//! parser. Four sub-languages share one input:
//!
//! - literal text,
//! - `{{ ... }}` actions,
//! - `{{/* ... */}}` comments (never emitted),
//! - `@extends(...)`, `@import(...)`, `@params(...)`, `@include(...)` directives.
//!
//! The scanner is a trampoline over an explicit [`State`] enum. Each step
//! produces at most one token into a one-slot handoff, so a consumer is never
//! more than one token behind the scanner. [`Lexer`] is the pull realization
//! (a plain [`Iterator`]); [`handoff::scan`] runs the same state machine on a
//! scoped thread behind a rendezvous channel.
//!
//! Errors are tokens too: the first [`TokenKind::Error`] ends the stream.
//! [`LexError::from_token`] turns one into a reportable error with line and
//! column.
//!
//! # Tracing
//!
//! - `RUST_LOG=strongo_lexer=debug`: lexer creation, halts, and error tokens.
//! - `RUST_LOG=strongo_lexer=trace`: every emitted token.

mod cursor;
pub mod handoff;
mod keywords;
mod lex_error;
mod options;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use options::LexerOptions;
pub use scanner::{Lexer, Resume, State};
pub use token::{Token, TokenKind};

/// Lex `source` with default options and collect every token, including the
/// final end-of-stream or error token.
///
/// Convenience for tests and tools; the parser pulls from [`Lexer`] directly.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new("<input>", source).collect()
}
