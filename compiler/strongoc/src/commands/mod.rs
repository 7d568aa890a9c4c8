//! Command handlers for the `strongoc` CLI.

mod lex;

pub use lex::{lex_file, lex_source, LexConfig, OutputFormat, ScanMode};
