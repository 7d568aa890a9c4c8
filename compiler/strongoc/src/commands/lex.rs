//! `strongoc lex`: print the token stream of a template.

use std::fs;
use std::io::Write;

use strongo_lexer::{handoff, LexError, Lexer, LexerOptions, Token};
use tracing::{debug, info_span};

use crate::cli::LexArgs;
use crate::report::write_lex_error;
use crate::CliError;

/// How the token stream is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Kind @ offset: "text"` line per token.
    #[default]
    Lines,
    /// A single JSON array of tokens.
    Json,
}

/// How tokens are pulled from the scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Iterate the lexer on the calling thread.
    #[default]
    Pull,
    /// Scan on a scoped thread behind the rendezvous channel.
    Threaded,
}

/// Settings for one `lex` run.
#[derive(Clone, Debug, Default)]
pub struct LexConfig {
    pub options: LexerOptions,
    pub format: OutputFormat,
    pub mode: ScanMode,
    /// Colorize error reports.
    pub color: bool,
}

impl LexArgs {
    /// Build the run settings from the parsed flags.
    pub fn lex_config(&self, color: bool) -> Result<LexConfig, CliError> {
        Ok(LexConfig {
            options: self.lexer_options()?,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Lines
            },
            mode: if self.threaded {
                ScanMode::Threaded
            } else {
                ScanMode::Pull
            },
            color,
        })
    }
}

/// Lex the file named in `args`, printing tokens to `out` and any error
/// report to `err`.
pub fn lex_file(
    args: &LexArgs,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.lex_config(color)?;
    let source = fs::read_to_string(&args.file).map_err(|source| CliError::Read {
        path: args.file.clone(),
        source,
    })?;
    let name = args.file.display().to_string();
    lex_source(&name, &source, &config, out, err)
}

/// Lex `source` and print its tokens.
///
/// If the stream ends in an error token, the error is rendered to `err`
/// after the tokens are printed and returned as [`CliError::Lex`].
pub fn lex_source(
    name: &str,
    source: &str,
    config: &LexConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let _span = info_span!("lex", source = name, mode = ?config.mode).entered();
    let lexer = Lexer::with_options(name, source, config.options.clone());
    let tokens: Vec<Token<'_>> = match config.mode {
        ScanMode::Pull => lexer.collect(),
        ScanMode::Threaded => handoff::scan(lexer, |rx| rx.collect()),
    };
    debug!(count = tokens.len(), "tokens collected");

    match config.format {
        OutputFormat::Lines => {
            writeln!(out, "Tokens for '{name}' ({} tokens):", tokens.len())?;
            for tok in &tokens {
                writeln!(out, "  {:?} @ {}: {:?}", tok.kind, tok.offset, tok.text)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out)?;
        }
    }

    let Some(last) = tokens.last() else {
        return Ok(());
    };
    match LexError::from_token(name, source, last) {
        Some(error) => {
            write_lex_error(&error, last, source, config.color, err)?;
            Err(CliError::Lex(error))
        }
        None => Ok(()),
    }
}
