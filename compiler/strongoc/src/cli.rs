//! Command-line arguments.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use strongo_lexer::LexerOptions;

use crate::CliError;

#[derive(Debug, Parser)]
#[command(name = "strongoc", version, about = "Strongo template tools")]
pub struct Cli {
    /// Render RUST_LOG tracing output as an indented span tree
    #[arg(long, global = true)]
    pub tree: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the token stream of a template
    Lex(LexArgs),
}

#[derive(Debug, Args)]
pub struct LexArgs {
    /// Template file to lex
    pub file: PathBuf,

    /// Print tokens as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Scan on a separate thread and consume through the handoff channel
    #[arg(long)]
    pub threaded: bool,

    /// JSON file with lexer options
    #[arg(long, value_name = "JSON")]
    pub options: Option<PathBuf>,

    /// Directive marker (default `@`)
    #[arg(long)]
    pub marker: Option<String>,

    /// Left action delimiter (default `{{`)
    #[arg(long)]
    pub left_delim: Option<String>,

    /// Right action delimiter (default `}}`)
    #[arg(long)]
    pub right_delim: Option<String>,
}

impl LexArgs {
    /// Resolve lexer options: the options file first, then flag overrides.
    pub fn lexer_options(&self) -> Result<LexerOptions, CliError> {
        let mut options = match &self.options {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&text).map_err(|source| CliError::Options {
                    path: path.clone(),
                    source,
                })?
            }
            None => LexerOptions::default(),
        };
        if let Some(marker) = &self.marker {
            options = options.with_directive_marker(marker.as_str());
        }
        if let Some(delim) = &self.left_delim {
            options = options.with_left_delim(delim.as_str());
        }
        if let Some(delim) = &self.right_delim {
            options = options.with_right_delim(delim.as_str());
        }
        Ok(options)
    }
}
