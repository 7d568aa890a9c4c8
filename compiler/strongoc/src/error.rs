use std::io;
use std::path::PathBuf;

use strongo_lexer::LexError;
use thiserror::Error;

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid lexer options in '{}': {source}", path.display())]
    Options {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode tokens: {0}")]
    Encode(#[from] serde_json::Error),

    /// The source did not lex; the report has already been rendered.
    #[error(transparent)]
    Lex(#[from] LexError),
}

impl CliError {
    /// Whether the error was already reported to the user.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Lex(_))
    }
}
