//! Strongo template CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use strongoc::cli::{Cli, Command};
use strongoc::commands::lex_file;

fn main() -> ExitCode {
    let cli = Cli::parse();
    strongoc::init_tracing(cli.tree);

    let result = match &cli.command {
        Command::Lex(args) => {
            let color = io::stderr().is_terminal();
            // Unlocked handles: the threaded scanner may log to stderr.
            lex_file(args, color, &mut io::stdout(), &mut io::stderr())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_reported() {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
