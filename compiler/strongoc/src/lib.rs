//! Strongo template tooling.
//!
//! The `strongoc` binary is a thin wrapper over this library: argument types
//! live in [`cli`], command handlers in [`commands`], and error reports in
//! [`report`].

use std::sync::Once;

pub mod cli;
pub mod commands;
mod error;
pub mod report;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. With `tree`, events are rendered
/// as an indented span tree instead of flat lines.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if tree {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
