//! Onboard CLI
//!
//! The `onboard` binary: transcript parsing and search, freeze checks,
//! freeze notices and usage summaries from the command line.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;

pub use config::{ConfigError, ConfigResult, FormatChoice, OnboardConfig, TranscriptSettings};

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
