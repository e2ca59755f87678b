pub mod cli;
pub mod config;
pub mod error;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Count the configured files and print the report to stdout.
///
/// Per-file failures are logged and summarised; they do not fail the run.
///
/// # Errors
/// Returns an error for an invalid configuration or when the report cannot be written.
pub fn run(config: &Config) -> Result<()> {
    let result = word_freq_engine::run(config)?;
    if !result.errors.is_empty() {
        log::warn!(
            "{} of {} files could not be fully counted",
            result.errors.len(),
            config.paths.len()
        );
    }
    presentation::print_results(&result.table, config)
}
