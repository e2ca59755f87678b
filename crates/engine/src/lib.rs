// crates/engine/src/lib.rs
pub mod aggregator;
pub mod config;
pub mod error;
pub mod options;
pub mod scanner;
pub mod stats;
pub mod table;
pub mod tokenizer;

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::Result;
use crate::stats::RunResult;

pub use crate::table::FrequencyTable;

/// Run the word counting engine over `config.paths`.
///
/// Returns a `RunResult` holding the merged table and any per-file errors.
///
/// # Errors
///
/// Returns an error only when the configuration is invalid. Files that cannot
/// be opened or read are logged and collected in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    config.validate()?;
    Ok(Aggregator::new(config).aggregate(&config.paths))
}
