use crate::error::EngineError;
use crate::table::FrequencyTable;
use std::path::PathBuf;

/// Outcome of a whole run: the merged table and every per-file failure.
#[derive(Debug, Default)]
pub struct RunResult {
    pub table: FrequencyTable,
    pub errors: Vec<(PathBuf, EngineError)>,
}
