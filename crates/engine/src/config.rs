use crate::error::{EngineError, Result};
use crate::options::{OutputFormat, SortOrder};
use crate::tokenizer::DEFAULT_MIN_CHARS;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub paths: Vec<PathBuf>,
    /// Words shorter than this many characters are not counted.
    #[builder(default = "DEFAULT_MIN_CHARS")]
    pub min_chars: usize,
    /// Requested Pair lane capacity. Never goes below the number of files.
    #[builder(default)]
    pub channel_capacity: Option<usize>,

    #[builder(default)]
    pub sort: SortOrder,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub top: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: vec![],
            min_chars: DEFAULT_MIN_CHARS,
            channel_capacity: None,
            sort: SortOrder::default(),
            format: OutputFormat::default(),
            top: None,
        }
    }
}

impl Config {
    /// Reject settings the engine cannot honour.
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] when `min_chars` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.min_chars == 0 {
            return Err(EngineError::Config(
                "minimum word length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
