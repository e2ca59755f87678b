// crates/engine/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open file '{path}': {source}")]
    FileOpen {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}' after {lines} lines: {source}")]
    FileRead {
        path: std::path::PathBuf,
        lines: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to spawn scanner for '{path}': {source}")]
    Spawn {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
