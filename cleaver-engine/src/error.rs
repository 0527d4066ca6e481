//! Engine error types

use cleaver_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Protocol error raised by the dispatcher
    #[error("segmentation error: {0}")]
    Core(#[from] CoreError),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Input is not valid UTF-8
    #[error("invalid UTF-8 at byte {position}")]
    EncodingError {
        /// Absolute byte position of the first invalid byte
        position: usize,
    },

    /// Malformed dictionary
    #[error("dictionary {source_name} line {line}: {reason}")]
    DictionaryError {
        /// File name or other label of the dictionary source
        source_name: String,
        /// One-based line number
        line: usize,
        /// What is wrong with the entry
        reason: String,
    },
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
