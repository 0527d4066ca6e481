//! API error types

use cleaver_engine::EngineError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Segmentation failed inside the engine
    #[error("engine error: {0}")]
    Engine(String),

    /// A cutter broke the dissection contract
    #[error("cutter contract violated: {0}")]
    Contract(String),

    /// Input is not valid UTF-8 at the given byte
    #[error("invalid UTF-8 at byte {position}")]
    Encoding {
        /// Absolute byte offset of the bad sequence
        position: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Invalid configuration or dictionary
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ConfigError(msg) => ApiError::Config(msg),
            err @ EngineError::DictionaryError { .. } => ApiError::Config(err.to_string()),
            EngineError::EncodingError { position } => ApiError::Encoding { position },
            EngineError::Core(core) if core.is_contract_violation() => {
                ApiError::Contract(core.to_string())
            }
            other => ApiError::Engine(other.to_string()),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
