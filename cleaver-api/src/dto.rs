//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for segmentation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

impl From<Input> for cleaver_engine::Input {
    fn from(input: Input) -> Self {
        match input {
            Input::Text(text) => cleaver_engine::Input::Text(text),
            Input::File(path) => cleaver_engine::Input::File(path),
            Input::Bytes(bytes) => cleaver_engine::Input::Bytes(bytes),
            Input::Reader(reader) => cleaver_engine::Input::Reader(reader),
        }
    }
}

/// Token information for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDTO {
    /// Token text
    pub text: String,
    /// Character offset of the first character
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
}

impl TokenDTO {
    /// Create a new token DTO
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

impl From<cleaver_engine::Token> for TokenDTO {
    fn from(token: cleaver_engine::Token) -> Self {
        Self {
            text: token.text,
            start: token.start,
            end: token.end,
        }
    }
}

/// Type alias for convenience
pub type Token = TokenDTO;

/// Segmentation metadata with runtime statistics
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes read
    pub total_bytes: usize,
    /// Total characters decoded
    pub total_chars: usize,
    /// Number of tokens reported
    pub token_count: usize,
    /// Times a waiting cutter was resumed with more input
    pub resumptions: usize,
    /// Largest number of characters buffered at once
    pub peak_buffer_chars: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in MB/s
    pub throughput_mbps: f64,
    /// Cutters in priority order
    pub cutters: Vec<String>,
}

impl Metadata {
    /// Build metadata from the statistics of one streaming run
    pub fn from_stats(stats: &cleaver_engine::SessionStats, cutters: Vec<String>) -> Self {
        Self {
            total_bytes: stats.bytes,
            total_chars: stats.chars,
            token_count: stats.tokens,
            resumptions: stats.resumptions,
            peak_buffer_chars: stats.peak_buffer_chars,
            processing_time_ms: stats.elapsed.as_millis() as u64,
            throughput_mbps: stats.bytes_per_second() / 1_048_576.0,
            cutters,
        }
    }
}

/// Complete output with tokens and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Recognized tokens in text order
    pub tokens: Vec<TokenDTO>,
    /// Segmentation metadata
    pub metadata: Metadata,
}

impl Output {
    /// Token texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    /// Serialize to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
