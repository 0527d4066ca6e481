//! Incremental UTF-8 decoding of byte chunks

use crate::error::{EngineError, Result};

/// Decodes a byte stream chunk by chunk
///
/// A multi-byte sequence split across two chunks is held back until its
/// remaining bytes arrive.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
    consumed: usize,
}

impl Utf8Decoder {
    /// Create a decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes accepted so far, including held-back ones
    pub fn bytes_seen(&self) -> usize {
        self.consumed + self.pending.len()
    }

    /// Decode the next chunk, returning every complete character
    pub fn decode(&mut self, bytes: &[u8]) -> Result<String> {
        self.pending.extend_from_slice(bytes);
        match std::str::from_utf8(&self.pending) {
            Ok(text) => {
                let text = text.to_string();
                self.consumed += self.pending.len();
                self.pending.clear();
                Ok(text)
            }
            Err(err) if err.error_len().is_none() => {
                let valid = err.valid_up_to();
                let text = String::from_utf8_lossy(&self.pending[..valid]).into_owned();
                self.consumed += valid;
                self.pending.drain(..valid);
                Ok(text)
            }
            Err(err) => Err(EngineError::EncodingError {
                position: self.consumed + err.valid_up_to(),
            }),
        }
    }

    /// End the stream, failing if a truncated sequence is left over
    pub fn finish(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(EngineError::EncodingError {
                position: self.consumed,
            })
        }
    }
}
