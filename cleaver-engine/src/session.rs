//! Streaming session: reader, decoder and dispatcher in one loop
//!
//! The session reads a fixed number of bytes at a time, decodes them and
//! feeds the characters to the dispatcher whenever it asks for more input.
//! Memory use is bounded by the chunk size plus the longest pending token.

use crate::decoder::Utf8Decoder;
use crate::error::Result;
use cleaver_core::{DispatchState, Dispatcher, Sink};
use std::io::{ErrorKind, Read};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Counters for one streaming run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionStats {
    /// Bytes read from the input
    pub bytes: usize,
    /// Characters decoded
    pub chars: usize,
    /// Non-empty reads
    pub chunks: usize,
    /// Tokens reported
    pub tokens: usize,
    /// Times a waiting cutter was resumed with more text
    pub resumptions: usize,
    /// Largest number of characters held in the buffer at once
    pub peak_buffer_chars: usize,
    /// Wall-clock time spent in `run`
    pub elapsed: Duration,
}

impl SessionStats {
    /// Throughput in bytes per second
    pub fn bytes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes as f64 / secs
        } else {
            0.0
        }
    }
}

/// Drives one dispatcher over one byte stream
pub struct StreamingSession<R> {
    reader: R,
    decoder: Utf8Decoder,
    dispatcher: Dispatcher,
    chunk: Vec<u8>,
    stats: SessionStats,
}

impl<R: Read> StreamingSession<R> {
    /// Create a session reading `chunk_size` bytes per refill
    pub fn new(reader: R, dispatcher: Dispatcher, chunk_size: usize) -> Self {
        Self {
            reader,
            decoder: Utf8Decoder::new(),
            dispatcher,
            chunk: vec![0; chunk_size.max(1)],
            stats: SessionStats::default(),
        }
    }

    /// The underlying dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Counters so far
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Segment the whole stream, reporting tokens to `sink`
    pub fn run(&mut self, sink: &mut dyn Sink) -> Result<SessionStats> {
        let started = Instant::now();
        loop {
            match self.dispatcher.run(sink)? {
                DispatchState::Done => break,
                DispatchState::AwaitingInput | DispatchState::Scanning => self.refill()?,
            }
        }

        let dispatch = self.dispatcher.stats();
        self.stats.tokens = dispatch.tokens;
        self.stats.resumptions = dispatch.resumptions;
        self.stats.peak_buffer_chars = self.dispatcher.buffer().peak_len();
        self.stats.elapsed += started.elapsed();
        info!(
            bytes = self.stats.bytes,
            chars = self.stats.chars,
            tokens = self.stats.tokens,
            resumptions = self.stats.resumptions,
            peak_buffer_chars = self.stats.peak_buffer_chars,
            "segmentation complete"
        );
        Ok(self.stats)
    }

    /// Read the next chunk, or signal end of stream
    fn refill(&mut self) -> Result<()> {
        let read = loop {
            match self.reader.read(&mut self.chunk) {
                Ok(read) => break read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        };

        if read == 0 {
            self.decoder.finish()?;
            self.dispatcher.finish();
            debug!(bytes = self.stats.bytes, "input exhausted");
            return Ok(());
        }

        let text = self.decoder.decode(&self.chunk[..read])?;
        self.stats.bytes = self.decoder.bytes_seen();
        self.stats.chunks += 1;
        self.stats.chars += self.dispatcher.feed(&text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cutters::{FallbackCutter, LetterCutter};
    use cleaver_core::{CutterRegistry, Token};
    use std::io::Cursor;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            CutterRegistry::builder()
                .with(LetterCutter)
                .with(FallbackCutter)
                .build(),
        )
    }

    #[test]
    fn test_small_chunks_match_single_read() {
        let text = "hello yang! paoding cuts well.";
        let mut whole: Vec<Token> = Vec::new();
        StreamingSession::new(Cursor::new(text), dispatcher(), 1024)
            .run(&mut whole)
            .unwrap();

        let mut chunked: Vec<Token> = Vec::new();
        let stats = StreamingSession::new(Cursor::new(text), dispatcher(), 3)
            .run(&mut chunked)
            .unwrap();

        assert_eq!(whole, chunked);
        assert_eq!(stats.bytes, text.len());
        assert_eq!(stats.chunks, text.len().div_ceil(3));
        assert_eq!(stats.tokens, chunked.len());
        assert!(stats.peak_buffer_chars < text.len());
    }

    #[test]
    fn test_byte_count_includes_split_sequences() {
        let text = "中华 paoding";
        let mut tokens: Vec<Token> = Vec::new();
        let stats = StreamingSession::new(Cursor::new(text), dispatcher(), 2)
            .run(&mut tokens)
            .unwrap();

        assert_eq!(stats.bytes, text.len());
        assert_eq!(stats.chars, text.chars().count());
        assert_eq!(stats.chunks, text.len().div_ceil(2));
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let mut tokens: Vec<Token> = Vec::new();
        let err = StreamingSession::new(Cursor::new(vec![b'a', 0xC3, b'(']), dispatcher(), 1)
            .run(&mut tokens)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::EncodingError { position: 1 }
        ));
    }

    #[test]
    fn test_empty_input() {
        let mut tokens: Vec<Token> = Vec::new();
        let stats = StreamingSession::new(Cursor::new(""), dispatcher(), 8)
            .run(&mut tokens)
            .unwrap();
        assert!(tokens.is_empty());
        assert_eq!(stats.chunks, 0);
    }
}
