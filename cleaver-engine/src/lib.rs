//! Concrete segmentation for Cleaver
//!
//! This crate provides the built-in cutters (dictionary words, latin words,
//! numbers and a catch-all fallback), the word dictionary, incremental
//! UTF-8 decoding and the streaming session that feeds a
//! [`Dispatcher`](cleaver_core::Dispatcher) from any byte source.
//!
//! ```
//! use cleaver_engine::Segmenter;
//!
//! let segmenter = Segmenter::new().unwrap();
//! let tokens = segmenter.segment_str("庖丁解牛 paoding cuts well").unwrap();
//! let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(words, ["庖丁解牛", "paoding", "cuts", "well"]);
//! ```

#![warn(missing_docs)]

pub mod chars;
pub mod config;
pub mod cutters;
pub mod decoder;
pub mod dictionary;
pub mod error;
pub mod input;
pub mod segmenter;
pub mod session;

// Re-export key types
pub use config::{parse_cutter_list, CutterKind, EngineConfig};
pub use cutters::{DictionaryCutter, FallbackCutter, LetterCutter, NumberCutter};
pub use decoder::Utf8Decoder;
pub use dictionary::Dictionary;
pub use error::{EngineError, Result};
pub use input::Input;
pub use segmenter::{Segmenter, SegmenterBuilder};
pub use session::{SessionStats, StreamingSession};

// Re-export from core for convenience
pub use cleaver_core::{emit_fn, CutterRegistry, DispatchState, Dispatcher, Sink, Token};
