//! Public API for Cleaver text segmentation
//!
//! This crate provides a clean, stable interface for streaming
//! segmentation that hides the engine and protocol types.
//!
//! ```
//! let output = cleaver_api::segment_text("庖丁解牛 paoding cuts 3.5 oxen").unwrap();
//! assert_eq!(output.texts(), ["庖丁解牛", "paoding", "cuts", "3.5", "oxen"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use cleaver_engine::{emit_fn, CutterKind, Segmenter as EngineSegmenter};
use error::Result;
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output, Token, TokenDTO};
pub use error::ApiError;

/// Main entry point for segmentation
///
/// Cheap to clone; every call runs an independent session.
#[derive(Debug, Clone)]
pub struct Segmenter {
    inner: Arc<EngineSegmenter>,
    config: Config,
}

impl Segmenter {
    /// Create a segmenter with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a segmenter with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = EngineSegmenter::with_config(config.engine_config().clone())?;
        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Segment input and collect every token
    pub fn process(&self, input: Input) -> Result<Output> {
        let mut tokens = Vec::new();
        let metadata = self.stream(input, |token| tokens.push(token))?;
        Ok(Output { tokens, metadata })
    }

    /// Segment input, handing each token to `on_token` as soon as it is
    /// recognized
    pub fn stream<F>(&self, input: Input, on_token: F) -> Result<Metadata>
    where
        F: FnMut(TokenDTO),
    {
        let mut on_token = on_token;
        let mut sink = emit_fn(|token: cleaver_engine::Token| on_token(token.into()));
        let stats = self.inner.segment_input(input.into(), &mut sink)?;
        Ok(Metadata::from_stats(&stats, self.cutter_names()))
    }

    /// Segment text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Cutter names in priority order
    pub fn cutter_names(&self) -> Vec<String> {
        self.inner
            .registry()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Built-in cutter names and descriptions in default priority order
pub fn available_cutters() -> Vec<(&'static str, &'static str)> {
    CutterKind::ALL
        .iter()
        .map(|kind| (kind.name(), kind.description()))
        .collect()
}

/// Segment text with default configuration
pub fn segment_text(text: &str) -> Result<Output> {
    let segmenter = Segmenter::new()?;
    segmenter.process(Input::from_text(text))
}

/// Segment a file with default configuration
pub fn segment_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    let segmenter = Segmenter::new()?;
    segmenter.process(Input::from_file(path.as_ref().to_path_buf()))
}

/// Segment text with a given segmenter (compatibility function)
pub fn segment_with(segmenter: &Segmenter, text: &str) -> Result<Output> {
    segmenter.process(Input::from_text(text))
}
