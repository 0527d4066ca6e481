//! Segmenter and builder
//!
//! A [`Segmenter`] owns an immutable cutter registry and can run any number
//! of independent sessions over it.

use crate::config::{CutterKind, EngineConfig};
use crate::cutters::{DictionaryCutter, FallbackCutter, LetterCutter, NumberCutter};
use crate::dictionary::Dictionary;
use crate::error::{EngineError, Result};
use crate::input::Input;
use crate::session::{SessionStats, StreamingSession};
use cleaver_core::{Cutter, CutterRegistry, Dispatcher, DispatcherOptions, Sink, Token};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Configured segmentation engine
#[derive(Debug, Clone)]
pub struct Segmenter {
    registry: CutterRegistry,
    config: EngineConfig,
}

impl Segmenter {
    /// Create a segmenter with the default configuration
    pub fn new() -> Result<Self> {
        SegmenterBuilder::new().build()
    }

    /// Create a segmenter from an engine configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        SegmenterBuilder::new().config(config).build()
    }

    /// Start building a segmenter
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::new()
    }

    /// The registered cutters
    pub fn registry(&self) -> &CutterRegistry {
        &self.registry
    }

    /// The configuration this segmenter was built from
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fresh dispatcher over this segmenter's cutters
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::with_options(
            self.registry.clone(),
            DispatcherOptions {
                strict: self.config.strict,
            },
        )
    }

    /// Segment a complete text
    pub fn segment_str(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut dispatcher = self.dispatcher();
        dispatcher.feed(text)?;
        dispatcher.finish();
        dispatcher.run(&mut tokens)?;
        Ok(tokens)
    }

    /// Segment a byte stream, collecting all tokens
    pub fn segment_reader<R: Read>(&self, reader: R) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::new();
        self.segment_into(reader, &mut tokens)?;
        Ok(tokens)
    }

    /// Segment a byte stream, streaming tokens into `sink`
    pub fn segment_into<R: Read>(&self, reader: R, sink: &mut dyn Sink) -> Result<SessionStats> {
        self.session(reader).run(sink)
    }

    /// Segment any supported input
    pub fn segment_input(&self, input: Input, sink: &mut dyn Sink) -> Result<SessionStats> {
        let reader = input.open()?;
        self.segment_into(reader, sink)
    }

    /// Create a streaming session over `reader`
    pub fn session<R: Read>(&self, reader: R) -> StreamingSession<R> {
        StreamingSession::new(reader, self.dispatcher(), self.config.chunk_size)
    }
}

/// Builder for [`Segmenter`]
pub struct SegmenterBuilder {
    config: EngineConfig,
    dictionary: Option<Dictionary>,
    custom: Vec<Arc<dyn Cutter>>,
}

impl Default for SegmenterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmenterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            dictionary: None,
            custom: Vec::new(),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the built-in cutters in priority order
    pub fn cutters(mut self, cutters: Vec<CutterKind>) -> Self {
        self.config.cutters = cutters;
        self
    }

    /// Set the read size
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Enable strict determinism checks
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Use streaming configuration preset
    pub fn streaming(mut self) -> Self {
        self.config.chunk_size = EngineConfig::streaming().chunk_size;
        self
    }

    /// Merge a dictionary file
    pub fn dictionary_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.dictionaries.push(path.into());
        self
    }

    /// Merge one extra word
    pub fn word<S: Into<String>>(mut self, word: S) -> Self {
        self.config.extra_words.push(word.into());
        self
    }

    /// Merge an in-memory dictionary
    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        match &mut self.dictionary {
            Some(existing) => existing.merge(&dictionary),
            None => self.dictionary = Some(dictionary),
        }
        self
    }

    /// Skip the bundled word list
    pub fn without_builtin_dictionary(mut self) -> Self {
        self.config.no_builtin_dictionary = true;
        self
    }

    /// Register a custom cutter after the built-in ones
    pub fn cutter<C: Cutter + 'static>(mut self, cutter: C) -> Self {
        self.custom.push(Arc::new(cutter));
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Result<Segmenter> {
        self.config.validate()?;
        let has_fallback = self.config.cutters.contains(&CutterKind::Fallback);
        if has_fallback && !self.custom.is_empty() {
            return Err(EngineError::ConfigError(
                "custom cutters cannot follow the fallback cutter".to_string(),
            ));
        }

        let mut builder = CutterRegistry::builder();
        for kind in &self.config.cutters {
            builder = match kind {
                CutterKind::Dictionary => {
                    builder.with(DictionaryCutter::new(Arc::new(self.load_dictionary()?)))
                }
                CutterKind::Letter => builder.with(LetterCutter::new()),
                CutterKind::Number => builder.with(NumberCutter::new()),
                CutterKind::Fallback => builder.with(FallbackCutter::new()),
            };
        }
        for cutter in self.custom {
            builder = builder.with_shared(cutter);
        }

        let registry = builder.build();
        debug!(cutters = ?registry, chunk_size = self.config.chunk_size, "built segmenter");
        Ok(Segmenter {
            registry,
            config: self.config,
        })
    }

    fn load_dictionary(&self) -> Result<Dictionary> {
        let mut dictionary = if self.config.no_builtin_dictionary {
            Dictionary::new()
        } else {
            Dictionary::builtin()
        };
        for path in &self.config.dictionaries {
            dictionary.extend_from_file(path)?;
        }
        if let Some(extra) = &self.dictionary {
            dictionary.merge(extra);
        }
        for word in &self.config.extra_words {
            dictionary.insert(word);
        }
        Ok(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|token| token.text.as_str()).collect()
    }

    #[test]
    fn test_default_segmenter() {
        let segmenter = Segmenter::new().unwrap();
        assert_eq!(
            segmenter.registry().names(),
            vec!["dictionary", "letter", "number", "fallback"]
        );

        let tokens = segmenter.segment_str("庖丁解牛 paoding cuts 3.14!").unwrap();
        assert_eq!(
            texts(&tokens),
            vec!["庖丁解牛", "paoding", "cuts", "3.14", "!"]
        );
    }

    #[test]
    fn test_extra_words() {
        let segmenter = Segmenter::builder()
            .without_builtin_dictionary()
            .word("刀工")
            .build()
            .unwrap();
        let tokens = segmenter.segment_str("刀工好").unwrap();
        assert_eq!(texts(&tokens), vec!["刀工", "好"]);
    }

    #[test]
    fn test_custom_cutter_after_fallback_rejected() {
        let result = Segmenter::builder().cutter(LetterCutter).build();
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_missing_dictionary_file() {
        let result = Segmenter::builder()
            .dictionary_file("/nonexistent/cleaver.dic")
            .build();
        assert!(matches!(result, Err(EngineError::IoError(_))));
    }
}
