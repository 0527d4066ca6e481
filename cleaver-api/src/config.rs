//! High-level configuration API

use crate::error::{ApiError, Result};
use cleaver_engine::{parse_cutter_list, CutterKind, EngineConfig};
use std::path::PathBuf;

/// High-level configuration for segmentation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    inner: EngineConfig,
}

impl Config {
    /// Create a streaming configuration with small reads
    pub fn streaming() -> Self {
        Self {
            inner: EngineConfig::streaming(),
        }
    }

    /// Create a configuration that verifies cutter determinism
    pub fn strict() -> Self {
        Self {
            inner: EngineConfig::strict(),
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Cutter names in priority order
    pub fn cutters(&self) -> Vec<&'static str> {
        self.inner.cutters.iter().map(CutterKind::name).collect()
    }

    /// Bytes read per refill
    pub fn chunk_size(&self) -> usize {
        self.inner.chunk_size
    }

    /// Whether strict determinism checks are enabled
    pub fn is_strict(&self) -> bool {
        self.inner.strict
    }

    /// Extra dictionary files
    pub fn dictionaries(&self) -> &[PathBuf] {
        &self.inner.dictionaries
    }

    pub(crate) fn engine_config(&self) -> &EngineConfig {
        &self.inner
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the cutters by name, in priority order
    pub fn cutters<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.inner.cutters = names
            .into_iter()
            .map(|name| name.as_ref().parse::<CutterKind>())
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    /// Set the cutters from a comma-separated list
    pub fn cutter_list(mut self, list: &str) -> Result<Self> {
        self.config.inner.cutters = parse_cutter_list(list)?;
        Ok(self)
    }

    /// Set the read size in bytes
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.inner.chunk_size = size;
        self
    }

    /// Set the read size in kilobytes
    pub fn chunk_size_kb(self, kb: usize) -> Self {
        self.chunk_size(kb.saturating_mul(1024))
    }

    /// Enable strict determinism checks
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.inner.strict = strict;
        self
    }

    /// Add a dictionary file
    pub fn dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.inner.dictionaries.push(path.into());
        self
    }

    /// Add an extra dictionary word
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.config.inner.extra_words.push(word.into());
        self
    }

    /// Skip the bundled word list
    pub fn without_builtin_dictionary(mut self) -> Self {
        self.config.inner.no_builtin_dictionary = true;
        self
    }

    /// Use streaming configuration
    pub fn streaming(mut self) -> Self {
        self.config.inner.chunk_size = EngineConfig::streaming().chunk_size;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.inner.cutters.is_empty() {
            return Err(ApiError::Config("at least one cutter required".to_string()));
        }
        self.config.inner.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.cutters(),
            vec!["dictionary", "letter", "number", "fallback"]
        );
        assert!(!config.is_strict());
        assert!(Config::strict().is_strict());
        assert!(Config::streaming().chunk_size() < config.chunk_size());
    }

    #[test]
    fn test_builder_validation() {
        assert!(matches!(
            Config::builder().cutters(Vec::<String>::new()).unwrap().build(),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::builder().chunk_size(0).build(),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::builder().cutter_list("fallback,letter").unwrap().build(),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::builder().cutters(["letter", "runes"]),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_builder_settings() {
        let config = Config::builder()
            .cutters(["letter", "fallback"])
            .unwrap()
            .chunk_size_kb(8)
            .strict(true)
            .dictionary("words.dic")
            .build()
            .unwrap();
        assert_eq!(config.cutters(), vec!["letter", "fallback"]);
        assert_eq!(config.chunk_size(), 8 * 1024);
        assert!(config.is_strict());
        assert_eq!(config.dictionaries(), &[PathBuf::from("words.dic")]);
    }
}
