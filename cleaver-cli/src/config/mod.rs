//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Cutters in priority order
    pub cutters: Vec<String>,

    /// Extra dictionary files, relative paths resolved against the config file
    pub dictionaries: Vec<PathBuf>,

    /// Read size (KB)
    pub chunk_size_kb: usize,

    /// Verify that cutters answer deterministically
    pub strict: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            cutters: vec![
                "dictionary".to_string(),
                "letter".to_string(),
                "number".to_string(),
                "fallback".to_string(),
            ],
            dictionaries: Vec::new(),
            chunk_size_kb: 64,
            strict: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Print character offsets next to each token
    pub include_offsets: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            include_offsets: false,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::parse(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            for dictionary in &mut config.segmentation.dictionaries {
                if dictionary.is_relative() {
                    *dictionary = base.join(&*dictionary);
                }
            }
        }
        Ok(config)
    }

    /// Parse configuration text
    pub fn parse(text: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()))?;
        if config.segmentation.chunk_size_kb == 0 {
            return Err(CliError::ConfigError("chunk_size_kb must be at least 1".to_string()).into());
        }
        Ok(config)
    }

    /// Load the given file, or fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.segmentation.cutters.len(), 4);
        assert_eq!(config.segmentation.chunk_size_kb, 64);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::parse(
            r#"
[segmentation]
cutters = ["letter", "fallback"]

[output]
include_offsets = true
"#,
        )
        .unwrap();

        assert_eq!(config.segmentation.cutters, vec!["letter", "fallback"]);
        assert_eq!(config.segmentation.chunk_size_kb, 64);
        assert!(config.output.include_offsets);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_rejects_zero_chunk() {
        let err = CliConfig::parse("[segmentation]\nchunk_size_kb = 0\n").unwrap_err();
        assert!(err.to_string().contains("chunk_size_kb"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(CliConfig::parse("[segmentation\n").is_err());
    }

    #[test]
    fn test_relative_dictionaries_resolved_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cleaver.toml");
        fs::write(&path, "[segmentation]\ndictionaries = [\"words.dic\"]\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(
            config.segmentation.dictionaries,
            vec![dir.path().join("words.dic")]
        );
    }
}
