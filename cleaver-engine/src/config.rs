//! Configuration types for the engine

use crate::error::{EngineError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Built-in cutter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutterKind {
    /// Dictionary-driven CJK words
    Dictionary,
    /// Latin words
    Letter,
    /// Integers and decimals
    Number,
    /// Catch-all for every other visible character
    Fallback,
}

impl CutterKind {
    /// All built-in cutters in default priority order
    pub const ALL: [CutterKind; 4] = [
        CutterKind::Dictionary,
        CutterKind::Letter,
        CutterKind::Number,
        CutterKind::Fallback,
    ];

    /// Name used in configuration files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CutterKind::Dictionary => "dictionary",
            CutterKind::Letter => "letter",
            CutterKind::Number => "number",
            CutterKind::Fallback => "fallback",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            CutterKind::Dictionary => "CJK words by forward maximum matching against a dictionary",
            CutterKind::Letter => "Latin letter runs",
            CutterKind::Number => "Digit runs with an optional decimal part",
            CutterKind::Fallback => "Any other visible character, grouped by character class",
        }
    }
}

impl fmt::Display for CutterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CutterKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dictionary" | "dict" | "cjk" => Ok(CutterKind::Dictionary),
            "letter" | "letters" | "latin" => Ok(CutterKind::Letter),
            "number" | "numbers" | "digit" => Ok(CutterKind::Number),
            "fallback" | "other" => Ok(CutterKind::Fallback),
            other => Err(EngineError::ConfigError(format!(
                "Unknown cutter: {other}"
            ))),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Bytes read from the input per refill
    pub chunk_size: usize,
    /// Re-check every winning disposition and fail on non-determinism
    pub strict: bool,
    /// Built-in cutters in priority order
    pub cutters: Vec<CutterKind>,
    /// Extra dictionary files merged into the bundled word list
    pub dictionaries: Vec<PathBuf>,
    /// Extra words merged into the dictionary
    pub extra_words: Vec<String>,
    /// Skip the bundled word list
    pub no_builtin_dictionary: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 64 * 1024, // 64KB reads
            strict: false,
            cutters: CutterKind::ALL.to_vec(),
            dictionaries: Vec::new(),
            extra_words: Vec::new(),
            no_builtin_dictionary: false,
        }
    }
}

impl EngineConfig {
    /// Create a streaming configuration with small reads
    pub fn streaming() -> Self {
        Self {
            chunk_size: 4 * 1024, // 4KB reads keep the buffer small
            ..Self::default()
        }
    }

    /// Create a configuration that verifies cutter determinism
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Check the configuration for obvious mistakes
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(EngineError::ConfigError(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        if let Some(position) = self
            .cutters
            .iter()
            .position(|kind| *kind == CutterKind::Fallback)
        {
            if position + 1 != self.cutters.len() {
                return Err(EngineError::ConfigError(
                    "the fallback cutter must be registered last".to_string(),
                ));
            }
        }
        for (index, kind) in self.cutters.iter().enumerate() {
            if self.cutters[..index].contains(kind) {
                return Err(EngineError::ConfigError(format!(
                    "cutter '{kind}' is registered twice"
                )));
            }
        }
        Ok(())
    }
}

/// Parse a comma-separated cutter list such as `"dictionary,letter,fallback"`
pub fn parse_cutter_list(list: &str) -> Result<Vec<CutterKind>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(CutterKind::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let config = EngineConfig::default();
        assert_eq!(config.chunk_size, 64 * 1024);
        assert_eq!(config.cutters, CutterKind::ALL.to_vec());
        assert!(config.validate().is_ok());

        assert_eq!(EngineConfig::streaming().chunk_size, 4 * 1024);
        assert!(EngineConfig::strict().strict);
    }

    #[test]
    fn test_parse_cutters() {
        assert_eq!(
            parse_cutter_list("dict, letter,fallback").unwrap(),
            vec![CutterKind::Dictionary, CutterKind::Letter, CutterKind::Fallback]
        );
        assert!(parse_cutter_list("letter,emoji").is_err());
        assert_eq!("NUMBER".parse::<CutterKind>().unwrap(), CutterKind::Number);
    }

    #[test]
    fn test_validate() {
        let mut config = EngineConfig {
            cutters: vec![CutterKind::Fallback, CutterKind::Letter],
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        config.cutters = vec![CutterKind::Letter, CutterKind::Letter];
        assert!(config.validate().is_err());

        config.cutters = vec![CutterKind::Letter];
        config.chunk_size = 0;
        assert!(config.validate().is_err());
    }
}
