//! Input sources opened as byte streams

use cleaver_api::Input;
use std::fs;
use std::io;
use std::path::PathBuf;

/// One input to segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name used in output headers and messages
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Size in bytes, when known
    pub fn size(&self) -> Option<u64> {
        match self {
            InputSource::Stdin => None,
            InputSource::File(path) => fs::metadata(path).ok().map(|m| m.len()),
        }
    }

    /// Convert to a streaming API input
    pub fn to_input(&self) -> Input {
        match self {
            InputSource::Stdin => Input::from_reader(io::stdin()),
            InputSource::File(path) => Input::from_file(path.clone()),
        }
    }
}
