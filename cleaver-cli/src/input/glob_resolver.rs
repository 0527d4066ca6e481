//! File pattern resolution using glob

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;

/// Resolve file patterns to input sources
///
/// `-` stands for standard input. Files are deduplicated and sorted;
/// standard input, if requested, comes first.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut stdin = false;
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            stdin = true;
            continue;
        }

        let paths = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if stdin {
        sources.insert(0, InputSource::Stdin);
    }
    if sources.is_empty() {
        return Err(CliError::NoInputFiles(patterns.to_vec()).into());
    }
    Ok(sources)
}
