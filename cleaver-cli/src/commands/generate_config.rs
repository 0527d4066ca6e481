//! Generate config command implementation

use crate::error::{CliError, CliResult};
use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Commented configuration template
pub const CONFIG_TEMPLATE: &str = r#"# Cleaver configuration

[segmentation]
# Cutters in priority order. When several cutters could start a token at
# the same position, the first one listed wins. "fallback" must be last.
# Run `cleaver list cutters` for descriptions.
cutters = ["dictionary", "letter", "number", "fallback"]

# Extra dictionary files (one word per line, '#' starts a comment).
# Relative paths are resolved against this file's directory.
dictionaries = []

# Bytes read per refill, in KB
chunk_size_kb = 64

# Re-check every cutter decision and fail on inconsistent answers
strict = false

[output]
# text, json or markdown
default_format = "text"

# Indent JSON output
pretty_json = true

# Print character offsets next to tokens
include_offsets = false
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::OutputExists(self.output.display().to_string()).into());
        }

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!(
            "Use it with: cleaver segment -i <FILES> -c {}",
            self.output.display()
        );
        Ok(())
    }
}
