//! Output formatting module

use anyhow::Result;
use cleaver_api::{Metadata, TokenDTO};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Start the tokens of one input
    fn begin_source(&mut self, name: &str) -> Result<()>;

    /// Format and output a single token
    fn format_token(&mut self, token: &TokenDTO) -> Result<()>;

    /// Close the tokens of the current input
    fn end_source(&mut self, metadata: &Metadata) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one token per line
    Text,
    /// JSON array of inputs with their tokens
    Json,
    /// Markdown list per input
    Markdown,
}

impl OutputFormat {
    /// All formats with descriptions
    pub const ALL: [(OutputFormat, &'static str); 3] = [
        (OutputFormat::Text, "One token per line"),
        (OutputFormat::Json, "JSON array of inputs with tokens and metadata"),
        (OutputFormat::Markdown, "Markdown list per input"),
    ];

    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }
}

/// Formatting switches shared by all formats
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Print character offsets next to tokens
    pub include_offsets: bool,
    /// Indent JSON output
    pub pretty_json: bool,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    options: FormatOptions,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.include_offsets)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer, options.include_offsets))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        for (format, _) in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_name(format.name()), Some(format));
        }
        assert_eq!(OutputFormat::from_name("MD"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }
}
