//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use cleaver_api::{Metadata, TokenDTO};
use std::io::Write;

/// Markdown formatter - one section per input with a numbered token list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_offsets: bool,
    source_tokens: usize,
    total_tokens: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_offsets: bool) -> Self {
        Self {
            writer,
            include_offsets,
            source_tokens: 0,
            total_tokens: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.source_tokens = 0;
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_token(&mut self, token: &TokenDTO) -> Result<()> {
        self.source_tokens += 1;
        self.total_tokens += 1;
        if self.include_offsets {
            writeln!(
                self.writer,
                "{}. `{}` ({}..{})",
                self.source_tokens, token.text, token.start, token.end
            )?;
        } else {
            writeln!(self.writer, "{}. `{}`", self.source_tokens, token.text)?;
        }
        Ok(())
    }

    fn end_source(&mut self, _metadata: &Metadata) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total tokens: {}*", self.total_tokens)?;
        self.writer.flush()?;
        Ok(())
    }
}
