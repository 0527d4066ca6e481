//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use cleaver_api::{Metadata, TokenDTO};
use std::io::Write;

/// Plain text formatter - outputs one token per line
///
/// Inputs after the first are separated by a blank line.
pub struct TextFormatter<W: Write> {
    writer: W,
    include_offsets: bool,
    sources: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_offsets: bool) -> Self {
        Self {
            writer,
            include_offsets,
            sources: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, _name: &str) -> Result<()> {
        if self.sources > 0 {
            writeln!(self.writer)?;
        }
        self.sources += 1;
        Ok(())
    }

    fn format_token(&mut self, token: &TokenDTO) -> Result<()> {
        if self.include_offsets {
            writeln!(self.writer, "{}\t{}\t{}", token.start, token.end, token.text)?;
        } else {
            writeln!(self.writer, "{}", token.text)?;
        }
        Ok(())
    }

    fn end_source(&mut self, _metadata: &Metadata) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
