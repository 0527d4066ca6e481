//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use cleaver_api::{Metadata, TokenDTO};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one object per input
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input name
    pub source: String,
    /// Tokens in text order
    pub tokens: Vec<TokenDTO>,
    /// Segmentation statistics
    pub metadata: Option<Metadata>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }

    fn current(&mut self) -> Result<&mut DocumentData> {
        self.documents
            .last_mut()
            .ok_or_else(|| anyhow::anyhow!("token reported outside of an input"))
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.documents.push(DocumentData {
            source: name.to_string(),
            tokens: Vec::new(),
            metadata: None,
        });
        Ok(())
    }

    fn format_token(&mut self, token: &TokenDTO) -> Result<()> {
        self.current()?.tokens.push(token.clone());
        Ok(())
    }

    fn end_source(&mut self, metadata: &Metadata) -> Result<()> {
        self.current()?.metadata = Some(metadata.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
