//! CLI command implementations

use crate::error::CliResult;
use crate::output::OutputFormat;
use clap::Subcommand;
use std::io::{self, Write};

pub mod generate_config;
pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text files into tokens
    Segment(segment::SegmentArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in cutters in default priority order
    Cutters,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::List { subcommand } => {
                let stdout = io::stdout();
                subcommand.write_to(&mut stdout.lock())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn write_to(&self, out: &mut dyn Write) -> CliResult<()> {
        match self {
            ListCommands::Cutters => {
                writeln!(out, "Built-in cutters (default priority order):")?;
                for (name, description) in cleaver_api::available_cutters() {
                    writeln!(out, "  {name:<12} {description}")?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                for (format, description) in OutputFormat::ALL {
                    writeln!(out, "  {:<12} {description}", format.name())?;
                }
            }
        }
        Ok(())
    }
}
