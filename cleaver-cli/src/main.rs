//! `cleaver` command-line entry point

use clap::Parser;
use cleaver_cli::commands::Commands;

/// Streaming text segmentation
#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
