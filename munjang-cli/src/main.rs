//! munjang command-line entry point

use anyhow::Result;
use clap::Parser;
use munjang_cli::commands::Commands;

/// Split English text into reviewable sentences and check Korean translations
#[derive(Debug, Parser)]
#[command(name = "munjang", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
