//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::rules_source::RulesSource;

pub mod check;
pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into sentences with confidence scores
    Split(split::SplitArgs),

    /// Check a translation against its source
    Check(check::CheckArgs),

    /// Validate a rules configuration file
    Validate(validate::ValidateArgs),

    /// Write a rules configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Check(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the abbreviations that never end a sentence
    Abbreviations(ListAbbreviationsArgs),

    /// List available output formats
    Formats,
}

/// Arguments for `list abbreviations`
#[derive(Debug, Args)]
pub struct ListAbbreviationsArgs {
    /// Rules configuration file (default: built-in English to Korean rules)
    #[arg(long, value_name = "FILE", env = "MUNJANG_RULES")]
    pub rules: Option<PathBuf>,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Abbreviations(args) => {
                let source = RulesSource::from_arg(args.rules.as_deref());
                let rules = source.load()?;
                println!("Abbreviations ({}):", source.display_name());
                for entry in rules.abbreviation_entries() {
                    println!("  {entry}.");
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text      One sentence per line, translation indented below");
                println!("  json      JSON array of split results with review metadata");
                println!("  markdown  Numbered sentences with issues and review markers");
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
///
/// Later calls are ignored, so commands can be executed repeatedly in tests.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
