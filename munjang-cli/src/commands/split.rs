//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use munjang_core::{Input, SplitResult, Splitter};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::commands::init_logging;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, STDIN_MARKER};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::rules_source::RulesSource;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob); `-` reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Korean translation of the (single) input
    #[arg(short, long, value_name = "FILE")]
    pub translation: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Rules configuration file (default: built-in English to Korean rules)
    #[arg(long, value_name = "FILE", env = "MUNJANG_RULES")]
    pub rules: Option<PathBuf>,

    /// Confidence below which a sentence is flagged for review
    #[arg(long, value_name = "THRESHOLD")]
    pub review_threshold: Option<f64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of split results with review metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Where a passage comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    fn label(&self) -> String {
        match self {
            Source::Stdin => STDIN_MARKER.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn path(&self) -> Option<&Path> {
        match self {
            Source::Stdin => None,
            Source::File(path) => Some(path),
        }
    }

    fn open(&self) -> Result<Input> {
        match self {
            Source::Stdin => FileReader::open(STDIN_MARKER),
            Source::File(path) => FileReader::open_path(path),
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let rules_source = RulesSource::from_arg(self.rules.as_deref());
        log::info!("Using rules: {}", rules_source.display_name());

        let splitter = Splitter::with_config(rules_source.config(self.review_threshold)?)?;
        let review_threshold = splitter.config().review_threshold();

        let sources = self.resolve_sources()?;
        if self.translation.is_some() && sources.len() != 1 {
            return Err(CliError::AmbiguousTranslation(sources.len()).into());
        }

        let total_bytes = sources
            .iter()
            .filter_map(Source::path)
            .map(FileReader::file_size)
            .sum::<Result<u64>>()?;
        log::info!("Splitting {} input(s), {total_bytes} bytes on disk", sources.len());

        let results = self.split_sources(&splitter, &sources)?;

        let mut formatter = self.create_formatter(review_threshold, results.len() > 1)?;
        for (label, result) in &results {
            formatter.format_result(label, result)?;
        }
        formatter.finish()?;

        let sentences: usize = results.iter().map(|(_, r)| r.sentences.len()).sum();
        let flagged: usize = results
            .iter()
            .map(|(_, r)| r.flagged(review_threshold).len())
            .sum();
        log::info!("{sentences} sentences, {flagged} flagged for review");

        Ok(())
    }

    /// Expand `-` and glob patterns into sources
    fn resolve_sources(&self) -> Result<Vec<Source>> {
        let (stdin, patterns): (Vec<String>, Vec<String>) = self
            .input
            .iter()
            .cloned()
            .partition(|arg| arg == STDIN_MARKER);

        let mut sources = Vec::new();
        if !stdin.is_empty() {
            sources.push(Source::Stdin);
        }
        if !patterns.is_empty() {
            sources.extend(resolve_patterns(&patterns)?.into_iter().map(Source::File));
        }
        Ok(sources)
    }

    /// Split every source in parallel; results keep the source order
    ///
    /// Every failing source is logged. The error returned is the first
    /// failure in source order.
    fn split_sources(
        &self,
        splitter: &Splitter,
        sources: &[Source],
    ) -> Result<Vec<(String, SplitResult)>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let translation = self.translation.as_deref();
        let results = sources
            .par_iter()
            .map(|source| -> Result<(String, SplitResult)> {
                let label = source.label();
                let input = source.open()?;
                let translation = translation.map(FileReader::open_path).transpose()?;

                let result = splitter
                    .process(input, translation)
                    .map_err(|e| CliError::ProcessingError(format!("{label}: {e}")))?;

                log::debug!(
                    "{label}: {} sentences, overall confidence {:.3}",
                    result.sentences.len(),
                    result.overall_confidence
                );
                progress.file_completed(&label);
                Ok((label, result))
            })
            .collect::<Vec<_>>();

        progress.finish();

        let (results, failures): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);
        let mut failures = failures.into_iter().filter_map(Result::err);
        let Some(first) = failures.next() else {
            return Ok(results.into_iter().filter_map(Result::ok).collect());
        };

        log::error!("{first:#}");
        let remaining = failures.inspect(|e| log::error!("{e:#}")).count();
        if remaining == 0 {
            return Err(first);
        }
        Err(first.context(format!(
            "{} of {} inputs failed",
            remaining + 1,
            sources.len()
        )))
    }

    /// Create the formatter for the selected format and destination
    fn create_formatter(
        &self,
        review_threshold: f64,
        show_headers: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer).with_headers(show_headers)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, review_threshold)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, review_threshold)),
        })
    }
}
