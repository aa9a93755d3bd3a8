//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use munjang_core::{Splitter, TranslationStatus};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::commands::init_logging;
use crate::error::CliError;
use crate::input::FileReader;
use crate::rules_source::RulesSource;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// English source file; `-` reads stdin
    #[arg(short, long, value_name = "FILE", required = true)]
    pub source: String,

    /// Korean translation file (omit to report a missing translation)
    #[arg(short, long, value_name = "FILE")]
    pub translation: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: StatusFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rules configuration file (default: built-in English to Korean rules)
    #[arg(long, value_name = "FILE", env = "MUNJANG_RULES")]
    pub rules: Option<PathBuf>,

    /// Exit with an error when the translation needs escalation
    #[arg(long)]
    pub fail_on_escalation: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported status formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusFormat {
    /// Human-readable summary
    Text,
    /// JSON object
    Json,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let rules_source = RulesSource::from_arg(self.rules.as_deref());
        log::info!("Using rules: {}", rules_source.display_name());
        let splitter = Splitter::with_config(rules_source.config(None)?)?;

        let source = FileReader::open(&self.source)?;
        let translation = self
            .translation
            .as_deref()
            .map(FileReader::open_path)
            .transpose()?;

        let status = splitter
            .check(source, translation)
            .map_err(|e| CliError::ProcessingError(format!("{}: {e}", self.source)))?;

        let report = match self.format {
            StatusFormat::Text => render_text(&status),
            StatusFormat::Json => format!("{}\n", serde_json::to_string_pretty(&status)?),
        };
        self.write(&report)?;

        if self.fail_on_escalation && status.needs_escalation {
            return Err(CliError::EscalationRequired(status.suspicion_score).into());
        }
        Ok(())
    }

    fn write(&self, report: &str) -> Result<()> {
        match &self.output {
            Some(path) => fs::write(path, report)
                .with_context(|| format!("Failed to write to {}", path.display())),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(report.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}

/// Human-readable status summary
fn render_text(status: &TranslationStatus) -> String {
    let mut out = String::new();
    let counts = status.sentence_counts;

    out.push_str(&format!("Alignment:   {}\n", status.alignment));
    out.push_str(&format!("Quality:     {}\n", status.quality));
    out.push_str(&format!("Suspicion:   {}/100\n", status.suspicion_score));
    out.push_str(&format!(
        "Sentences:   {} source, {} translation\n",
        counts.source, counts.translation
    ));
    out.push_str(&format!(
        "Escalate:    {}\n",
        if status.needs_escalation { "yes" } else { "no" }
    ));

    if !status.signals.is_empty() {
        out.push_str("Signals:\n");
        for signal in &status.signals {
            out.push_str(&format!("  - {signal}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SOURCE: &str = "The cat sat on the mat. It was warm.";

    fn check_args(source: PathBuf, output: PathBuf) -> CheckArgs {
        CheckArgs {
            source: source.display().to_string(),
            translation: None,
            format: StatusFormat::Text,
            output: Some(output),
            rules: None,
            fail_on_escalation: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_render_text() {
        let status = Splitter::new().translation_status(SOURCE, None);
        let text = render_text(&status);
        assert!(text.contains("Alignment:   missing\n"));
        assert!(text.contains("Suspicion:   100/100\n"));
        assert!(text.contains("Escalate:    yes\n"));
        assert!(text.contains("  - no translation present\n"));
    }

    #[test]
    fn test_good_translation_json() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("en.txt");
        let translation = temp_dir.path().join("ko.txt");
        let output = temp_dir.path().join("status.json");
        fs::write(&source, SOURCE).unwrap();
        fs::write(&translation, "고양이가 매트 위에 앉았다. 날씨가 따뜻했다.").unwrap();

        let mut args = check_args(source, output.clone());
        args.translation = Some(translation);
        args.format = StatusFormat::Json;
        args.fail_on_escalation = true;
        args.execute().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["alignment"], "perfect");
        assert_eq!(json["quality"], "good");
        assert_eq!(json["needs_escalation"], false);
    }

    #[test]
    fn test_fail_on_escalation() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("en.txt");
        fs::write(&source, SOURCE).unwrap();

        let mut args = check_args(source, temp_dir.path().join("status.txt"));
        assert!(args.execute().is_ok());

        args.fail_on_escalation = true;
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::EscalationRequired(100))
        ));
    }

    #[test]
    fn test_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let args = check_args(
            temp_dir.path().join("absent.txt"),
            temp_dir.path().join("status.txt"),
        );
        assert!(args.execute().is_err());
    }
}
