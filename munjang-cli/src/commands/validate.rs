//! Validate command implementation

use anyhow::Result;
use clap::Args;
use munjang_core::Rules;
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rules configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub rules_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating rules configuration: {}",
            self.rules_config.display()
        );

        match Rules::from_file(&self.rules_config) {
            Ok(rules) => {
                let terminators: String = rules.target_terminator_chars().iter().collect();
                println!("✓ Configuration is valid!");
                println!("  Rules code: {}", rules.code());
                println!("  Rules name: {}", rules.name());
                println!("  Abbreviations: {}", rules.abbreviation_entries().len());
                println!("  Target terminators: {terminators}");
                println!(
                    "  Words per sentence: {}..={}",
                    rules.scoring().min_words,
                    rules.scoring().max_words
                );
                println!("  Review threshold: {}", rules.scoring().review_threshold);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            rules_config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test Rules"

[abbreviations]
titles = ["Dr", "Mr"]

[target]
terminators = [".", "다", "요"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            rules_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test"

[target]
terminators = ["."]

[scoring]
min_words = 10
max_words = 2
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            rules_config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            rules_config: PathBuf::from("/nonexistent/rules.toml"),
        };
        assert!(args.execute().is_err());
    }
}
