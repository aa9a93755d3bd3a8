//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Code for the new rules configuration
    #[arg(short = 'c', long, value_name = "CODE", default_value = "en-ko-custom")]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rules configuration template...");
        println!("  Rules code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the abbreviation lists and scoring thresholds");
        println!("2. Validate your configuration:");
        println!("   munjang validate --rules-config {}", self.output.display());
        println!("3. Use it for splitting:");
        println!(
            "   munjang split -i input.txt --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Sentence splitting rules: {code}

[metadata]
code = "{code}"
name = "Custom English to Korean"

# Abbreviations organized by category.
# Write entries without their trailing period; matching ignores case and
# needs a word boundary before the abbreviation.
# Category names are arbitrary - choose what makes sense for your texts.
[abbreviations]
titles = ["Mr", "Mrs", "Ms", "Dr", "Prof"]
organizations = ["U.S", "U.K", "Inc", "Corp", "Ltd"]
latin = ["etc", "e.g", "i.e", "vs"]
time = ["a.m", "p.m"]

# Add more categories as needed:
# months = ["Jan", "Feb", "Apr", "Aug", "Sept", "Oct", "Nov", "Dec"]
# units = ["ft", "lb", "oz", "kg", "km"]

# Characters that end a translation sentence when followed by whitespace
[target]
terminators = [".", "!", "?", "。", "！", "？", "다", "요", "죠", "까"]

# Sentence scoring (all optional)
[scoring]
# Fewer words than this is "sentence too short"
min_words = 3
# More words than this is "sentence too long"
max_words = 50
# Sentences scoring below this are flagged for review
review_threshold = 0.7
"#,
            code = self.code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use munjang_core::Rules;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            code: "en-ko-legal".to_string(),
            output: PathBuf::from("legal.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("en-ko-legal"));
        assert!(debug_str.contains("legal.toml"));
    }

    #[test]
    fn test_template_is_valid_rules() {
        let args = GenerateConfigArgs {
            code: "test".to_string(),
            output: PathBuf::from("test.toml"),
        };

        let template = args.generate_template();
        assert!(template.contains("code = \"test\""));

        let rules = Rules::from_toml_str(&template).unwrap();
        assert_eq!(rules.code(), "test");
        assert!(!rules.abbreviations().is_empty());
        assert!(rules.target_terminators().is_terminator('다'));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("rules.toml");

        let args = GenerateConfigArgs {
            code: "test".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let rules = Rules::from_file(&output_path).unwrap();
        assert_eq!(rules.code(), "test");
    }
}
