//! Configuration API for the splitter

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::Error;
use crate::language::{self, Rules, RulesConfig};

/// Default configuration constants
pub mod defaults {
    /// Pair confidence when source and translation sentence counts match
    pub const MATCHED_PAIR_CONFIDENCE: f64 = 0.9;

    /// Pair confidence for positional fallback pairs
    pub const FALLBACK_PAIR_CONFIDENCE: f64 = 0.6;

    /// Pair confidence for a source sentence left without a translation
    pub const UNPAIRED_CONFIDENCE: f64 = 0.0;

    /// Weight of the issues-per-sentence penalty on overall confidence
    pub const ISSUE_DENSITY_PENALTY: f64 = 0.1;
}

/// Splitter configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) rules: Arc<Rules>,
    pub(crate) review_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        let rules = language::default_rules();
        let review_threshold = rules.scoring().review_threshold;
        Self {
            rules,
            review_threshold,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Create a configuration around already compiled rules
    pub fn with_rules(rules: Arc<Rules>) -> Self {
        let review_threshold = rules.scoring().review_threshold;
        Self {
            rules,
            review_threshold,
        }
    }

    /// Compiled rules in use
    pub fn rules(&self) -> &Arc<Rules> {
        &self.rules
    }

    /// Confidence below which a sentence should be reviewed manually
    pub fn review_threshold(&self) -> f64 {
        self.review_threshold
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.review_threshold) {
            return Err(Error::Configuration(format!(
                "review_threshold must be within 0.0..=1.0, got {}",
                self.review_threshold
            )));
        }
        Ok(())
    }
}

/// Fluent builder for configuration
///
/// Starts from the embedded rules unless a rules file or TOML string is
/// given, then applies the overrides.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    rules_file: Option<PathBuf>,
    rules_toml: Option<String>,
    abbreviations: Option<Vec<String>>,
    extra_abbreviations: Vec<String>,
    target_terminators: Option<Vec<char>>,
    min_words: Option<usize>,
    max_words: Option<usize>,
    review_threshold: Option<f64>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rules from a TOML file
    pub fn rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_file = Some(path.into());
        self
    }

    /// Load rules from a TOML string
    pub fn rules_toml(mut self, toml_str: impl Into<String>) -> Self {
        self.rules_toml = Some(toml_str.into());
        self
    }

    /// Replace the abbreviation list
    pub fn abbreviations<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abbreviations = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Add abbreviations on top of the configured list
    pub fn extra_abbreviations<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_abbreviations
            .extend(entries.into_iter().map(Into::into));
        self
    }

    /// Replace the translation-side terminator characters
    pub fn target_terminators(mut self, terminators: impl IntoIterator<Item = char>) -> Self {
        self.target_terminators = Some(terminators.into_iter().collect());
        self
    }

    /// Word count below which a sentence is "too short"
    pub fn min_words(mut self, count: usize) -> Self {
        self.min_words = Some(count);
        self
    }

    /// Word count above which a sentence is "too long"
    pub fn max_words(mut self, count: usize) -> Self {
        self.max_words = Some(count);
        self
    }

    /// Confidence below which a sentence is flagged for review
    pub fn review_threshold(mut self, threshold: f64) -> Self {
        self.review_threshold = Some(threshold);
        self
    }

    fn has_rule_overrides(&self) -> bool {
        self.rules_file.is_some()
            || self.rules_toml.is_some()
            || self.abbreviations.is_some()
            || !self.extra_abbreviations.is_empty()
            || self.target_terminators.is_some()
            || self.min_words.is_some()
            || self.max_words.is_some()
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let rules = if self.has_rule_overrides() {
            let mut rules_config = self.base_rules_config()?;
            self.apply_overrides(&mut rules_config);
            Arc::new(Rules::from_config(&rules_config)?)
        } else {
            language::default_rules()
        };

        let mut config = Config::with_rules(rules);
        if let Some(threshold) = self.review_threshold {
            config.review_threshold = threshold;
        }

        config.validate()?;
        Ok(config)
    }

    fn base_rules_config(&self) -> Result<RulesConfig, Error> {
        match (&self.rules_file, &self.rules_toml) {
            (Some(_), Some(_)) => Err(Error::Configuration(
                "rules_file and rules_toml are mutually exclusive".into(),
            )),
            (Some(path), None) => language::load_config_file(path),
            (None, Some(toml_str)) => language::parse_config(toml_str, "inline config"),
            (None, None) => language::embedded_config(),
        }
    }

    fn apply_overrides(&self, rules_config: &mut RulesConfig) {
        if let Some(entries) = &self.abbreviations {
            rules_config.abbreviations.categories.clear();
            rules_config
                .abbreviations
                .categories
                .insert("custom".to_string(), entries.clone());
        }

        if !self.extra_abbreviations.is_empty() {
            rules_config
                .abbreviations
                .categories
                .entry("extra".to_string())
                .or_default()
                .extend(self.extra_abbreviations.iter().cloned());
        }

        if let Some(terminators) = &self.target_terminators {
            rules_config.target.terminators = terminators.clone();
        }

        if let Some(min_words) = self.min_words {
            rules_config.scoring.min_words = min_words;
        }

        if let Some(max_words) = self.max_words {
            rules_config.scoring.max_words = max_words;
        }

        if let Some(threshold) = self.review_threshold {
            rules_config.scoring.review_threshold = threshold;
        }
    }
}
