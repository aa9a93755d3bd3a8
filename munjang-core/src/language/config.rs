//! Configuration structures and validation
//!
//! This module defines the TOML schema for segmentation rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root rules configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    pub target: Target,
    #[serde(default)]
    pub scoring: Scoring,
}

/// Rules metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Abbreviation configuration
///
/// Categories are arbitrary names; entries are written without the
/// trailing period (`"Dr"`, `"Ph.D"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: BTreeMap<String, Vec<String>>,
}

impl Abbreviations {
    /// All entries across categories, in category order
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.categories.values().flatten().map(String::as_str)
    }
}

/// Translation-side terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub terminators: Vec<char>,
}

/// Per-sentence scoring thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoring {
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default = "default_review_threshold")]
    pub review_threshold: f64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            max_words: default_max_words(),
            review_threshold: default_review_threshold(),
        }
    }
}

fn default_min_words() -> usize {
    3
}

fn default_max_words() -> usize {
    50
}

fn default_review_threshold() -> f64 {
    0.7
}

impl RulesConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Rules code must not be empty".to_string());
        }

        if self.target.terminators.is_empty() {
            return Err("No target terminator characters defined".to_string());
        }

        if self.scoring.min_words > self.scoring.max_words {
            return Err(format!(
                "min_words ({}) must not exceed max_words ({})",
                self.scoring.min_words, self.scoring.max_words
            ));
        }

        if !(0.0..=1.0).contains(&self.scoring.review_threshold) {
            return Err(format!(
                "review_threshold must be within 0.0..=1.0, got {}",
                self.scoring.review_threshold
            ));
        }

        if let Some((category, _)) = self
            .abbreviations
            .categories
            .iter()
            .find(|(_, entries)| entries.iter().any(|e| e.trim().is_empty()))
        {
            return Err(format!("Empty abbreviation in category '{category}'"));
        }

        Ok(())
    }
}
