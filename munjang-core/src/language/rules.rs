//! Runtime rules built from a configuration

use std::path::Path;

use crate::api::Error;
use crate::language::config::{RulesConfig, Scoring};
use crate::language::loader;
use crate::language::tables::{TermTable, Trie};

/// Compiled segmentation rules
///
/// Holds the lookup tables the engine consults on the hot path. Immutable
/// once built; share it through `Arc`.
#[derive(Debug, Clone)]
pub struct Rules {
    code: String,
    name: String,
    abbreviations: Trie,
    abbreviation_entries: Vec<String>,
    target_terminators: TermTable,
    target_terminator_chars: Vec<char>,
    scoring: Scoring,
}

impl Rules {
    /// Compile rules from a validated configuration
    pub fn from_config(config: &RulesConfig) -> Result<Self, Error> {
        config.validate().map_err(Error::Configuration)?;

        let mut abbreviation_entries: Vec<String> = config
            .abbreviations
            .entries()
            .map(|e| e.trim().trim_end_matches('.').to_string())
            .collect();
        abbreviation_entries.sort_by_key(|e| e.to_lowercase());
        abbreviation_entries.dedup_by(|a, b| a.eq_ignore_ascii_case(b));

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            abbreviations: Trie::from_entries(&abbreviation_entries, false),
            abbreviation_entries,
            target_terminators: TermTable::new(config.target.terminators.iter().copied()),
            target_terminator_chars: config.target.terminators.clone(),
            scoring: config.scoring.clone(),
        })
    }

    /// Parse and compile rules from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Error> {
        Self::from_config(&loader::parse_config(toml_str, "inline config")?)
    }

    /// Load and compile rules from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        Self::from_config(&loader::load_config_file(path)?)
    }

    /// Rules code (e.g. `en-ko`)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable rules name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Abbreviation lookup
    pub fn abbreviations(&self) -> &Trie {
        &self.abbreviations
    }

    /// Abbreviations sorted case-insensitively, without trailing periods
    pub fn abbreviation_entries(&self) -> &[String] {
        &self.abbreviation_entries
    }

    /// Translation-side terminator lookup
    pub fn target_terminators(&self) -> &TermTable {
        &self.target_terminators
    }

    /// Translation-side terminators as configured
    pub fn target_terminator_chars(&self) -> &[char] {
        &self.target_terminator_chars
    }

    /// Scoring thresholds
    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }
}
