//! Rules source management for CLI

use anyhow::{Context, Result};
use munjang_core::language::default_rules;
use munjang_core::{Config, Rules};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::CliError;

/// Source of segmentation rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    /// Rules compiled into the binary
    BuiltIn,
    /// External TOML configuration file
    External(PathBuf),
}

impl RulesSource {
    /// From an optional `--rules` argument
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) => RulesSource::External(path.to_path_buf()),
            None => RulesSource::BuiltIn,
        }
    }

    /// Get the display name for the rules source
    pub fn display_name(&self) -> String {
        match self {
            RulesSource::BuiltIn => {
                let rules = default_rules();
                format!("Built-in: {} ({})", rules.name(), rules.code())
            }
            RulesSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load and compile the rules
    pub fn load(&self) -> Result<Arc<Rules>> {
        match self {
            RulesSource::BuiltIn => Ok(default_rules()),
            RulesSource::External(path) => {
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                let rules = Rules::from_file(path)
                    .with_context(|| format!("Failed to load rules from {}", path.display()))?;
                Ok(Arc::new(rules))
            }
        }
    }

    /// Build a splitter configuration, optionally overriding the review threshold
    pub fn config(&self, review_threshold: Option<f64>) -> Result<Config> {
        let mut builder = Config::builder();
        if let RulesSource::External(path) = self {
            builder = builder.rules_file(path);
        }
        if let Some(threshold) = review_threshold {
            builder = builder.review_threshold(threshold);
        }
        Ok(builder.build()?)
    }
}
