//! Rules configuration loader
//!
//! Manages the embedded default rules and loading from files.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::api::Error;
use crate::language::{config::RulesConfig, rules::Rules};

/// Embedded English-to-Korean rules
const EMBEDDED_EN_KO: &str = include_str!("../../configs/english-korean.toml");

static DEFAULT_RULES: OnceLock<Arc<Rules>> = OnceLock::new();

/// Parse the embedded default configuration
pub fn embedded_config() -> Result<RulesConfig, Error> {
    parse_config(EMBEDDED_EN_KO, "embedded en-ko")
}

/// Shared default rules, built once on first access
pub fn default_rules() -> Arc<Rules> {
    DEFAULT_RULES
        .get_or_init(|| {
            let rules = embedded_config()
                .and_then(|config| Rules::from_config(&config))
                .expect("Embedded rules config should always be valid");
            Arc::new(rules)
        })
        .clone()
}

/// Load a configuration from a TOML file
pub fn load_config_file(path: &Path) -> Result<RulesConfig, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Infrastructure(format!("Failed to read {}: {e}", path.display()))
    })?;
    parse_config(&content, &path.display().to_string())
}

/// Parse and validate a configuration from a TOML string
pub fn parse_config(toml_str: &str, origin: &str) -> Result<RulesConfig, Error> {
    let config: RulesConfig = toml::from_str(toml_str)
        .map_err(|e| Error::Configuration(format!("Failed to parse {origin}: {e}")))?;
    config
        .validate()
        .map_err(|e| Error::Configuration(format!("Invalid rules in {origin}: {e}")))?;

    log::debug!(
        "loaded rules '{}' from {origin} ({} abbreviations)",
        config.metadata.code,
        config.abbreviations.entries().count()
    );
    Ok(config)
}
