//! Segmentation rules
//!
//! Rules are data-driven: a TOML configuration lists the abbreviations that
//! must not end a sentence, the translation-side terminators, and the
//! scoring thresholds. An English-to-Korean configuration is embedded.

pub mod config;
pub mod loader;
pub mod rules;
pub mod tables;

pub use config::RulesConfig;
pub use loader::{default_rules, embedded_config, load_config_file, parse_config};
pub use rules::Rules;
