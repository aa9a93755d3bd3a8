//! munjang CLI library
//!
//! This library provides the command-line interface over `munjang-core`:
//! sentence splitting with review metadata and translation checks.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod rules_source;

pub use error::{CliError, CliResult};
