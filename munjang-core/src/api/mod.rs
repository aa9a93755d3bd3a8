//! Public API for sentence splitting and translation checks
//!
//! `Splitter` is the entry point. It is configured through `Config` and
//! returns plain value objects from `output`.

mod config;
mod error;
mod input;
mod output;
mod splitter;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{
    Alignment, Quality, Sentence, SentenceCounts, SplitMethod, SplitResult, TranslationStatus,
};
pub use splitter::Splitter;
