//! Output formatting module

use anyhow::Result;
use munjang_core::SplitResult;

/// Trait for split-result formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the result for one source
    fn format_result(&mut self, source: &str, result: &SplitResult) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
