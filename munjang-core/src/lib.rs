//! Rule-based English sentence segmentation with Korean translation alignment
//!
//! English passages are split into sentences without breaking on
//! abbreviations, decimals, list enumerators or punctuation inside quotes
//! and parentheses. Each sentence carries a confidence score and issue
//! labels so uncertain cuts can be routed to manual review. An optional
//! Korean translation is segmented, paired with the source sentences and
//! screened for signs of a missing, partial or untranslated rendering.
//!
//! # Architecture
//!
//! - **language**: rule tables (abbreviations, terminators, scoring) loaded
//!   from TOML
//! - **domain**: the pipeline stages, from protected-span masking through
//!   segmentation, scoring, matching and translation analysis
//! - **api**: the `Splitter` entry point and its value objects
//!
//! # Example
//!
//! ```rust
//! use munjang_core::Splitter;
//!
//! let splitter = Splitter::new();
//! let result = splitter.split(
//!     "Dr. Smith arrived at 3.30 today. He sat down.",
//!     Some("스미스 박사는 오늘 3시 30분에 도착했다. 그는 앉았다."),
//! );
//!
//! assert_eq!(result.sentences.len(), 2);
//! assert_eq!(result.sentences[0].text, "Dr. Smith arrived at 3.30 today.");
//! assert_eq!(result.sentences[1].translation.as_deref(), Some("그는 앉았다."));
//! ```

use std::sync::OnceLock;

pub mod api;
pub mod domain;
pub mod language;

pub use api::{
    Alignment, Config, ConfigBuilder, Error, Input, Quality, Sentence, SentenceCounts,
    SplitMethod, SplitResult, Splitter, TranslationStatus,
};
pub use language::Rules;

fn default_splitter() -> &'static Splitter {
    static SPLITTER: OnceLock<Splitter> = OnceLock::new();
    SPLITTER.get_or_init(Splitter::new)
}

/// Split a passage with the default rules
///
/// ```rust
/// let result = munjang_core::split("It rained. We stayed inside all day.", None);
/// assert_eq!(result.sentences.len(), 2);
/// ```
pub fn split(source: &str, translation: Option<&str>) -> SplitResult {
    default_splitter().split(source, translation)
}

/// Check a translation against its source with the default rules
///
/// ```rust
/// use munjang_core::Alignment;
///
/// let status = munjang_core::translation_status("It rained. We stayed in.", None);
/// assert_eq!(status.alignment, Alignment::Missing);
/// assert!(status.needs_escalation);
/// ```
pub fn translation_status(source: &str, translation: Option<&str>) -> TranslationStatus {
    default_splitter().translation_status(source, translation)
}
