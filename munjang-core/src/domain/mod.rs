//! Segmentation and alignment components
//!
//! Each module is a pure function of its inputs; `Splitter` wires them
//! together.

pub mod analyzer;
pub mod codec;
pub mod matcher;
pub mod scorer;
pub mod segmenter;
pub mod target;

pub use codec::{unmask, MaskedText, ProtectedSpanCodec, ProtectionKind, Substitution};
pub use matcher::{match_sentences, SentencePair};
pub use scorer::{Scorer, SentenceScore};
