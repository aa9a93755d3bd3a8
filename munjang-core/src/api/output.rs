//! Output types

use std::fmt;

use serde::{Deserialize, Serialize};

/// One source sentence with its review metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// 1-based position, dense across the result
    pub ordinal: usize,
    /// Restored, trimmed sentence text
    pub text: String,
    /// Aligned translation, if one was supplied and matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    /// Whitespace-separated token count of `text`
    pub word_count: usize,
    /// Reliability of the cut, 0.0 to 1.0
    pub confidence: f64,
    /// Human-readable issue labels
    pub issues: Vec<String>,
    /// Confidence of the sentence-pair match, present when a translation was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_confidence: Option<f64>,
}

impl Sentence {
    /// Whether the sentence should go to manual review
    pub fn needs_review(&self, threshold: f64) -> bool {
        self.confidence < threshold
    }
}

/// Strategy that produced a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMethod {
    /// Deterministic punctuation and abbreviation rules
    RuleBased,
}

impl SplitMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMethod::RuleBased => "rule_based",
        }
    }
}

impl fmt::Display for SplitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of splitting a passage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub sentences: Vec<Sentence>,
    pub overall_confidence: f64,
    pub method: SplitMethod,
    /// `"sentence N: issue, issue"`, one per sentence with issues
    pub warnings: Vec<String>,
}

impl SplitResult {
    /// Result for input that produced no sentences
    pub(crate) fn empty() -> Self {
        Self {
            sentences: Vec::new(),
            overall_confidence: 0.0,
            method: SplitMethod::RuleBased,
            warnings: Vec::new(),
        }
    }

    /// Sentences whose confidence is below `threshold`
    pub fn flagged(&self, threshold: f64) -> Vec<&Sentence> {
        self.sentences
            .iter()
            .filter(|s| s.needs_review(threshold))
            .collect()
    }

    /// Total number of issues across sentences
    pub fn issue_count(&self) -> usize {
        self.sentences.iter().map(|s| s.issues.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Correspondence between source and translation sentence lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Perfect,
    Mismatch,
    Missing,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alignment::Perfect => "perfect",
            Alignment::Mismatch => "mismatch",
            Alignment::Missing => "missing",
        })
    }
}

/// Translation quality verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Good,
    Suspicious,
    Unknown,
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quality::Good => "good",
            Quality::Suspicious => "suspicious",
            Quality::Unknown => "unknown",
        })
    }
}

/// Sentence counts on both sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceCounts {
    pub source: usize,
    pub translation: usize,
}

/// Diagnostic on a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationStatus {
    pub has_translation: bool,
    pub sentence_counts: SentenceCounts,
    pub alignment: Alignment,
    pub quality: Quality,
    /// Automatic handling is not trustworthy; route to a human or a secondary process
    pub needs_escalation: bool,
    /// 0 to 100
    pub suspicion_score: u8,
    /// Reasons behind the score
    pub signals: Vec<String>,
}
