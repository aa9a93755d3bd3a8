//! Translation alignment and suspicion analysis
//!
//! Independent signals each add to a suspicion score, which is clamped to
//! 0..=100 at the end and mapped to a quality verdict.

use std::sync::OnceLock;

use regex::Regex;

use crate::api::{Alignment, Quality, SentenceCounts, TranslationStatus};
use crate::domain::target::is_hangul;

/// Score added per signal
pub mod weights {
    pub const COUNT_MISMATCH: u32 = 40;
    pub const TOO_SHORT: u32 = 30;
    pub const TOO_LONG: u32 = 20;
    pub const UNTRANSLATED: u32 = 25;
    pub const LITTLE_HANGUL: u32 = 35;
    pub const REPEATED_BLOCK: u32 = 40;
    pub const MISSING: u8 = 100;
}

/// Thresholds the signals fire on
pub mod thresholds {
    pub const MIN_LENGTH_RATIO: f64 = 0.3;
    pub const MAX_LENGTH_RATIO: f64 = 3.0;
    pub const MAX_LATIN_RUN_RATIO: f64 = 0.3;
    pub const MIN_HANGUL_CHARS: usize = 10;
    pub const MIN_REPEATED_BLOCK: usize = 10;
    /// Longer repeats go unreported; keeps the scan at `n * MAX_REPEATED_BLOCK`
    pub const MAX_REPEATED_BLOCK: usize = 512;
    /// Scores below this are `good`
    pub const GOOD_BELOW: u8 = 20;
    /// Scores below this are `suspicious`; at or above, escalate
    pub const SUSPICIOUS_BELOW: u8 = 50;
}

/// Status for a passage without a translation
pub fn missing(source_count: usize) -> TranslationStatus {
    TranslationStatus {
        has_translation: false,
        sentence_counts: SentenceCounts {
            source: source_count,
            translation: 0,
        },
        alignment: Alignment::Missing,
        quality: Quality::Unknown,
        needs_escalation: true,
        suspicion_score: weights::MISSING,
        signals: vec!["no translation present".to_string()],
    }
}

/// Assess a translation against its source
///
/// `counts` come from the source and translation segmenters.
pub fn assess(source: &str, translation: &str, counts: SentenceCounts) -> TranslationStatus {
    let mut score: u32 = 0;
    let mut signals = Vec::new();
    let mut signal = |weight: u32, reason: String| {
        score += weight;
        signals.push(reason);
    };

    if counts.source != counts.translation {
        signal(
            weights::COUNT_MISMATCH,
            format!(
                "sentence count mismatch (source {}, translation {})",
                counts.source, counts.translation
            ),
        );
    }

    let source_len = source.trim().chars().count();
    let translation_len = translation.trim().chars().count();
    if source_len > 0 {
        let ratio = translation_len as f64 / source_len as f64;
        if ratio < thresholds::MIN_LENGTH_RATIO {
            signal(weights::TOO_SHORT, format!("translation too short (ratio {ratio:.2})"));
        } else if ratio > thresholds::MAX_LENGTH_RATIO {
            signal(weights::TOO_LONG, format!("translation too long (ratio {ratio:.2})"));
        }
    }

    if latin_run_ratio(translation) > thresholds::MAX_LATIN_RUN_RATIO {
        signal(weights::UNTRANSLATED, "untranslated words remain".to_string());
    }

    if translation.chars().filter(|&c| is_hangul(c)).count() < thresholds::MIN_HANGUL_CHARS {
        signal(
            weights::LITTLE_HANGUL,
            "almost no target-language content".to_string(),
        );
    }

    if has_repeated_block(
        translation,
        thresholds::MIN_REPEATED_BLOCK,
        thresholds::MAX_REPEATED_BLOCK,
    ) {
        signal(weights::REPEATED_BLOCK, "repeated text block detected".to_string());
    }

    let suspicion_score = score.min(100) as u8;
    let alignment = if counts.source == counts.translation {
        Alignment::Perfect
    } else {
        Alignment::Mismatch
    };
    let quality = if suspicion_score < thresholds::GOOD_BELOW {
        Quality::Good
    } else if suspicion_score < thresholds::SUSPICIOUS_BELOW {
        Quality::Suspicious
    } else {
        Quality::Unknown
    };

    TranslationStatus {
        has_translation: true,
        sentence_counts: counts,
        alignment,
        quality,
        needs_escalation: suspicion_score >= thresholds::SUSPICIOUS_BELOW
            || alignment == Alignment::Mismatch,
        suspicion_score,
        signals,
    }
}

fn latin_run() -> &'static Regex {
    static LATIN_RUN: OnceLock<Regex> = OnceLock::new();
    LATIN_RUN.get_or_init(|| Regex::new(r"[A-Za-z]{3,}").expect("valid latin-run pattern"))
}

/// Latin-alphabet runs of three or more letters per whitespace token
fn latin_run_ratio(translation: &str) -> f64 {
    let tokens = translation.split_whitespace().count();
    if tokens == 0 {
        return 0.0;
    }
    latin_run().find_iter(translation).count() as f64 / tokens as f64
}

/// Whether some block of `min_len..=max_len` chars is immediately repeated
///
/// For each period `p`, count consecutive positions where `c[i] == c[i + p]`;
/// a run of `p` such positions is a block of length `p` followed by itself.
/// Line breaks end a block.
fn has_repeated_block(text: &str, min_len: usize, max_len: usize) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();

    for period in min_len..=max_len.min(n / 2) {
        let mut run = 0;
        for i in 0..n - period {
            if chars[i] == chars[i + period] && chars[i] != '\n' {
                run += 1;
                if run >= period {
                    return true;
                }
            } else {
                run = 0;
            }
        }
    }

    false
}
