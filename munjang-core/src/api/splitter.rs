//! Sentence splitter: the single entry point over the domain components

use std::sync::Arc;

use crate::api::{
    defaults, Config, Error, Input, Sentence, SentenceCounts, SplitMethod, SplitResult,
    TranslationStatus,
};
use crate::domain::{analyzer, match_sentences, segmenter, target, ProtectedSpanCodec, Scorer};
use crate::language::Rules;

/// Splits source passages into scored sentences and checks translations
///
/// Stateless between calls; share one instance freely across threads.
#[derive(Debug, Clone)]
pub struct Splitter {
    config: Config,
}

impl Splitter {
    /// Create a splitter with the embedded rules
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a splitter with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a splitter around compiled rules
    pub fn with_rules(rules: Arc<Rules>) -> Self {
        Self {
            config: Config::with_rules(rules),
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn rules(&self) -> &Rules {
        &self.config.rules
    }

    /// Source sentences, restored and trimmed
    pub fn segment_source(&self, source: &str) -> Vec<String> {
        let masked = ProtectedSpanCodec::new(self.rules().abbreviations()).mask(source);
        segmenter::segment(&masked.text)
            .into_iter()
            .map(crate::domain::unmask)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Translation sentences
    pub fn segment_translation(&self, translation: &str) -> Vec<String> {
        target::segment(translation, self.rules().target_terminators())
    }

    /// Split a passage, attaching translations when one is supplied
    ///
    /// Never fails: degenerate input yields an empty or low-confidence
    /// result.
    pub fn split(&self, source: &str, translation: Option<&str>) -> SplitResult {
        let scorer = Scorer::new(self.rules());
        let mut sentences: Vec<Sentence> = self
            .segment_source(source)
            .into_iter()
            .enumerate()
            .map(|(idx, text)| {
                let score = scorer.score(&text);
                Sentence {
                    ordinal: idx + 1,
                    text,
                    translation: None,
                    word_count: score.word_count,
                    confidence: score.confidence,
                    issues: score.issues,
                    alignment_confidence: None,
                }
            })
            .collect();

        if sentences.is_empty() {
            log::debug!("no sentences in {} bytes of input", source.len());
            return SplitResult::empty();
        }

        if let Some(translation) = translation.filter(|t| !t.trim().is_empty()) {
            let pairs = match_sentences(sentences.len(), self.segment_translation(translation));
            for pair in pairs {
                let sentence = &mut sentences[pair.source_index];
                sentence.translation = pair.translation;
                sentence.alignment_confidence = Some(pair.confidence);
            }
        }

        let warnings = sentences
            .iter()
            .filter(|s| !s.issues.is_empty())
            .map(|s| format!("sentence {}: {}", s.ordinal, s.issues.join(", ")))
            .collect();

        let mut result = SplitResult {
            sentences,
            overall_confidence: 0.0,
            method: SplitMethod::RuleBased,
            warnings,
        };

        let count = result.sentences.len() as f64;
        let mean = result.sentences.iter().map(|s| s.confidence).sum::<f64>() / count;
        let density = result.issue_count() as f64 / count;
        result.overall_confidence =
            (mean - defaults::ISSUE_DENSITY_PENALTY * density).clamp(0.0, 1.0);

        log::debug!(
            "split into {} sentences, overall confidence {:.3}",
            result.sentences.len(),
            result.overall_confidence
        );

        result
    }

    /// Diagnose a translation without producing sentence-level output
    pub fn translation_status(&self, source: &str, translation: Option<&str>) -> TranslationStatus {
        let source_count = self.segment_source(source).len();

        match translation.filter(|t| !t.trim().is_empty()) {
            None => analyzer::missing(source_count),
            Some(translation) => {
                let counts = SentenceCounts {
                    source: source_count,
                    translation: self.segment_translation(translation).len(),
                };
                let status = analyzer::assess(source, translation, counts);
                log::debug!(
                    "translation suspicion {} ({}), alignment {}",
                    status.suspicion_score,
                    status.quality,
                    status.alignment
                );
                status
            }
        }
    }

    /// Resolve inputs, then split
    ///
    /// Fails only when an input cannot be read or is not UTF-8; nothing is
    /// processed in that case.
    pub fn process(&self, source: Input, translation: Option<Input>) -> Result<SplitResult, Error> {
        let (source, translation) = resolve(source, translation)?;
        Ok(self.split(&source, translation.as_deref()))
    }

    /// Resolve inputs, then check the translation
    pub fn check(
        &self,
        source: Input,
        translation: Option<Input>,
    ) -> Result<TranslationStatus, Error> {
        let (source, translation) = resolve(source, translation)?;
        Ok(self.translation_status(&source, translation.as_deref()))
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(source: Input, translation: Option<Input>) -> Result<(String, Option<String>), Error> {
    let source = source.into_text()?;
    let translation = translation.map(Input::into_text).transpose()?;
    Ok((source, translation))
}
