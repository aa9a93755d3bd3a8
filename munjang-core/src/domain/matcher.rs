//! Sentence-pair matcher
//!
//! Equal counts pair positionally with high confidence. Unequal counts fall
//! back to positional pairing with low confidence; source sentences beyond
//! the last translation sentence get no translation, and surplus translation
//! sentences are dropped. There is no length or lexical re-alignment.

use crate::api::defaults;

/// Translation matched to one source sentence
#[derive(Debug, Clone, PartialEq)]
pub struct SentencePair {
    /// 0-based index into the source sentences
    pub source_index: usize,
    pub translation: Option<String>,
    pub confidence: f64,
}

/// Pair `source_count` source sentences with translation sentences
pub fn match_sentences(source_count: usize, translations: Vec<String>) -> Vec<SentencePair> {
    let counts_match = source_count == translations.len();
    let confidence = if counts_match {
        defaults::MATCHED_PAIR_CONFIDENCE
    } else {
        defaults::FALLBACK_PAIR_CONFIDENCE
    };

    if !counts_match {
        log::debug!(
            "sentence count mismatch: {source_count} source vs {} translation, pairing positionally",
            translations.len()
        );
    }

    let mut translations = translations.into_iter();
    (0..source_count)
        .map(|source_index| match translations.next() {
            Some(translation) => SentencePair {
                source_index,
                translation: Some(translation),
                confidence,
            },
            None => SentencePair {
                source_index,
                translation: None,
                confidence: defaults::UNPAIRED_CONFIDENCE,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equal_counts() {
        let pairs = match_sentences(2, strings(&["하나.", "둘."]));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].translation.as_deref(), Some("둘."));
        assert!(pairs.iter().all(|p| p.confidence == 0.9));
    }

    #[test]
    fn test_translation_runs_out() {
        let pairs = match_sentences(3, strings(&["하나.", "둘."]));
        let confidences: Vec<f64> = pairs.iter().map(|p| p.confidence).collect();
        assert_eq!(confidences, vec![0.6, 0.6, 0.0]);
        assert_eq!(pairs[2].translation, None);
        assert_eq!(pairs[2].source_index, 2);
    }

    #[test]
    fn test_surplus_translation_dropped() {
        let pairs = match_sentences(1, strings(&["하나.", "둘.", "셋."]));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].translation.as_deref(), Some("하나."));
        assert_eq!(pairs[0].confidence, 0.6);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(match_sentences(0, Vec::new()).is_empty());
        assert!(match_sentences(0, strings(&["하나."])).is_empty());

        let pairs = match_sentences(2, Vec::new());
        assert!(pairs.iter().all(|p| p.translation.is_none() && p.confidence == 0.0));
    }
}
