//! Protected-span codec
//!
//! Hides terminal marks that must not end a sentence by swapping them for
//! private-use marker characters. Protected are:
//!
//! - terminal marks inside double quotes, except a mark that is the last
//!   character of the quoted content (that one ends the sentence)
//! - the same for single-quoted content of two or more characters
//! - every terminal mark inside parentheses
//! - the period of a configured abbreviation
//! - decimal points and enumerator periods (`2. Bake`)
//!
//! All of this happens in one left-to-right traversal. Quote and
//! parenthesis decisions are deferred until the closing character is seen;
//! an unclosed span protects nothing.

use serde::{Deserialize, Serialize};

use crate::language::tables::{classify_dot, DotRole, Trie};

/// Marker standing in for a protected `.`
pub const MARKER_PERIOD: char = '\u{E000}';
/// Marker standing in for a protected `!`
pub const MARKER_EXCLAMATION: char = '\u{E001}';
/// Marker standing in for a protected `?`
pub const MARKER_QUESTION: char = '\u{E002}';

/// Why a terminal mark was protected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionKind {
    Quotation,
    Parenthetical,
    Abbreviation,
    Decimal,
    Enumerator,
}

/// One masked character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Byte offset of the marker in the masked text
    pub offset: usize,
    /// Character the marker replaces
    pub original: char,
    pub kind: ProtectionKind,
}

/// Masked text and its substitution table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedText {
    pub text: String,
    pub substitutions: Vec<Substitution>,
}

impl MaskedText {
    /// Restore the original text
    pub fn unmask(&self) -> String {
        unmask(&self.text)
    }
}

/// `.`, `!` or `?`
#[inline]
pub fn is_terminal(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

#[inline]
pub fn is_marker(ch: char) -> bool {
    matches!(ch, MARKER_PERIOD | MARKER_EXCLAMATION | MARKER_QUESTION)
}

#[inline]
pub(crate) fn is_double_quote(ch: char) -> bool {
    matches!(ch, '"' | '\u{201C}' | '\u{201D}')
}

#[inline]
pub(crate) fn is_single_quote(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2018}' | '\u{2019}')
}

/// Quote character that may directly follow a terminal mark
#[inline]
pub(crate) fn is_closing_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201D}' | '\u{2019}')
}

fn marker_for(ch: char) -> Option<char> {
    match ch {
        '.' => Some(MARKER_PERIOD),
        '!' => Some(MARKER_EXCLAMATION),
        '?' => Some(MARKER_QUESTION),
        _ => None,
    }
}

fn original_of(marker: char) -> Option<char> {
    match marker {
        MARKER_PERIOD => Some('.'),
        MARKER_EXCLAMATION => Some('!'),
        MARKER_QUESTION => Some('?'),
        _ => None,
    }
}

/// Replace every marker with the character it stands for
pub fn unmask(text: &str) -> String {
    text.chars().map(|c| original_of(c).unwrap_or(c)).collect()
}

/// Codec bound to an abbreviation list
#[derive(Debug, Clone, Copy)]
pub struct ProtectedSpanCodec<'a> {
    abbreviations: &'a Trie,
}

/// Deferred protections for an open quote
#[derive(Debug, Default)]
struct OpenQuote {
    start: Option<usize>,
    pending: Vec<usize>,
}

impl OpenQuote {
    fn open(&mut self, at: usize) {
        self.start = Some(at);
        self.pending.clear();
    }

    fn abandon(&mut self) {
        self.start = None;
        self.pending.clear();
    }

    fn record(&mut self, at: usize) {
        if self.start.is_some() {
            self.pending.push(at);
        }
    }

    /// Close at `close`; every pending mark except one sitting right before
    /// the closing quote gets protected
    fn close(&mut self, close: usize, protection: &mut [Option<ProtectionKind>]) {
        for &idx in &self.pending {
            if idx + 1 != close {
                protection[idx].get_or_insert(ProtectionKind::Quotation);
            }
        }
        self.abandon();
    }
}

impl<'a> ProtectedSpanCodec<'a> {
    pub fn new(abbreviations: &'a Trie) -> Self {
        Self { abbreviations }
    }

    /// Mask protected terminal marks
    pub fn mask(&self, text: &str) -> MaskedText {
        if text.chars().any(is_marker) {
            log::warn!("input already contains marker characters; they will unmask as terminal marks");
        }

        let chars: Vec<char> = text.chars().collect();
        let protection = self.scan(&chars);

        let mut masked = String::with_capacity(text.len() + 8);
        let mut substitutions = Vec::new();
        for (ch, kind) in chars.iter().zip(&protection) {
            match (kind, marker_for(*ch)) {
                (Some(kind), Some(marker)) => {
                    substitutions.push(Substitution {
                        offset: masked.len(),
                        original: *ch,
                        kind: *kind,
                    });
                    masked.push(marker);
                }
                _ => masked.push(*ch),
            }
        }

        log::trace!("masked {} terminal marks", substitutions.len());
        MaskedText {
            text: masked,
            substitutions,
        }
    }

    /// Decide a protection for every char position
    fn scan(&self, chars: &[char]) -> Vec<Option<ProtectionKind>> {
        let mut protection = vec![None; chars.len()];
        let mut double = OpenQuote::default();
        let mut single = OpenQuote::default();
        // Start indices into `paren_pending`, one per open parenthesis
        let mut paren_starts: Vec<usize> = Vec::new();
        let mut paren_pending: Vec<usize> = Vec::new();

        for (i, &ch) in chars.iter().enumerate() {
            if is_double_quote(ch) {
                if double.start.is_some() {
                    double.close(i, &mut protection);
                } else {
                    double.open(i);
                }
            } else if is_single_quote(ch) {
                self.visit_single_quote(chars, i, &mut single, &mut protection);
            } else if ch == '(' {
                paren_starts.push(paren_pending.len());
            } else if ch == ')' {
                if let Some(start) = paren_starts.pop() {
                    for idx in paren_pending.drain(start..) {
                        protection[idx].get_or_insert(ProtectionKind::Parenthetical);
                    }
                }
            } else if is_terminal(ch) {
                if ch == '.' {
                    if let Some(kind) = self.classify_period(chars, i) {
                        protection[i] = Some(kind);
                    }
                }
                double.record(i);
                single.record(i);
                if !paren_starts.is_empty() {
                    paren_pending.push(i);
                }
            }
        }

        protection
    }

    fn visit_single_quote(
        &self,
        chars: &[char],
        i: usize,
        single: &mut OpenQuote,
        protection: &mut [Option<ProtectionKind>],
    ) {
        let prev_alnum = i > 0 && chars[i - 1].is_alphanumeric();
        let next = chars.get(i + 1).copied();
        let next_alnum = next.is_some_and(char::is_alphanumeric);

        match single.start {
            // Contraction inside a quote: don't, it's
            Some(_) if prev_alnum && next_alnum => {}
            Some(start) if !next_alnum => {
                if i - start - 1 >= 2 {
                    single.close(i, protection);
                } else {
                    single.abandon();
                }
            }
            Some(_) => single.open(i),
            None => {
                // Possessives and contractions never open a quote
                if !prev_alnum && next.is_some_and(|n| !n.is_whitespace()) {
                    single.open(i);
                }
            }
        }
    }

    fn classify_period(&self, chars: &[char], dot: usize) -> Option<ProtectionKind> {
        if self.abbreviations.find_abbrev(chars, dot).is_some() {
            return Some(ProtectionKind::Abbreviation);
        }

        match classify_dot(chars, dot) {
            DotRole::Decimal => Some(ProtectionKind::Decimal),
            DotRole::Enumerator => Some(ProtectionKind::Enumerator),
            DotRole::Ordinary => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> Trie {
        Trie::from_entries(["Dr", "Mr", "U.S", "etc", "e.g"], false)
    }

    fn kinds(masked: &MaskedText) -> Vec<ProtectionKind> {
        masked.substitutions.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_abbreviation_period_masked() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);
        let masked = codec.mask("Dr. Smith arrived. He left.");

        assert_eq!(masked.text, "Dr\u{E000} Smith arrived. He left.");
        assert_eq!(kinds(&masked), vec![ProtectionKind::Abbreviation]);
        assert_eq!(masked.substitutions[0].offset, 2);
        assert_eq!(masked.substitutions[0].original, '.');
    }

    #[test]
    fn test_quote_keeps_final_terminal() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);

        let masked = codec.mask(r#"He said "this is wrong." Then he left."#);
        assert!(masked.substitutions.is_empty());

        let masked = codec.mask(r#"She shouted "Stop! Go back." and ran."#);
        assert_eq!(masked.text, "She shouted \"Stop\u{E001} Go back.\" and ran.");
        assert_eq!(kinds(&masked), vec![ProtectionKind::Quotation]);
    }

    #[test]
    fn test_curly_quotes() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);
        let masked = codec.mask("He asked \u{201C}Why? When?\u{201D} Nobody knew.");
        assert_eq!(kinds(&masked), vec![ProtectionKind::Quotation]);
        assert_eq!(
            masked.text,
            "He asked \u{201C}Why\u{E002} When?\u{201D} Nobody knew."
        );
    }

    #[test]
    fn test_unclosed_quote_protects_nothing() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);
        let masked = codec.mask("He said \"wait. Then he left.");
        assert!(masked.substitutions.is_empty());
    }

    #[test]
    fn test_single_quotes_and_apostrophes() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);

        let masked = codec.mask("She wrote 'I don't know. Maybe.' Then she left.");
        assert_eq!(
            masked.text,
            "She wrote 'I don't know\u{E000} Maybe.' Then she left."
        );

        // Apostrophes alone never form a quoted span
        let masked = codec.mask("It's late. John's car won't start. We walk.");
        assert!(masked.substitutions.is_empty());

        // Single-character content is left alone
        let masked = codec.mask("Press 'a' to start. Then wait.");
        assert!(masked.substitutions.is_empty());
    }

    #[test]
    fn test_parentheses_mask_everything() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);

        let masked = codec.mask("It failed (see the log. It is long.) again. Fix it.");
        assert_eq!(
            masked.text,
            "It failed (see the log\u{E000} It is long\u{E000}) again. Fix it."
        );
        assert_eq!(
            kinds(&masked),
            vec![ProtectionKind::Parenthetical, ProtectionKind::Parenthetical]
        );
    }

    #[test]
    fn test_nested_and_unclosed_parentheses() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);

        let masked = codec.mask("A (b. (c!) d?) e.");
        assert_eq!(masked.text, "A (b\u{E000} (c\u{E001}) d\u{E002}) e.");

        let masked = codec.mask("A (b. C.");
        assert!(masked.substitutions.is_empty());

        let masked = codec.mask("A) b. C.");
        assert!(masked.substitutions.is_empty());
    }

    #[test]
    fn test_decimal_and_enumerator() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);

        let masked = codec.mask("The score was 3.5 points. Good job.");
        assert_eq!(masked.text, "The score was 3\u{E000}5 points. Good job.");
        assert_eq!(kinds(&masked), vec![ProtectionKind::Decimal]);

        let masked = codec.mask("1. Preheat the oven.\n2. Mix the flour.");
        assert_eq!(
            kinds(&masked),
            vec![ProtectionKind::Enumerator, ProtectionKind::Enumerator]
        );

        let masked = codec.mask("Steps: 1. Mix the flour 2. Bake it.");
        assert_eq!(
            masked.text,
            "Steps: 1\u{E000} Mix the flour 2\u{E000} Bake it."
        );
    }

    #[test]
    fn test_first_kind_wins() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);
        let masked = codec.mask("(Ask Dr. Kim.) Then go.");
        assert_eq!(
            kinds(&masked),
            vec![ProtectionKind::Abbreviation, ProtectionKind::Parenthetical]
        );
    }

    #[test]
    fn test_round_trip() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);
        for text in [
            "",
            "Dr. Smith (the U.S. envoy!) said \"no. never.\" etc. 3.5 'ok. fine.' done?",
            "한국어 문장입니다. 그렇죠?",
            "1. First\n2. Second",
        ] {
            let masked = codec.mask(text);
            assert_eq!(masked.unmask(), text);
            assert_eq!(unmask(&masked.text), text);
        }
    }

    #[test]
    fn test_marker_collision_does_not_panic() {
        let trie = trie();
        let codec = ProtectedSpanCodec::new(&trie);
        let masked = codec.mask("odd \u{E000} text.");
        assert_eq!(masked.unmask(), "odd . text.");
    }
}
