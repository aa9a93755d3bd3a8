//! Per-sentence confidence scoring
//!
//! Every sentence starts at 1.0; each triggered check subtracts its penalty
//! and contributes an issue label. The result is clamped to `0.0..=1.0`.

use crate::domain::codec::{is_closing_quote, is_double_quote, is_single_quote, is_terminal};
use crate::language::Rules;

/// Penalty per check
pub mod penalties {
    pub const TOO_SHORT: f64 = 0.10;
    pub const TOO_LONG: f64 = 0.10;
    pub const ABBREVIATION: f64 = 0.05;
    pub const UNBALANCED_PARENTHESES: f64 = 0.15;
    pub const UNBALANCED_DOUBLE_QUOTES: f64 = 0.10;
    pub const UNBALANCED_SINGLE_QUOTES: f64 = 0.05;
    pub const LIST_NUMBER: f64 = 0.10;
    pub const MISSING_TERMINAL: f64 = 0.20;
}

/// Issue labels
pub mod labels {
    pub const TOO_SHORT: &str = "sentence too short";
    pub const TOO_LONG: &str = "sentence too long";
    pub const ABBREVIATION: &str = "abbreviation detected";
    pub const UNBALANCED_PARENTHESES: &str = "unbalanced parentheses";
    pub const UNBALANCED_DOUBLE_QUOTES: &str = "unbalanced double quotes";
    pub const UNBALANCED_SINGLE_QUOTES: &str = "unbalanced single quotes";
    pub const LIST_NUMBER: &str = "starts with list number";
    pub const MISSING_TERMINAL: &str = "missing terminal punctuation";
}

/// Score and issues for one sentence
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    pub word_count: usize,
    pub confidence: f64,
    pub issues: Vec<String>,
}

/// Scores restored (unmasked) sentences against a rule set
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    rules: &'a Rules,
}

impl<'a> Scorer<'a> {
    pub fn new(rules: &'a Rules) -> Self {
        Self { rules }
    }

    pub fn score(&self, sentence: &str) -> SentenceScore {
        let scoring = self.rules.scoring();
        let word_count = sentence.split_whitespace().count();
        let mut penalty = 0.0;
        let mut issues = Vec::new();

        let mut flag = |triggered: bool, amount: f64, label: String| {
            if triggered {
                penalty += amount;
                issues.push(label);
            }
        };

        flag(
            word_count < scoring.min_words,
            penalties::TOO_SHORT,
            labels::TOO_SHORT.to_string(),
        );
        flag(
            word_count > scoring.max_words,
            penalties::TOO_LONG,
            labels::TOO_LONG.to_string(),
        );

        let abbreviations = self.detect_abbreviations(sentence);
        flag(
            !abbreviations.is_empty(),
            penalties::ABBREVIATION,
            format!("{}: {}", labels::ABBREVIATION, abbreviations.join(", ")),
        );

        let opens = sentence.chars().filter(|&c| c == '(').count();
        let closes = sentence.chars().filter(|&c| c == ')').count();
        flag(
            opens != closes,
            penalties::UNBALANCED_PARENTHESES,
            labels::UNBALANCED_PARENTHESES.to_string(),
        );

        let doubles = sentence.chars().filter(|&c| is_double_quote(c)).count();
        flag(
            doubles % 2 == 1,
            penalties::UNBALANCED_DOUBLE_QUOTES,
            labels::UNBALANCED_DOUBLE_QUOTES.to_string(),
        );

        // Apostrophes make one or two single quotes common; only odd counts above that matter
        let singles = sentence.chars().filter(|&c| is_single_quote(c)).count();
        flag(
            singles > 2 && singles % 2 == 1,
            penalties::UNBALANCED_SINGLE_QUOTES,
            labels::UNBALANCED_SINGLE_QUOTES.to_string(),
        );

        flag(
            starts_with_list_number(sentence),
            penalties::LIST_NUMBER,
            labels::LIST_NUMBER.to_string(),
        );
        flag(
            !ends_with_terminal(sentence),
            penalties::MISSING_TERMINAL,
            labels::MISSING_TERMINAL.to_string(),
        );

        SentenceScore {
            word_count,
            confidence: (1.0 - penalty).clamp(0.0, 1.0),
            issues,
        }
    }

    /// Configured abbreviations found in the sentence, with their period,
    /// in order of first appearance
    pub fn detect_abbreviations(&self, sentence: &str) -> Vec<String> {
        let chars: Vec<char> = sentence.chars().collect();
        let mut found: Vec<String> = Vec::new();

        for (dot, _) in chars.iter().enumerate().filter(|&(_, &c)| c == '.') {
            if let Some(start) = self.rules.abbreviations().find_abbrev(&chars, dot) {
                let abbreviation: String = chars[start..=dot].iter().collect();
                if !found.contains(&abbreviation) {
                    found.push(abbreviation);
                }
            }
        }

        found
    }
}

/// Leading `12.`, which also covers a decimal such as `3.5`
fn starts_with_list_number(sentence: &str) -> bool {
    let digits = sentence.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && sentence[digits..].starts_with('.')
}

fn ends_with_terminal(sentence: &str) -> bool {
    let mut tail = sentence.trim_end().chars().rev();
    match tail.next() {
        Some(last) if is_terminal(last) => true,
        Some(last) if is_closing_quote(last) => tail.next().is_some_and(is_terminal),
        _ => false,
    }
}
