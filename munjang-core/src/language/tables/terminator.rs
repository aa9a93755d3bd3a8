//! Terminator lookup and dot classification

use std::collections::HashSet;

/// Terminator lookup table with an ASCII fast path
#[derive(Debug, Clone)]
pub struct TermTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII terminators (Korean suffix syllables, CJK punctuation)
    non_ascii: HashSet<char>,
}

impl TermTable {
    /// Create from list of terminator characters
    pub fn new(terminators: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in terminators {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check if character is a terminator
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

/// Role of a `.` given its surroundings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotRole {
    /// `3.5`
    Decimal,
    /// `1. First`: a number followed by a capitalized word
    Enumerator,
    /// Anything else; abbreviation checks happen elsewhere
    Ordinary,
}

/// Classify the dot at `dot` - caller guarantees `chars[dot] == '.'`
pub fn classify_dot(chars: &[char], dot: usize) -> DotRole {
    let prev = dot.checked_sub(1).map(|i| chars[i]);
    let next = chars.get(dot + 1).copied();

    if !prev.is_some_and(|p| p.is_ascii_digit()) {
        return DotRole::Ordinary;
    }

    if next.is_some_and(|n| n.is_ascii_digit()) {
        return DotRole::Decimal;
    }

    if followed_by_capitalized_word(chars, dot + 1) {
        return DotRole::Enumerator;
    }

    DotRole::Ordinary
}

fn followed_by_capitalized_word(chars: &[char], from: usize) -> bool {
    let rest = &chars[from.min(chars.len())..];
    let spaces = rest.iter().take_while(|c| c.is_whitespace()).count();
    spaces > 0 && rest.get(spaces).is_some_and(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_terminator_lookup() {
        let table = TermTable::new(['.', '!', '?', '다', '요', '。']);

        assert!(table.is_terminator('.'));
        assert!(table.is_terminator('?'));
        assert!(!table.is_terminator(','));

        assert!(table.is_terminator('다'));
        assert!(table.is_terminator('요'));
        assert!(table.is_terminator('。'));
        assert!(!table.is_terminator('가'));
    }

    #[test]
    fn test_decimal() {
        let text = chars("It was 3.5 points.");
        assert_eq!(classify_dot(&text, 8), DotRole::Decimal);
        assert_eq!(classify_dot(&text, 17), DotRole::Ordinary);
    }

    #[test]
    fn test_enumerator_at_line_start() {
        let text = chars("1. First item\n  12. Second item");
        assert_eq!(classify_dot(&text, 1), DotRole::Enumerator);
        assert_eq!(classify_dot(&text, 18), DotRole::Enumerator);
    }

    #[test]
    fn test_enumerator_mid_line() {
        let text = chars("Steps: 1. Mix the flour 2. Bake it.");
        assert_eq!(classify_dot(&text, 8), DotRole::Enumerator);
        assert_eq!(classify_dot(&text, 25), DotRole::Enumerator);
        assert_eq!(classify_dot(&text, 34), DotRole::Ordinary);

        let counted = chars("I counted to 3. Then I stopped.");
        assert_eq!(classify_dot(&counted, 14), DotRole::Enumerator);
    }

    #[test]
    fn test_number_without_capitalized_follower_is_ordinary() {
        let lowercase = chars("1. first item");
        assert_eq!(classify_dot(&lowercase, 1), DotRole::Ordinary);

        let at_end = chars("I have 3.");
        assert_eq!(classify_dot(&at_end, 8), DotRole::Ordinary);

        let no_space = chars("Item 3.Next");
        assert_eq!(classify_dot(&no_space, 6), DotRole::Ordinary);
    }
}
