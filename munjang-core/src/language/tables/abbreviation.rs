//! Abbreviation trie for backward scanning from a period
//!
//! Abbreviations are stored without their trailing period and matched
//! against the word that ends right before a `.` in the text.

use std::collections::HashMap;

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether this node marks end of abbreviation
    is_end: bool,
}

/// Abbreviation trie
///
/// Nodes live in one contiguous array. Lookup is case-insensitive unless
/// the trie was built case-sensitive.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    case_sensitive: bool,
    len: usize,
}

impl Trie {
    /// Create empty trie
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            case_sensitive,
            len: 0,
        }
    }

    /// Build from a flat list of abbreviations
    pub fn from_entries<I, S>(entries: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new(case_sensitive);
        for entry in entries {
            trie.insert(entry.as_ref());
        }
        trie
    }

    /// Insert abbreviation into trie
    ///
    /// A trailing period is accepted and ignored, so `"Dr."` and `"Dr"`
    /// are the same entry.
    pub fn insert(&mut self, abbreviation: &str) {
        let trimmed = abbreviation.trim().trim_end_matches('.');
        if trimmed.is_empty() {
            return;
        }

        let mut current_idx = 0u32;

        for ch in trimmed.chars() {
            let ch = self.normalize(ch);
            let next_idx = match self.nodes[current_idx as usize].children.get(&ch) {
                Some(&child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current_idx as usize]
                        .children
                        .insert(ch, new_idx);
                    new_idx
                }
            };

            current_idx = next_idx;
        }

        let node = &mut self.nodes[current_idx as usize];
        if !node.is_end {
            node.is_end = true;
            self.len += 1;
        }
    }

    /// Number of distinct abbreviations stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the trie holds no abbreviations
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find an abbreviation ending right before the period at `dot`
    ///
    /// Returns the char index where the abbreviation starts. The word is
    /// delimited by whitespace or bracket/quote/sentence punctuation, which
    /// anchors the match at a word boundary.
    pub fn find_abbrev(&self, chars: &[char], dot: usize) -> Option<usize> {
        if dot == 0 || dot >= chars.len() || chars[dot] != '.' {
            return None;
        }

        let mut start = dot;
        while start > 0 && !is_word_delimiter(chars[start - 1]) {
            start -= 1;
        }

        if start == dot {
            return None;
        }

        self.match_at(&chars[start..dot]).then_some(start)
    }

    /// Check if the char slice matches an abbreviation
    fn match_at(&self, chars: &[char]) -> bool {
        let mut current_idx = 0u32;

        for &ch in chars {
            match self.nodes[current_idx as usize]
                .children
                .get(&self.normalize(ch))
            {
                Some(&next_idx) => current_idx = next_idx,
                None => return false,
            }
        }

        self.nodes[current_idx as usize].is_end
    }

    #[inline]
    fn normalize(&self, ch: char) -> char {
        if self.case_sensitive {
            ch
        } else {
            ch.to_lowercase().next().unwrap_or(ch)
        }
    }
}

#[inline]
fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            ',' | ';'
                | ':'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '"'
                | '\''
                | '\u{2018}'
                | '\u{2019}'
                | '\u{201C}'
                | '\u{201D}'
                | '!'
                | '?'
                | '/'
                | '\u{2013}'
                | '\u{2014}'
        )
}
