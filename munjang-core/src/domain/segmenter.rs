//! Sentence boundary segmenter for masked source text
//!
//! A boundary is a terminal mark, optionally followed by one closing quote,
//! followed by whitespace, where the next visible character can start a
//! sentence: an uppercase letter, any quote character (straight or curly,
//! either direction), a digit, a marker, or nothing at all (end of text).

use crate::domain::codec::{
    is_closing_quote, is_double_quote, is_marker, is_single_quote, is_terminal,
};

/// Byte offsets where a new sentence starts
///
/// One left-to-right pass; the scan resumes after the whitespace it
/// consumed and never revisits a position.
pub fn boundary_offsets(masked: &str) -> Vec<usize> {
    let chars: Vec<(usize, char)> = masked.char_indices().collect();
    let mut offsets = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !is_terminal(chars[i].1) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        if j < chars.len() && is_closing_quote(chars[j].1) {
            j += 1;
        }

        let whitespace_start = j;
        while j < chars.len() && chars[j].1.is_whitespace() {
            j += 1;
        }

        if j == whitespace_start {
            i += 1;
            continue;
        }

        match chars.get(j) {
            Some(&(offset, next)) if can_start_sentence(next) => offsets.push(offset),
            _ => {}
        }
        i = j;
    }

    offsets
}

#[inline]
fn can_start_sentence(ch: char) -> bool {
    ch.is_uppercase()
        || is_double_quote(ch)
        || is_single_quote(ch)
        || ch.is_ascii_digit()
        || is_marker(ch)
}

/// Split masked text into trimmed, non-empty spans
///
/// Spans are still masked; unmask them before showing them to anyone.
pub fn segment(masked: &str) -> Vec<&str> {
    let offsets = boundary_offsets(masked);
    let mut spans = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;

    for end in offsets.into_iter().chain(std::iter::once(masked.len())) {
        let span = masked[start..end].trim();
        if !span.is_empty() {
            spans.push(span);
        }
        start = end;
    }

    spans
}
