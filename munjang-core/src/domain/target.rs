//! Korean (translation-side) segmenter
//!
//! Korean sentences end in a small set of verb-final syllables (`다`, `요`,
//! ...) or punctuation. A terminator followed by whitespace is a boundary.
//! There is no abbreviation or quote protection on this side.

use crate::language::tables::TermTable;

/// Split translation text into trimmed, non-empty sentences
pub fn segment(text: &str, terminators: &TermTable) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !terminators.is_terminator(ch) {
            continue;
        }

        if chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
            let end = idx + ch.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, span: &str) {
    let span = span.trim();
    if !span.is_empty() {
        sentences.push(span.to_string());
    }
}

/// Hangul syllables and jamo (both the conjoining and compatibility blocks)
pub fn is_hangul(ch: char) -> bool {
    matches!(ch as u32, 0xAC00..=0xD7A3 | 0x1100..=0x11FF | 0x3130..=0x318F)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TermTable {
        TermTable::new(['.', '!', '?', '다', '요', '죠', '까'])
    }

    #[test]
    fn test_punctuated_sentences() {
        let sentences = segment("그는 집에 갔다. 그녀는 남았다! 왜 그랬을까?", &table());
        assert_eq!(
            sentences,
            vec!["그는 집에 갔다.", "그녀는 남았다!", "왜 그랬을까?"]
        );
    }

    #[test]
    fn test_suffix_without_punctuation() {
        let sentences = segment("비가 온다 우산을 챙겨요 알겠죠", &table());
        assert_eq!(sentences, vec!["비가 온다", "우산을 챙겨요", "알겠죠"]);
    }

    #[test]
    fn test_no_split_without_whitespace() {
        let sentences = segment("\"좋다.\"라고 말했다.", &table());
        assert_eq!(sentences, vec!["\"좋다.\"라고 말했다."]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(segment("", &table()).is_empty());
        assert!(segment("  \n ", &table()).is_empty());
    }

    #[test]
    fn test_abbreviations_are_not_protected() {
        let sentences = segment("Dr. 김이 왔다.", &table());
        assert_eq!(sentences, vec!["Dr.", "김이 왔다."]);
    }

    #[test]
    fn test_is_hangul() {
        assert!(is_hangul('한'));
        assert!(is_hangul('ㄱ'));
        assert!(is_hangul('\u{1100}'));
        assert!(!is_hangul('a'));
        assert!(!is_hangul('漢'));
    }
}
