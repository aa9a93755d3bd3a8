//! Translation screening through the public entry points

use munjang_core::{translation_status, Alignment, Input, Quality, Splitter};

const SOURCE: &str = "The library opens at nine. Children gather for story time. Parents wait outside.";
const GOOD: &str = "도서관은 아홉 시에 문을 연다. 아이들이 이야기 시간에 모인다. 부모들은 밖에서 기다린다.";

#[test]
fn test_good_translation() {
    let status = translation_status(SOURCE, Some(GOOD));
    assert!(status.has_translation, "{status:?}");
    assert_eq!(status.alignment, Alignment::Perfect);
    assert_eq!(status.quality, Quality::Good);
    assert_eq!(status.suspicion_score, 0, "signals: {:?}", status.signals);
    assert!(!status.needs_escalation);
    assert!(status.signals.is_empty());
}

#[test]
fn test_untranslated_copy() {
    let status = translation_status(SOURCE, Some(SOURCE));
    assert_eq!(status.alignment, Alignment::Perfect);
    assert_eq!(status.quality, Quality::Unknown);
    assert!(status.needs_escalation);
    assert!(status
        .signals
        .iter()
        .any(|s| s == "untranslated words remain"));
    assert!(status
        .signals
        .iter()
        .any(|s| s == "almost no target-language content"));
}

#[test]
fn test_truncated_translation() {
    let status = translation_status(SOURCE, Some("도서관은 연다."));
    assert_eq!(status.alignment, Alignment::Mismatch);
    assert!(status.needs_escalation);
    assert!(status
        .signals
        .iter()
        .any(|s| s.starts_with("translation too short")));
}

#[test]
fn test_repeated_output() {
    let repeated = "도서관은 아홉 시에 문을 연다. 도서관은 아홉 시에 문을 연다. 부모들은 밖에서 기다린다.";
    let status = translation_status(SOURCE, Some(repeated));
    assert!(status
        .signals
        .iter()
        .any(|s| s == "repeated text block detected"));
    assert!(status.suspicion_score >= 40);
}

#[test]
fn test_missing_and_blank() {
    let missing = translation_status(SOURCE, None);
    assert_eq!(missing.sentence_counts.source, 3);
    assert_eq!(missing.sentence_counts.translation, 0);
    assert_eq!(missing.alignment, Alignment::Missing);
    assert_eq!(missing.signals, vec!["no translation present"]);

    assert_eq!(translation_status(SOURCE, Some("")), missing);
}

#[test]
fn test_check_from_inputs() {
    let status = Splitter::new()
        .check(Input::from_text(SOURCE), Some(Input::from_text(GOOD)))
        .unwrap();
    assert_eq!(status.sentence_counts.translation, 3);
    assert_eq!(status.quality, Quality::Good);
}

#[test]
fn test_status_serializes_snake_case() {
    let status = translation_status(SOURCE, None);
    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["alignment"], "missing");
    assert_eq!(json["quality"], "unknown");
    assert_eq!(json["needs_escalation"], true);
    assert_eq!(json["suspicion_score"], 100);
    assert_eq!(json["sentence_counts"]["source"], 3);
}
