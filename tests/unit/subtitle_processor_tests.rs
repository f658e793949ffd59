/*!
 * Tests for timed-text decoding
 */

use ytcaptions::errors::CaptionError;
use ytcaptions::subtitle_processor::{decode_html_entities, parse_timed_text, SubtitleEntry};

use crate::common::{TIMED_TEXT_DOUBLE_ENCODED, TIMED_TEXT_EN};

#[test]
fn test_parseTimedText_withFixture_shouldReturnEntriesInDocumentOrder() {
    let entries = parse_timed_text(TIMED_TEXT_EN.as_bytes()).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], SubtitleEntry::new("Hello & welcome", "0.5", "2.31"));
    assert_eq!(entries[1], SubtitleEntry::new("Tom & Jerry <laughs>", "2.81", "3"));
    assert_eq!(entries[2], SubtitleEntry::new("it's over", "5.81", "1.999"));
}

#[test]
fn test_parseTimedText_withDoubleEncodedEntities_shouldApplySingleXmlPass() {
    let entries = parse_timed_text(TIMED_TEXT_DOUBLE_ENCODED.as_bytes()).unwrap();
    assert_eq!(entries, vec![SubtitleEntry::new("x &amp; y &#39;z", "0", "1")]);
}

#[test]
fn test_parseTimedText_withEncodedNbsp_shouldKeepEntityText() {
    let xml = br#"<transcript><text start="0" dur="1">a &amp;nbsp;b</text></transcript>"#;
    let entries = parse_timed_text(xml).unwrap();
    assert_eq!(entries[0].text, "a &nbsp;b");
}

#[test]
fn test_decodeHtmlEntities_afterParse_shouldResolveSecondEncoding() {
    let entries = decode_html_entities(parse_timed_text(TIMED_TEXT_DOUBLE_ENCODED.as_bytes()).unwrap());
    assert_eq!(entries[0].text, "x & y 'z");
}

#[test]
fn test_parseTimedText_withUnsortedStarts_shouldNotReorder() {
    let xml = br#"<transcript><text start="9" dur="1">b</text><text start="1" dur="1">a</text></transcript>"#;
    let entries = parse_timed_text(xml).unwrap();
    assert_eq!(entries[0].text, "b");
    assert_eq!(entries[1].text, "a");
}

#[test]
fn test_parseTimedText_withTrailingZeros_shouldPreserveLiteralTimes() {
    let xml = br#"<transcript><text start="1.500" dur="2.000">x</text></transcript>"#;
    let entries = parse_timed_text(xml).unwrap();
    assert_eq!(entries[0].start, "1.500");
    assert_eq!(entries[0].dur, "2.000");
}

#[test]
fn test_parseTimedText_withMissingDur_shouldDefaultToEmpty() {
    let xml = br#"<transcript><text start="3">x</text></transcript>"#;
    let entries = parse_timed_text(xml).unwrap();
    assert_eq!(entries[0].dur, "");
}

#[test]
fn test_parseTimedText_withMultilineText_shouldKeepNewlines() {
    let xml = b"<transcript><text start=\"0\" dur=\"1\">line one\nline two</text></transcript>";
    let entries = parse_timed_text(xml).unwrap();
    assert_eq!(entries[0].text, "line one\nline two");
}

#[test]
fn test_parseTimedText_withOtherElements_shouldIgnoreThem() {
    let xml = br#"<transcript><head/><text start="0" dur="1">x</text><p>skip</p></transcript>"#;
    let entries = parse_timed_text(xml).unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_parseTimedText_withEmptyRoot_shouldReturnNoEntries() {
    let entries = parse_timed_text(br#"<?xml version="1.0" encoding="utf-8" ?><transcript></transcript>"#).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_parseTimedText_withEmptyBody_shouldFail() {
    assert!(matches!(parse_timed_text(b""), Err(CaptionError::MalformedSubtitleData(_))));
}

#[test]
fn test_parseTimedText_withHtmlBody_shouldFail() {
    let result = parse_timed_text(b"<html><body><p>Sorry</body></html>");
    assert!(matches!(result, Err(CaptionError::MalformedSubtitleData(_))));
}

#[test]
fn test_parseTimedText_withInvalidUtf8_shouldFail() {
    let result = parse_timed_text(&[0x3c, 0xff, 0xfe, 0x3e]);
    assert!(matches!(result, Err(CaptionError::MalformedSubtitleData(_))));
}

#[test]
fn test_startSeconds_withNonNumericStart_shouldFail() {
    let entry = SubtitleEntry::new("x", "soon", "1");
    assert!(matches!(entry.start_seconds(), Err(CaptionError::MalformedSubtitleData(_))));
}

#[test]
fn test_display_shouldShowTimesAndText() {
    let entry = SubtitleEntry::new("Hello", "1.5", "2");
    assert_eq!(entry.to_string(), "[1.5 +2] Hello");
}
