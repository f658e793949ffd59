use std::fmt;
use std::str;

use log::{debug, warn};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use crate::errors::CaptionError;

// @module: Timed-text decoding

// @const: Element carrying one caption line
const TEXT_ELEMENT: &[u8] = b"text";

// @struct: Single timed caption line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleEntry {
    // @field: Caption text, entities decoded
    #[serde(rename = "Text")]
    pub text: String,

    // @field: Start offset in seconds, as written by the source
    #[serde(rename = "Start")]
    pub start: String,

    // @field: Duration in seconds, as written by the source
    #[serde(rename = "Dur")]
    pub dur: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(text: impl Into<String>, start: impl Into<String>, dur: impl Into<String>) -> Self {
        SubtitleEntry {
            text: text.into(),
            start: start.into(),
            dur: dur.into(),
        }
    }

    /// Start offset parsed as fractional seconds
    pub fn start_seconds(&self) -> Result<f64, CaptionError> {
        parse_seconds(&self.start, "start")
    }

    /// End offset (start + duration) as fractional seconds.
    /// A missing duration counts as zero.
    pub fn end_seconds(&self) -> Result<f64, CaptionError> {
        let dur = if self.dur.is_empty() {
            0.0
        } else {
            parse_seconds(&self.dur, "dur")?
        };
        Ok(self.start_seconds()? + dur)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} +{}] {}", self.start, self.dur, self.text)
    }
}

fn parse_seconds(value: &str, field: &str) -> Result<f64, CaptionError> {
    value.trim().parse::<f64>().map_err(|_| {
        CaptionError::MalformedSubtitleData(format!("invalid {} value: \"{}\"", field, value))
    })
}

/// Seconds to whole milliseconds, rounded
pub fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0).round() as u64
}

// Entry being collected between <text> and </text>
struct PendingEntry {
    text: String,
    start: String,
    dur: String,
}

impl PendingEntry {
    fn from_element(element: &BytesStart) -> Result<Self, CaptionError> {
        let mut start = String::new();
        let mut dur = String::new();

        for attr in element.attributes() {
            let attr = attr.map_err(|e| CaptionError::MalformedSubtitleData(e.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|e| CaptionError::MalformedSubtitleData(e.to_string()))?;
            match attr.key.as_ref() {
                b"start" => start = value.into_owned(),
                b"dur" => dur = value.into_owned(),
                _ => {}
            }
        }

        Ok(Self {
            text: String::new(),
            start,
            dur,
        })
    }

    fn finish(self) -> SubtitleEntry {
        SubtitleEntry {
            text: self.text,
            start: self.start,
            dur: self.dur,
        }
    }
}

/// Decode HTML entities left in caption text after XML unescaping.
///
/// Some tracks double-encode (`&amp;#39;` arrives as `&#39;` after the XML
/// pass). This is a separate opt-in step; `parse_timed_text` applies only the
/// markup's own unescaping.
pub fn decode_html_entities(entries: Vec<SubtitleEntry>) -> Vec<SubtitleEntry> {
    entries
        .into_iter()
        .map(|entry| SubtitleEntry {
            text: html_escape::decode_html_entities(&entry.text).into_owned(),
            ..entry
        })
        .collect()
}

/// Parse timed-text markup into subtitle entries in document order.
///
/// Only `<text>` elements that are direct children of the root element count.
/// Character data nested inside other elements within a `<text>` is skipped.
/// Text is unescaped once, per XML rules.
pub fn parse_timed_text(data: &[u8]) -> Result<Vec<SubtitleEntry>, CaptionError> {
    let xml = str::from_utf8(data)
        .map_err(|e| CaptionError::MalformedSubtitleData(format!("invalid UTF-8: {}", e)))?;

    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();
    let mut pending: Option<PendingEntry> = None;
    let mut depth: usize = 0;
    let mut saw_root = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            CaptionError::MalformedSubtitleData(format!(
                "error at position {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(element) => {
                if depth == 0 && saw_root {
                    return Err(CaptionError::MalformedSubtitleData(
                        "multiple root elements".to_string(),
                    ));
                }
                saw_root = true;
                depth += 1;
                if depth == 2 && element.name().as_ref() == TEXT_ELEMENT {
                    pending = Some(PendingEntry::from_element(&element)?);
                }
            }
            Event::Empty(element) => {
                if depth == 0 {
                    if saw_root {
                        return Err(CaptionError::MalformedSubtitleData(
                            "multiple root elements".to_string(),
                        ));
                    }
                    saw_root = true;
                } else if depth == 1 && element.name().as_ref() == TEXT_ELEMENT {
                    entries.push(PendingEntry::from_element(&element)?.finish());
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some(entry) = pending.take() {
                        entries.push(entry.finish());
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) => {
                if depth == 2 {
                    if let Some(entry) = pending.as_mut() {
                        let unescaped = text
                            .unescape()
                            .map_err(|e| CaptionError::MalformedSubtitleData(e.to_string()))?;
                        entry.text.push_str(&unescaped);
                    }
                } else if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    warn!("Ignoring character data outside the timed-text root element");
                }
            }
            Event::CData(data) => {
                if depth == 2 {
                    if let Some(entry) = pending.as_mut() {
                        entry.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(CaptionError::MalformedSubtitleData(
            "document has no root element".to_string(),
        ));
    }
    if depth != 0 {
        return Err(CaptionError::MalformedSubtitleData(
            "unexpected end of document".to_string(),
        ));
    }

    debug!("Decoded {} subtitle entries", entries.len());
    Ok(entries)
}
