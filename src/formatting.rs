/*!
 * Presentation of decoded caption data.
 *
 * JSON output comes in a compact and a 4-space indented flavour. Both pass
 * through `unescape_markup` so that `<`, `>` and `&` in caption text stay
 * literal even if an encoder emitted them as `\u003c`, `\u003e`, `\u0026`.
 * Caption text routinely carries those characters (song lyrics, stage
 * directions like `<laughs>`).
 */

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fmt::Write;

use crate::errors::CaptionError;
use crate::subtitle_processor::{seconds_to_ms, SubtitleEntry};

const INDENT: &[u8] = b"    ";

/// Serialize to compact JSON, fields in declared order
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CaptionError> {
    let json = serde_json::to_string(value)?;
    Ok(unescape_markup(&json))
}

/// Serialize to JSON indented with four spaces
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, CaptionError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    let json = String::from_utf8(buffer).map_err(|e| CaptionError::Serialization(e.to_string()))?;
    Ok(unescape_markup(&json))
}

/// Replace the JSON unicode escapes for `<`, `>` and `&` with the characters.
///
/// Escape pairs such as `\\` are copied through untouched, so an escaped
/// backslash followed by the literal text `u003c` is not rewritten.
pub fn unescape_markup(json: &str) -> String {
    let mut output = String::with_capacity(json.len());
    let mut rest = json;

    while let Some(pos) = rest.find('\\') {
        output.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let replacement = tail.get(..6).and_then(|seq| match seq.to_ascii_lowercase().as_str() {
            "\\u003c" => Some('<'),
            "\\u003e" => Some('>'),
            "\\u0026" => Some('&'),
            _ => None,
        });

        if let Some(c) = replacement {
            output.push(c);
            rest = &tail[6..];
        } else {
            let escaped_len = tail[1..].chars().next().map_or(0, char::len_utf8);
            output.push_str(&tail[..1 + escaped_len]);
            rest = &tail[1 + escaped_len..];
        }
    }

    output.push_str(rest);
    output
}

/// Render entries as SubRip (SRT) text
pub fn to_srt(entries: &[SubtitleEntry]) -> Result<String, CaptionError> {
    let mut output = String::new();

    for (index, entry) in entries.iter().enumerate() {
        let start_ms = seconds_to_ms(entry.start_seconds()?);
        let end_ms = seconds_to_ms(entry.end_seconds()?);

        writeln!(output, "{}", index + 1).map_err(|e| CaptionError::Serialization(e.to_string()))?;
        writeln!(
            output,
            "{} --> {}",
            SubtitleEntry::format_timestamp(start_ms),
            SubtitleEntry::format_timestamp(end_ms)
        )
        .map_err(|e| CaptionError::Serialization(e.to_string()))?;
        writeln!(output, "{}\n", entry.text).map_err(|e| CaptionError::Serialization(e.to_string()))?;
    }

    Ok(output)
}
