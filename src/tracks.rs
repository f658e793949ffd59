/*!
 * Caption track discovery.
 *
 * The watch page embeds a large player configuration blob. Rather than parse
 * the whole page, `extract_caption_tracks` pattern-matches only the
 * `"captionTracks":[...]` slice and decodes that fragment alone. The pattern is
 * greedy: it runs from the first `"captionTracks":` key to the last
 * `isTranslatable":<bool>}]` sequence, which closes the array even though its
 * elements contain nested braces and brackets.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::CaptionError;

// @const: Caption track array embedded in the watch page
static CAPTION_TRACKS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"("captionTracks":.*isTranslatable":(true|false)}])"#).unwrap()
});

/// Track kind tag used for automatic speech recognition captions
pub const KIND_AUTO_GENERATED: &str = "asr";

/// Display name of a caption track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackName {
    #[serde(rename = "simpleText", default)]
    pub simple_text: String,
}

/// One selectable subtitle stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionTrack {
    // @field: Timed-text fetch URL
    #[serde(rename = "baseUrl")]
    pub base_url: String,

    // @field: Human readable name
    pub name: TrackName,

    #[serde(rename = "vssId")]
    pub vss_id: String,

    #[serde(rename = "languageCode")]
    pub language_code: String,

    // @field: Track kind, empty for authored captions
    pub kind: String,

    #[serde(rename = "isTranslatable")]
    pub is_translatable: bool,
}

impl CaptionTrack {
    /// Display name of the track
    pub fn display_name(&self) -> &str {
        &self.name.simple_text
    }

    /// Whether the track was produced by speech recognition
    pub fn is_auto_generated(&self) -> bool {
        self.kind == KIND_AUTO_GENERATED
    }
}

/// Ordered caption tracks, as listed by the source
pub type CaptionTrackList = Vec<CaptionTrack>;

#[derive(Deserialize)]
struct CaptionTracksEnvelope {
    #[serde(rename = "captionTracks", default)]
    caption_tracks: CaptionTrackList,
}

/// Locate the raw `"captionTracks":[...]` fragment in page bytes
pub fn find_caption_tracks_fragment(page: &[u8]) -> Option<&[u8]> {
    CAPTION_TRACKS_REGEX.find(page).map(|m| m.as_bytes())
}

/// Extract and decode the caption track list from raw watch-page bytes.
///
/// `video_id` only labels the error when no track list is present.
pub fn extract_caption_tracks(page: &[u8], video_id: &str) -> Result<CaptionTrackList, CaptionError> {
    let fragment = find_caption_tracks_fragment(page).ok_or_else(|| CaptionError::TracksNotFound {
        reference: video_id.to_string(),
    })?;

    let mut json = Vec::with_capacity(fragment.len() + 2);
    json.push(b'{');
    json.extend_from_slice(fragment);
    json.push(b'}');

    let envelope: CaptionTracksEnvelope = serde_json::from_slice(&json)
        .map_err(|e| CaptionError::MalformedTrackData(e.to_string()))?;

    debug!("Found {} caption track(s) for {}", envelope.caption_tracks.len(), video_id);
    Ok(envelope.caption_tracks)
}

/// Pick one track from the list.
///
/// With a language code, every track is scanned and the last exact match is
/// returned. With an empty code the first track is returned.
pub fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    language_code: &str,
    video_id: &str,
) -> Result<&'a CaptionTrack, CaptionError> {
    if language_code.is_empty() {
        return tracks.first().ok_or_else(|| CaptionError::EmptyTrackList {
            reference: video_id.to_string(),
        });
    }

    let mut selected = None;
    for track in tracks {
        if track.language_code == language_code {
            selected = Some(track);
        }
    }

    selected.ok_or_else(|| CaptionError::LanguageNotFound {
        reference: video_id.to_string(),
        language_code: language_code.to_string(),
    })
}
