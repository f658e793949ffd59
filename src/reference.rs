use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::errors::CaptionError;

// @module: Video reference parsing

// @const: Video identifier pattern, first run of 11 allowed characters
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9_-]{11}").unwrap()
});

/// Watch-page endpoint used when no override is configured
pub const DEFAULT_WATCH_URL_BASE: &str = "https://youtube.com/watch";

/// Extract the 11-character video identifier from a bare ID or a URL.
///
/// The first qualifying run in the input wins, so for a full watch URL the
/// caller should pass something whose earlier segments are shorter than 11
/// characters (true of the usual `https://www.youtube.com/watch?v=` form).
pub fn extract_video_id(input: &str) -> Result<&str, CaptionError> {
    VIDEO_ID_REGEX
        .find(input)
        .map(|m| m.as_str())
        .ok_or_else(|| CaptionError::InvalidReference {
            input: input.to_string(),
        })
}

/// Build the watch-page URL for a video identifier.
///
/// `v` is appended to any query the base already carries.
pub fn watch_url(base: &str, video_id: &str) -> Result<String, CaptionError> {
    let mut url = Url::parse(base).map_err(|e| CaptionError::Network {
        url: base.to_string(),
        message: format!("invalid watch URL base: {}", e),
    })?;
    url.query_pairs_mut().append_pair("v", video_id);
    Ok(url.into())
}
