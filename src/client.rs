/*!
 * Caption client.
 *
 * Wires the pipeline together: watch-page fetch, track-list extraction,
 * track selection, timed-text fetch and decoding. Every operation performs
 * at most two sequential requests through the configured `Fetcher` and keeps
 * no state between calls. Callers that need cancellation or an overall
 * deadline wrap the returned future themselves.
 */

use log::{debug, info, warn};

use crate::app_config::Config;
use crate::errors::CaptionError;
use crate::formatting::{to_json, to_json_pretty};
use crate::reference::{extract_video_id, watch_url, DEFAULT_WATCH_URL_BASE};
use crate::subtitle_processor::{decode_html_entities, parse_timed_text, SubtitleEntry};
use crate::tracks::{extract_caption_tracks, select_track, CaptionTrackList};
use crate::transport::{Fetcher, HttpFetcher};

/// Client exposing the caption lookup operations over a transport
#[derive(Debug, Clone)]
pub struct CaptionClient<F: Fetcher = HttpFetcher> {
    fetcher: F,
    watch_url_base: String,
    decode_html_entities: bool,
}

impl CaptionClient<HttpFetcher> {
    /// Create a client with a default HTTP transport
    pub fn new() -> Result<Self, CaptionError> {
        Ok(Self::with_fetcher(HttpFetcher::new()?))
    }

    /// Create a client from configuration
    pub fn from_config(config: &Config) -> Result<Self, CaptionError> {
        Ok(Self::with_fetcher(HttpFetcher::from_config(config)?)
            .watch_url_base(&config.watch_url_base)
            .decode_html_entities(config.decode_html_entities))
    }
}

impl<F: Fetcher> CaptionClient<F> {
    /// Create a client over an explicit transport
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            watch_url_base: DEFAULT_WATCH_URL_BASE.to_string(),
            decode_html_entities: false,
        }
    }

    /// Override the watch-page endpoint
    pub fn watch_url_base(mut self, base: impl Into<String>) -> Self {
        self.watch_url_base = base.into();
        self
    }

    /// Run an HTML entity pass over caption text after XML unescaping
    pub fn decode_html_entities(mut self, enabled: bool) -> Self {
        self.decode_html_entities = enabled;
        self
    }

    /// The transport in use
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// List the caption tracks available for a video
    pub async fn get_tracks(&self, reference: &str) -> Result<CaptionTrackList, CaptionError> {
        let video_id = extract_video_id(reference)?;
        self.fetch_tracks(video_id).await
    }

    /// Available tracks as an indented JSON array
    pub async fn get_info(&self, reference: &str) -> Result<String, CaptionError> {
        let tracks = self.get_tracks(reference).await?;
        to_json_pretty(&tracks)
    }

    /// Transcript of the chosen track, in document order.
    ///
    /// An empty `language_code` selects the first listed track.
    pub async fn get_transcript(
        &self,
        reference: &str,
        language_code: &str,
    ) -> Result<Vec<SubtitleEntry>, CaptionError> {
        let video_id = extract_video_id(reference)?;
        let tracks = self.fetch_tracks(video_id).await?;
        let track = select_track(&tracks, language_code, video_id)?;
        if track.base_url.is_empty() {
            warn!("Track {} of {} has no timed-text URL", track.language_code, video_id);
            return Err(CaptionError::LanguageNotFound {
                reference: video_id.to_string(),
                language_code: language_code.to_string(),
            });
        }

        info!(
            "Fetching {} captions for {} ({})",
            track.language_code,
            video_id,
            if track.is_auto_generated() { "auto-generated" } else { "authored" }
        );

        let body = self.fetcher.get(&track.base_url).await?;
        let entries = parse_timed_text(&body)?;
        if self.decode_html_entities {
            return Ok(decode_html_entities(entries));
        }
        Ok(entries)
    }

    /// Transcript as compact JSON
    pub async fn get_transcript_json(&self, reference: &str, language_code: &str) -> Result<String, CaptionError> {
        let entries = self.get_transcript(reference, language_code).await?;
        to_json(&entries)
    }

    /// Transcript as JSON indented with four spaces
    pub async fn get_transcript_json_pretty(
        &self,
        reference: &str,
        language_code: &str,
    ) -> Result<String, CaptionError> {
        let entries = self.get_transcript(reference, language_code).await?;
        to_json_pretty(&entries)
    }

    async fn fetch_tracks(&self, video_id: &str) -> Result<CaptionTrackList, CaptionError> {
        let url = watch_url(&self.watch_url_base, video_id)?;
        debug!("Fetching watch page for {}", video_id);

        let page = self.fetcher.get(&url).await?;
        extract_caption_tracks(&page, video_id)
    }
}
