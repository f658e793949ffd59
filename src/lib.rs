/*!
 * # ytcaptions
 *
 * A Rust library for fetching video caption tracks and their timed text.
 *
 * ## Features
 *
 * - Accept a bare 11-character video ID or a full watch URL
 * - List the caption tracks a video offers (language, kind, translatability)
 * - Fetch one track's timed text as structured entries
 * - Render transcripts as compact JSON, indented JSON or SRT
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `reference`: Video identifier extraction and watch-page URLs
 * - `tracks`: Caption track list extraction and track selection
 * - `subtitle_processor`: Timed-text decoding into `SubtitleEntry` values
 * - `formatting`: JSON and SRT presentation
 * - `transport`: The `Fetcher` trait with HTTP and mock implementations
 * - `client`: `CaptionClient`, the pipeline tying the pieces together
 * - `app_config`: Configuration management
 * - `app_controller`: Command execution for the binary
 * - `errors`: Custom error types for the application
 *
 * ## Example
 *
 * ```no_run
 * # async fn run() -> Result<(), ytcaptions::CaptionError> {
 * let entries = ytcaptions::get_transcript("https://www.youtube.com/watch?v=CLkkj3aka4g", "en").await?;
 * for entry in entries {
 *     println!("{}", entry);
 * }
 * # Ok(())
 * # }
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod client;
pub mod errors;
pub mod formatting;
pub mod reference;
pub mod subtitle_processor;
pub mod tracks;
pub mod transport;

// Re-export main types for easier usage
pub use app_config::{Config, OutputFormat};
pub use client::CaptionClient;
pub use errors::{AppError, CaptionError};
pub use subtitle_processor::SubtitleEntry;
pub use tracks::{CaptionTrack, CaptionTrackList};
pub use transport::{Fetcher, HttpFetcher, MockFetcher};

/// Available caption tracks as an indented JSON array, using a default HTTP client
pub async fn get_info(reference: &str) -> Result<String, CaptionError> {
    CaptionClient::new()?.get_info(reference).await
}

/// Transcript entries for `language_code` (empty for the first track)
pub async fn get_transcript(reference: &str, language_code: &str) -> Result<Vec<SubtitleEntry>, CaptionError> {
    CaptionClient::new()?.get_transcript(reference, language_code).await
}

/// Transcript as compact JSON
pub async fn get_transcript_json(reference: &str, language_code: &str) -> Result<String, CaptionError> {
    CaptionClient::new()?.get_transcript_json(reference, language_code).await
}

/// Transcript as JSON indented with four spaces
pub async fn get_transcript_json_pretty(reference: &str, language_code: &str) -> Result<String, CaptionError> {
    CaptionClient::new()?.get_transcript_json_pretty(reference, language_code).await
}
