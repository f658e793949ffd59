/*!
 * Error types for the ytcaptions library and command line tool.
 *
 * `CaptionError` covers every way a caption lookup can fail. Each variant is
 * terminal for the call that produced it: nothing is retried internally.
 * `AppError` wraps it together with the file and configuration failures the
 * binary can run into.
 */

use thiserror::Error;

/// Errors that can occur while fetching or decoding captions
#[derive(Error, Debug)]
pub enum CaptionError {
    /// The input holds no 11-character video identifier
    #[error("invalid video reference: \"{input}\"")]
    InvalidReference {
        /// The caller-supplied identifier or URL
        input: String,
    },

    /// Transport-level failure (connection, TLS, body read, bad URL)
    #[error("network error fetching {url}: {message}")]
    Network {
        /// The URL being fetched
        url: String,
        /// Underlying transport message
        message: String,
    },

    /// The server answered with something other than 200 OK
    #[error("http StatusCode is {status_code} for {url}")]
    HttpStatus {
        /// The URL being fetched
        url: String,
        /// HTTP status code returned
        status_code: u16,
    },

    /// The watch page carries no caption track list (captions disabled)
    #[error("captions not found on video: \"{reference}\"")]
    TracksNotFound {
        /// Video identifier
        reference: String,
    },

    /// The caption track list was found but did not decode as JSON
    #[error("malformed caption track data: {0}")]
    MalformedTrackData(String),

    /// No track matches the requested language code
    #[error("subtitles ID: \"{reference}\" LanguageCode: \"{language_code}\" not found")]
    LanguageNotFound {
        /// Video identifier
        reference: String,
        /// Requested language code
        language_code: String,
    },

    /// No language was requested and the track list is empty
    #[error("no caption tracks available for video: \"{reference}\"")]
    EmptyTrackList {
        /// Video identifier
        reference: String,
    },

    /// The subtitle document is not well-formed timed-text markup
    #[error("malformed subtitle data: {0}")]
    MalformedSubtitleData(String),

    /// Re-serializing decoded data failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CaptionError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a caption lookup
    #[error("Caption error: {0}")]
    Caption(#[from] CaptionError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        // Keep the typed caption failure when one is at the root of the chain
        match error.downcast::<CaptionError>() {
            Ok(caption_error) => Self::Caption(caption_error),
            Err(other) => Self::Unknown(other.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
