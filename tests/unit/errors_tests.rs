/*!
 * Tests for error types and conversions
 */

use ytcaptions::errors::{AppError, CaptionError};

#[test]
fn test_captionError_tracksNotFound_shouldNameVideo() {
    let error = CaptionError::TracksNotFound { reference: "CLkkj3aka4g".to_string() };
    assert!(error.to_string().contains("captions not found on video"));
    assert!(error.to_string().contains("CLkkj3aka4g"));
}

#[test]
fn test_captionError_languageNotFound_shouldNameVideoAndLanguage() {
    let error = CaptionError::LanguageNotFound {
        reference: "CLkkj3aka4g".to_string(),
        language_code: "fr".to_string(),
    };
    let display = error.to_string();
    assert!(display.contains("CLkkj3aka4g"));
    assert!(display.contains("\"fr\""));
}

#[test]
fn test_captionError_httpStatus_shouldDisplayStatusCode() {
    let error = CaptionError::HttpStatus { url: "https://example.com".to_string(), status_code: 429 };
    let display = error.to_string();
    assert!(display.contains("429"));
    assert!(display.contains("https://example.com"));
}

#[test]
fn test_captionError_invalidReference_shouldQuoteInput() {
    let error = CaptionError::InvalidReference { input: "abc".to_string() };
    assert_eq!(error.to_string(), "invalid video reference: \"abc\"");
}

#[test]
fn test_captionError_fromSerdeJsonError_shouldBecomeSerialization() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: CaptionError = json_error.into();
    assert!(matches!(error, CaptionError::Serialization(_)));
}

#[test]
fn test_appError_fromCaptionError_shouldWrapCorrectly() {
    let app_error: AppError = CaptionError::MalformedSubtitleData("bad".to_string()).into();
    let display = format!("{}", app_error);
    assert!(display.contains("Caption error"));
    assert!(display.contains("bad"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromPlainAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(_)));
}

#[test]
fn test_appError_fromContextWrappedCaptionError_shouldKeepCaptionVariant() {
    let source: anyhow::Result<()> = Err(CaptionError::EmptyTrackList { reference: "x".to_string() }.into());
    let wrapped = anyhow::Context::context(source, "while listing").unwrap_err();
    let app_error: AppError = wrapped.into();
    assert!(matches!(app_error, AppError::Caption(CaptionError::EmptyTrackList { .. })));
}
