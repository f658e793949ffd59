/*!
 * Tests for the command controller
 */

use ytcaptions::app_config::{Config, OutputFormat};
use ytcaptions::app_controller::Controller;
use ytcaptions::MockFetcher;

use crate::common::{create_temp_dir, fixture_client, VIDEO_ID};

fn controller_with(config: Config) -> Controller<MockFetcher> {
    Controller::with_client(config, fixture_client())
}

#[tokio::test]
async fn test_info_withFixture_shouldReturnIndentedTrackJson() {
    let controller = controller_with(Config::default());
    let listing = controller.info(VIDEO_ID).await.unwrap();
    assert!(listing.contains("\"languageCode\": \"en\""));
    assert!(listing.contains("\"languageCode\": \"es\""));
}

#[tokio::test]
async fn test_transcript_withSrtFormat_shouldRenderSubRip() {
    let controller = controller_with(Config::default());
    let srt = controller.transcript(VIDEO_ID, Some("es"), Some(OutputFormat::Srt)).await.unwrap();
    assert_eq!(srt, "1\n00:00:00,000 --> 00:00:01,500\nHola\n\n");
}

#[tokio::test]
async fn test_transcript_withoutOverrides_shouldUseConfiguredDefaults() {
    let mut config = Config::default();
    config.default_language = "es".to_string();
    config.output_format = OutputFormat::Json;
    let controller = controller_with(config);

    let json = controller.transcript(VIDEO_ID, None, None).await.unwrap();
    assert_eq!(json, r#"[{"Text":"Hola","Start":"0","Dur":"1.5"}]"#);
}

#[tokio::test]
async fn test_transcript_withUnknownLanguage_shouldSurfaceCaptionError() {
    let controller = controller_with(Config::default());
    let error = controller.transcript(VIDEO_ID, Some("fr"), None).await.unwrap_err();
    assert!(error.to_string().contains("LanguageCode: \"fr\" not found"));
}

#[test]
fn test_writeOutput_toNewFile_shouldWriteContent() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("out.json");
    let controller = controller_with(Config::default());

    controller.write_output("[]", Some(&path), false).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_writeOutput_toExistingFileWithoutForce_shouldRefuse() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("out.json");
    std::fs::write(&path, "old").unwrap();
    let controller = controller_with(Config::default());

    let error = controller.write_output("new", Some(&path), false).unwrap_err();
    assert!(error.to_string().contains("Use -F to force overwrite"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");

    controller.write_output("new", Some(&path), true).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_withConfig_withInvalidConfig_shouldFailValidation() {
    let mut config = Config::default();
    config.timeout_secs = Some(0);
    assert!(Controller::with_config(config).is_err());
}
