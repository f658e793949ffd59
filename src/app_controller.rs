use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::io::Write;
use std::path::Path;

use crate::app_config::{Config, OutputFormat};
use crate::client::CaptionClient;
use crate::formatting::{to_json, to_json_pretty, to_srt};
use crate::transport::{Fetcher, HttpFetcher};

// @module: Application controller for caption commands

/// Main application controller for the command line tool
pub struct Controller<F: Fetcher = HttpFetcher> {
    // @field: App configuration
    config: Config,
    // @field: Caption client built from the configuration
    client: CaptionClient<F>,
}

impl Controller<HttpFetcher> {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let client = CaptionClient::from_config(&config)?;
        Ok(Self { config, client })
    }
}

impl<F: Fetcher> Controller<F> {
    /// Create a controller over an explicit caption client
    pub fn with_client(config: Config, client: CaptionClient<F>) -> Self {
        Self { config, client }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Indented JSON listing of the available tracks
    pub async fn info(&self, reference: &str) -> Result<String> {
        let tracks = self.client.get_tracks(reference).await?;
        if tracks.is_empty() {
            warn!("Caption track list for {} is empty", reference);
        }
        for track in &tracks {
            info!(
                "{} [{}]{}",
                track.display_name(),
                track.language_code,
                if track.is_auto_generated() { " (auto-generated)" } else { "" }
            );
        }
        Ok(to_json_pretty(&tracks)?)
    }

    /// Transcript rendered in the requested format.
    ///
    /// `language` and `format` fall back to the configured defaults.
    pub async fn transcript(
        &self,
        reference: &str,
        language: Option<&str>,
        format: Option<OutputFormat>,
    ) -> Result<String> {
        let language = language.unwrap_or(self.config.default_language.as_str());
        let format = format.unwrap_or(self.config.output_format);

        let entries = self.client.get_transcript(reference, language).await?;
        info!("Fetched {} caption lines", entries.len());

        let rendered = match format {
            OutputFormat::Json => to_json(&entries)?,
            OutputFormat::Pretty => to_json_pretty(&entries)?,
            OutputFormat::Srt => to_srt(&entries)?,
        };
        Ok(rendered)
    }

    /// Write output to `path`, or to stdout when no path is given
    pub fn write_output(&self, content: &str, path: Option<&Path>, force_overwrite: bool) -> Result<()> {
        match path {
            Some(path) => {
                if path.exists() && !force_overwrite {
                    return Err(anyhow!(
                        "Output file already exists: {}. Use -F to force overwrite.",
                        path.display()
                    ));
                }
                std::fs::write(path, content)
                    .context(format!("Failed to write output file: {}", path.display()))?;
                info!("Success: {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", content).context("Failed to write to stdout")?;
            }
        }
        Ok(())
    }
}
