/*!
 * Application configuration.
 *
 * Loads and validates the settings used by the caption client and the
 * command line tool. Every field has a default, so a partial JSON file works.
 */

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use url::Url;

use crate::reference::DEFAULT_WATCH_URL_BASE;

/// Settings for the caption client and the command line tool
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Watch-page endpoint, the video ID is appended as `?v=<id>`
    #[serde(default = "default_watch_url_base")]
    pub watch_url_base: String,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds, transport default when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Language code used when none is given, empty selects the first track
    #[serde(default)]
    pub default_language: String,

    /// Transcript output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Decode HTML entities left in caption text after XML unescaping
    #[serde(default)]
    pub decode_html_entities: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Transcript output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Compact JSON
    Json,
    // @format: JSON indented with four spaces
    #[default]
    Pretty,
    // @format: SubRip text
    Srt,
}

impl OutputFormat {
    // @returns: Lowercase format identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Json => "json".to_string(),
            Self::Pretty => "pretty".to_string(),
            Self::Srt => "srt".to_string(),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "srt" => Ok(Self::Srt),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_watch_url_base() -> String {
    DEFAULT_WATCH_URL_BASE.to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("Config file not found at '{}', using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.watch_url_base)
            .context(format!("Invalid watch URL base: {}", self.watch_url_base))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!("Watch URL base must use http or https: {}", self.watch_url_base));
        }

        if self.user_agent.trim().is_empty() {
            return Err(anyhow!("User agent must not be empty"));
        }

        if self.timeout_secs == Some(0) {
            return Err(anyhow!("Timeout must be greater than zero seconds"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            watch_url_base: default_watch_url_base(),
            user_agent: default_user_agent(),
            timeout_secs: None,
            default_language: String::new(),
            output_format: OutputFormat::default(),
            decode_html_entities: false,
            log_level: LogLevel::default(),
        }
    }
}
