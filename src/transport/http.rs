use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

use crate::app_config::Config;
use crate::errors::CaptionError;
use crate::transport::Fetcher;

/// HTTP transport backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    /// HTTP client for making requests
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with reqwest defaults (no timeout beyond the transport's own)
    pub fn new() -> Result<Self, CaptionError> {
        Self::build(None, None)
    }

    /// Create a fetcher using the user agent and timeout from the configuration
    pub fn from_config(config: &Config) -> Result<Self, CaptionError> {
        Self::build(Some(&config.user_agent), config.timeout_secs)
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn build(user_agent: Option<&str>, timeout_secs: Option<u64>) -> Result<Self, CaptionError> {
        let mut builder = Client::builder();
        if let Some(user_agent) = user_agent.filter(|ua| !ua.is_empty()) {
            builder = builder.user_agent(user_agent.to_string());
        }
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| CaptionError::Network {
            url: String::new(),
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Bytes, CaptionError> {
        let parsed = Url::parse(url).map_err(|e| CaptionError::Network {
            url: url.to_string(),
            message: format!("invalid URL: {}", e),
        })?;

        debug!("GET {}", parsed);

        let response = self.client.get(parsed).send().await.map_err(|e| CaptionError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CaptionError::HttpStatus {
                url: url.to_string(),
                status_code: status.as_u16(),
            });
        }

        // The body is read to completion here; the response is released when
        // it goes out of scope on every path.
        let body = response.bytes().await.map_err(|e| CaptionError::Network {
            url: url.to_string(),
            message: format!("failed to read response body: {}", e),
        })?;

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
