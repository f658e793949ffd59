/*!
 * Mock transport for testing.
 *
 * `MockFetcher` maps URLs to canned outcomes and records every request, so
 * tests can exercise the full pipeline without network access:
 * - `with_body(url, body)` answers 200 with the body
 * - `with_status(url, code)` answers with a non-200 status
 * - `with_network_error(url)` simulates a transport failure
 *
 * Unknown URLs answer 404.
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::CaptionError;
use crate::transport::Fetcher;

/// Canned outcome for one URL
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 OK with this body
    Body(Bytes),
    /// Non-200 status
    Status(u16),
    /// Transport failure with this message
    NetworkError(String),
}

/// In-memory transport keyed by exact URL
#[derive(Debug, Default, Clone)]
pub struct MockFetcher {
    routes: HashMap<String, MockResponse>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    /// Create a mock with no routes
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with 200 and `body`
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.routes.insert(url.into(), MockResponse::Body(body.into()));
        self
    }

    /// Answer `url` with `status_code`
    pub fn with_status(mut self, url: impl Into<String>, status_code: u16) -> Self {
        self.routes.insert(url.into(), MockResponse::Status(status_code));
        self
    }

    /// Fail `url` at the transport level
    pub fn with_network_error(mut self, url: impl Into<String>) -> Self {
        self.routes
            .insert(url.into(), MockResponse::NetworkError("connection refused".to_string()));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn get(&self, url: &str) -> Result<Bytes, CaptionError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.routes.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status_code)) => Err(CaptionError::HttpStatus {
                url: url.to_string(),
                status_code: *status_code,
            }),
            Some(MockResponse::NetworkError(message)) => Err(CaptionError::Network {
                url: url.to_string(),
                message: message.clone(),
            }),
            None => Err(CaptionError::HttpStatus {
                url: url.to_string(),
                status_code: 404,
            }),
        }
    }
}
