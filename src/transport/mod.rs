/*!
 * Transports used to fetch watch pages and timed-text documents.
 *
 * - `http`: reqwest-backed transport used in production
 * - `mock`: in-memory transport serving canned responses for tests
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::Debug;

use crate::errors::CaptionError;

/// Common trait for everything that can fetch a URL
///
/// Implementations perform exactly one GET per call and return the full body
/// only for a 200 response. No retries happen at this layer.
#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    /// Fetch `url` and return the complete response body
    ///
    /// # Returns
    /// * `CaptionError::Network` on transport failure
    /// * `CaptionError::HttpStatus` when the status is not 200
    async fn get(&self, url: &str) -> Result<Bytes, CaptionError>;
}

pub mod http;
pub mod mock;

pub use self::http::HttpFetcher;
pub use self::mock::MockFetcher;
