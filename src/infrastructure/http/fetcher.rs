//! Full image load attempts backed by reqwest.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::domain::errors::FetchError;
use crate::domain::ports::ImageFetchPort;

/// Image fetcher issuing plain GET requests.
///
/// No resolver-side timeout is imposed on loads; the transport's own
/// behavior bounds them.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetchPort for HttpImageFetcher {
    async fn fetch(&self, address: &str) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(|e| FetchError::network(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::body(format!("failed to read body: {e}")))?;

        debug!(address = %address, size = bytes.len(), "image loaded");
        Ok(bytes)
    }
}
