//! HEAD-style reachability probe backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::domain::errors::ProbeError;
use crate::domain::ports::ReachabilityPort;

/// Reachability probe issuing HEAD requests.
///
/// The client timeout mirrors the resolver's probe timeout so that
/// cancellation actually aborts the socket work instead of leaving a request
/// in flight. No credentials are attached; image addresses are expected to
/// be public.
#[derive(Debug, Clone)]
pub struct HttpReachabilityProbe {
    client: reqwest::Client,
    timeout_ms: u64,
}

impl HttpReachabilityProbe {
    /// Creates a probe whose requests are bounded by the given timeout.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(timeout_ms: u64) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| ProbeError::network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, timeout_ms })
    }
}

#[async_trait]
impl ReachabilityPort for HttpReachabilityProbe {
    async fn check(&self, address: &str) -> Result<(), ProbeError> {
        let response = self.client.head(address).send().await.map_err(|e| {
            if e.is_timeout() {
                ProbeError::Timeout {
                    elapsed_ms: self.timeout_ms,
                }
            } else {
                ProbeError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        trace!(address = %address, "probe confirmed reachability");
        Ok(())
    }
}
