//! Reachability probe error types.

use thiserror::Error;

/// Probe error variants.
///
/// Every variant is inconclusive rather than fatal: the resolver responds by
/// falling back to a full load attempt and never logs these as failures.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum ProbeError {
    #[error("probe timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("network error during probe: {message}")]
    Network { message: String },

    #[error("probe rejected by origin policy: {message}")]
    CrossOrigin { message: String },

    #[error("probe returned non-success status {status}")]
    UnexpectedStatus { status: u16 },
}

impl ProbeError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an origin-policy rejection error.
    #[must_use]
    pub fn cross_origin(message: impl Into<String>) -> Self {
        Self::CrossOrigin {
            message: message.into(),
        }
    }

    /// Returns whether the probe failed by running out of time.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_detection() {
        assert!(ProbeError::Timeout { elapsed_ms: 4000 }.is_timeout());
        assert!(!ProbeError::network("connection refused").is_timeout());
        assert!(!ProbeError::UnexpectedStatus { status: 404 }.is_timeout());
    }

    #[test]
    fn test_display() {
        let error = ProbeError::UnexpectedStatus { status: 403 };
        assert_eq!(error.to_string(), "probe returned non-success status 403");
    }
}
