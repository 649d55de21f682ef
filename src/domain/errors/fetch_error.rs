//! Image load error types.

use thiserror::Error;

/// Errors from a full image load attempt.
///
/// A fetch failure triggers placeholder substitution plus a single
/// de-duplicated warning for the failing address; it never surfaces to the
/// caller as an error value.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("network error during image load: {message}")]
    Network { message: String },

    #[error("image load returned non-success status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("failed to read image body: {message}")]
    Body { message: String },
}

impl FetchError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a body read error.
    #[must_use]
    pub fn body(message: impl Into<String>) -> Self {
        Self::Body {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            FetchError::network("dns failure").to_string(),
            "network error during image load: dns failure"
        );
        assert_eq!(
            FetchError::UnexpectedStatus { status: 500 }.to_string(),
            "image load returned non-success status 500"
        );
    }
}
