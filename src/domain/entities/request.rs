//! Image resolution request entity.

use serde::{Deserialize, Serialize};

/// Fallback address rendered when the target is unavailable or unconfirmed.
pub const DEFAULT_PLACEHOLDER: &str = "/images/placeholder.svg";

/// Loading policy for an image request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LoadingPolicy {
    /// Render the target optimistically without waiting for confirmation.
    Eager,
    /// Confirm reachability (or a successful load) before committing to the target.
    #[default]
    Lazy,
}

impl std::fmt::Display for LoadingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eager => write!(f, "eager"),
            Self::Lazy => write!(f, "lazy"),
        }
    }
}

/// Decoding hint passed through to the rendering primitive unchanged.
///
/// The resolution algorithm never inspects it, but changing it on a live
/// resolver restarts resolution like a target change does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DecodingHint {
    /// Decode synchronously with rendering.
    Sync,
    /// Decode off the rendering path.
    #[default]
    Async,
    /// Let the rendering primitive decide.
    Auto,
}

impl std::fmt::Display for DecodingHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sync => write!(f, "sync"),
            Self::Async => write!(f, "async"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Immutable inputs for one image resolution.
///
/// The target and placeholder are never both empty: the placeholder defaults
/// to [`DEFAULT_PLACEHOLDER`] and empty overrides are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// The address the caller ultimately wants displayed.
    pub target: String,
    /// Fallback address shown when the target is unavailable or unconfirmed.
    pub placeholder: String,
    /// Loading policy.
    pub loading: LoadingPolicy,
    /// Decoding hint, opaque to the resolution algorithm.
    pub decoding: DecodingHint,
    /// Alternative text, opaque to the resolver.
    pub alt: Option<String>,
}

impl ImageRequest {
    /// Creates a request for the given target address with default policy,
    /// hint, and placeholder. Returns `None` if the target is empty.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Option<Self> {
        let target = target.into();
        if target.trim().is_empty() {
            return None;
        }
        Some(Self {
            target,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            loading: LoadingPolicy::default(),
            decoding: DecodingHint::default(),
            alt: None,
        })
    }

    /// Sets the placeholder address. Empty values are ignored so the request
    /// always has a renderable fallback.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        if !placeholder.trim().is_empty() {
            self.placeholder = placeholder;
        }
        self
    }

    /// Sets the loading policy.
    #[must_use]
    pub const fn with_loading(mut self, loading: LoadingPolicy) -> Self {
        self.loading = loading;
        self
    }

    /// Sets the decoding hint.
    #[must_use]
    pub const fn with_decoding(mut self, decoding: DecodingHint) -> Self {
        self.decoding = decoding;
        self
    }

    /// Sets the alternative text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Address rendered before any probing or loading completes: the target
    /// for eager requests, the placeholder for lazy ones.
    #[must_use]
    pub fn initial_address(&self) -> &str {
        match self.loading {
            LoadingPolicy::Eager => &self.target,
            LoadingPolicy::Lazy => &self.placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_defaults() {
        let request = ImageRequest::new("/img/hero.jpg").unwrap();

        assert_eq!(request.target, "/img/hero.jpg");
        assert_eq!(request.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(request.loading, LoadingPolicy::Lazy);
        assert_eq!(request.decoding, DecodingHint::Async);
        assert_eq!(request.alt, None);
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace only")]
    fn test_empty_target_rejected(target: &str) {
        assert!(ImageRequest::new(target).is_none());
    }

    #[test_case(LoadingPolicy::Eager, "/img/a.jpg" ; "eager renders target")]
    #[test_case(LoadingPolicy::Lazy, DEFAULT_PLACEHOLDER ; "lazy renders placeholder")]
    fn test_initial_address(loading: LoadingPolicy, expected: &str) {
        let request = ImageRequest::new("/img/a.jpg").unwrap().with_loading(loading);

        assert_eq!(request.initial_address(), expected);
    }

    #[test]
    fn test_empty_placeholder_override_ignored() {
        let request = ImageRequest::new("/img/a.jpg").unwrap().with_placeholder("");

        assert_eq!(request.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_alt_text_carried_opaquely() {
        let request = ImageRequest::new("/img/a.jpg")
            .unwrap()
            .with_alt("Sunset over the waterhole");

        assert_eq!(request.alt.as_deref(), Some("Sunset over the waterhole"));
    }
}
