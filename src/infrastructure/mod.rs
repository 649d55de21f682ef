//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// HTTP adapters for probing and loading images.
pub mod http;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, ResolverOptions};
pub use http::{HttpImageFetcher, HttpReachabilityProbe};
