//! Application configuration.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::{DEFAULT_PLACEHOLDER, DecodingHint, LoadingPolicy};

const APP_NAME: &str = "imgresolve";
const APP_QUALIFIER: &str = "dev";
const APP_ORGANIZATION: &str = "imgresolve";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Config file could not be parsed.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Image resolution options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Loading policy for requests that do not specify one.
    #[serde(default)]
    pub loading: LoadingPolicy,

    /// Decoding hint for requests that do not specify one.
    #[serde(default)]
    pub decoding: DecodingHint,

    /// Placeholder address substituted on failure.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Reachability probe timeout in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            loading: LoadingPolicy::default(),
            decoding: DecodingHint::default(),
            placeholder: default_placeholder(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_probe_timeout_ms() -> u64 {
    4_000
}

/// Application configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Image resolution options.
    #[serde(default)]
    pub resolver: ResolverOptions,
}

use super::args::CliArgs;

impl AppConfig {
    /// Loads the configuration file if present and merges CLI arguments
    /// over it. A missing default config file falls back to defaults; an
    /// explicitly provided path must exist and parse.
    ///
    /// # Errors
    /// Returns error if an explicit config file cannot be read or parsed.
    pub fn load(args: CliArgs) -> Result<Self, ConfigError> {
        let explicit = args.config.is_some();
        let path = args.config.clone().or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if explicit || path.exists() => {
                let content =
                    std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                        path: path.clone(),
                        source,
                    })?;
                let mut config: Self =
                    toml::from_str(&content).map_err(|source| ConfigError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                config.config = Some(path);
                config
            }
            _ => Self::default(),
        };

        config.merge_with_args(args);
        Ok(config)
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(loading) = args.loading {
            self.resolver.loading = loading;
        }
        if let Some(decoding) = args.decoding {
            self.resolver.decoding = decoding;
        }
        if let Some(placeholder) = args.placeholder {
            self.resolver.placeholder = placeholder;
        }
        if let Some(probe_timeout_ms) = args.probe_timeout_ms {
            self.resolver.probe_timeout_ms = probe_timeout_ms;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

}
