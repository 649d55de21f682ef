use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;
use crate::domain::entities::{DecodingHint, LoadingPolicy};

#[derive(Debug, Parser)]
#[command(
    name = "imgresolve",
    version,
    about = "Probe-then-fallback image address resolution",
    long_about = None
)]
pub struct CliArgs {
    /// Image addresses to resolve.
    #[arg(value_name = "ADDRESS", required = true)]
    pub addresses: Vec<String>,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Loading policy applied to every address.
    #[arg(long, value_enum)]
    pub loading: Option<LoadingPolicy>,

    /// Decoding hint applied to every address.
    #[arg(long, value_enum)]
    pub decoding: Option<DecodingHint>,

    /// Placeholder address substituted on failure.
    #[arg(long, value_name = "ADDRESS")]
    pub placeholder: Option<String>,

    /// Reachability probe timeout in milliseconds.
    #[arg(long, value_name = "MS")]
    pub probe_timeout_ms: Option<u64>,
}
