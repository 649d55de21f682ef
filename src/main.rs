use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use imgresolve::application::{ImageResolver, ResolverConfig, WarnRegistry};
use imgresolve::domain::entities::ImageRequest;
use imgresolve::infrastructure::{AppConfig, CliArgs, HttpImageFetcher, HttpReachabilityProbe};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let addresses = args.addresses.clone();
    let config = AppConfig::load(args)?;

    init_logging(&config)?;

    info!(version = imgresolve::VERSION, "Starting imgresolve");

    let probe = Arc::new(HttpReachabilityProbe::new(config.resolver.probe_timeout_ms)?);
    let fetcher = Arc::new(HttpImageFetcher::new()?);
    let warnings = Arc::new(WarnRegistry::new());
    let resolver_config = ResolverConfig {
        probe_timeout_ms: config.resolver.probe_timeout_ms,
    };

    for address in addresses {
        let Some(request) = ImageRequest::new(address.clone()) else {
            eprintln!("{address}: empty address, skipped");
            continue;
        };
        let request = request
            .with_loading(config.resolver.loading)
            .with_decoding(config.resolver.decoding)
            .with_placeholder(config.resolver.placeholder.clone());

        let mut resolver = ImageResolver::with_config(
            request,
            probe.clone(),
            fetcher.clone(),
            warnings.clone(),
            resolver_config.clone(),
        );
        let resolution = resolver.settled().await;

        println!("{address} -> {} [{}]", resolution.address, resolution.phase);
    }

    Ok(())
}
