//! HTTP adapters for the probe and fetch ports.

pub mod fetcher;
pub mod probe;

pub use fetcher::HttpImageFetcher;
pub use probe::HttpReachabilityProbe;
