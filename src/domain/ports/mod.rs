mod fetch_port;
mod probe_port;

pub use fetch_port::ImageFetchPort;
pub use probe_port::ReachabilityPort;
