//! Domain error types.

mod fetch_error;
mod probe_error;

pub use fetch_error::FetchError;
pub use probe_error::ProbeError;
