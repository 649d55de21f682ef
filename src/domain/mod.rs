//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{DecodingHint, ImageRequest, LoadingPolicy, Resolution, ResolutionPhase};
pub use errors::{FetchError, ProbeError};
pub use ports::{ImageFetchPort, ReachabilityPort};
