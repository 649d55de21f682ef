//! Domain entity definitions.

mod request;
mod resolution;

pub use request::{DEFAULT_PLACEHOLDER, DecodingHint, ImageRequest, LoadingPolicy};
pub use resolution::{Resolution, ResolutionPhase};
