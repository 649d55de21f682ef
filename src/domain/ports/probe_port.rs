//! Reachability probe port definition.

use async_trait::async_trait;

use crate::domain::errors::ProbeError;

/// Port for lightweight existence checks against an image address.
///
/// A probe is distinct from a full load: it must not transfer the image
/// body, and implementations must not attach credentials since image
/// addresses are expected to be public.
#[async_trait]
pub trait ReachabilityPort: Send + Sync {
    /// Checks whether the address answers a HEAD-style request with a
    /// success status.
    async fn check(&self, address: &str) -> Result<(), ProbeError>;
}
