//! Application layer with the resolver core and warning registry.

/// Probe-then-fallback image address resolution.
pub mod resolver;
/// De-duplicated load failure warnings.
pub mod warn_registry;

pub use resolver::{ImageResolver, ResolverConfig};
pub use warn_registry::WarnRegistry;
