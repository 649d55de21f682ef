//! Imgresolve - probe-then-fallback image address resolution.
//!
//! Given a target image address and a loading policy, a resolver decides
//! which address should actually be rendered at any point in time: eager
//! requests render the target optimistically and correct only on failure,
//! lazy requests confirm reachability with a HEAD-style probe (falling back
//! to a full load) before committing to the target. Every failure degrades
//! to a placeholder address; the only observable side effect is a warning
//! emitted at most once per failing address for the process lifetime.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the resolver core and warning registry.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "imgresolve";
