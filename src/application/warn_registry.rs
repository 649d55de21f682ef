//! Process-wide de-duplicated load failure warnings.

use std::collections::HashSet;

use parking_lot::Mutex;
use tracing::warn;

use crate::domain::errors::FetchError;

/// Registry of addresses that have already produced a load failure warning.
///
/// Created once at startup and shared across all resolver instances. The set
/// grows monotonically and is never pruned: a given address warns at most
/// once for the process lifetime, no matter how many instances fail on it.
/// Mutex-guarded since multiple images can fail to load concurrently.
#[derive(Debug, Default)]
pub struct WarnRegistry {
    warned: Mutex<HashSet<String>>,
}

impl WarnRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a load failure for the address, emitting a warning if this is
    /// the first failure seen for it. Returns true if a warning was emitted.
    pub fn report_load_failure(&self, address: &str, error: &FetchError) -> bool {
        let mut warned = self.warned.lock();
        if !warned.insert(address.to_string()) {
            return false;
        }
        warn!(
            address = %address,
            error = %error,
            "image failed to load, substituting placeholder"
        );
        true
    }

    /// Returns true if the address has already warned.
    #[must_use]
    pub fn has_warned(&self, address: &str) -> bool {
        self.warned.lock().contains(address)
    }

    /// Number of distinct addresses that have warned.
    #[must_use]
    pub fn warned_count(&self) -> usize {
        self.warned.lock().len()
    }
}
