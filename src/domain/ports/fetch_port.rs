//! Image fetch port definition.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::errors::FetchError;

/// Port for full image load attempts.
///
/// Used eagerly to detect failures behind an optimistic render, and lazily
/// as the fallback when the reachability probe is inconclusive.
#[async_trait]
pub trait ImageFetchPort: Send + Sync {
    /// Downloads the image body at the given address.
    async fn fetch(&self, address: &str) -> Result<Bytes, FetchError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use parking_lot::Mutex;

    use super::*;

    /// Scripted outcome for one address.
    #[derive(Clone)]
    struct Route {
        delay: Option<Duration>,
        outcome: Result<Bytes, FetchError>,
    }

    /// Mock image fetch port for testing.
    pub struct MockImageFetch {
        default: Mutex<Route>,
        routes: Mutex<HashMap<String, Route>>,
        calls: AtomicUsize,
        requested: Mutex<Vec<String>>,
    }

    impl MockImageFetch {
        /// Mock that succeeds for every address.
        pub fn ok() -> Self {
            Self {
                default: Mutex::new(Route {
                    delay: None,
                    outcome: Ok(Bytes::from_static(b"\x89PNG")),
                }),
                routes: Mutex::new(HashMap::new()),
                calls: AtomicUsize::new(0),
                requested: Mutex::new(Vec::new()),
            }
        }

        /// Mock that fails every address with the given error.
        pub fn failing(error: FetchError) -> Self {
            let mock = Self::ok();
            mock.default.lock().outcome = Err(error);
            mock
        }

        /// Mock whose fetches never complete within any reasonable timeout.
        pub fn hanging() -> Self {
            Self::ok().with_delay(Duration::from_secs(3600))
        }

        /// Applies a delay before every default outcome.
        pub fn with_delay(self, delay: Duration) -> Self {
            self.default.lock().delay = Some(delay);
            self
        }

        /// Scripts an outcome for one specific address.
        pub fn with_route(
            self,
            address: impl Into<String>,
            delay: Option<Duration>,
            outcome: Result<Bytes, FetchError>,
        ) -> Self {
            self.routes
                .lock()
                .insert(address.into(), Route { delay, outcome });
            self
        }

        /// Number of fetches performed.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Addresses fetched, in call order.
        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().clone()
        }
    }

    #[async_trait]
    impl ImageFetchPort for MockImageFetch {
        async fn fetch(&self, address: &str) -> Result<Bytes, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().push(address.to_string());
            let route = self
                .routes
                .lock()
                .get(address)
                .cloned()
                .unwrap_or_else(|| self.default.lock().clone());
            if let Some(delay) = route.delay {
                tokio::time::sleep(delay).await;
            }
            route.outcome
        }
    }
}
