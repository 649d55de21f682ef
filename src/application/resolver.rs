//! Probe-then-fallback image address resolution.
//!
//! One [`ImageResolver`] per displayed image. The currently resolved address
//! is published through a watch channel and may change asynchronously as the
//! probe and load attempts complete. All failures degrade to the placeholder
//! address; none surface as error values.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, trace};

use crate::application::warn_registry::WarnRegistry;
use crate::domain::entities::{
    DecodingHint, ImageRequest, LoadingPolicy, Resolution, ResolutionPhase,
};
use crate::domain::errors::ProbeError;
use crate::domain::ports::{ImageFetchPort, ReachabilityPort};

/// Configuration for the image resolver.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Upper bound on the reachability probe, in milliseconds.
    pub probe_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            probe_timeout_ms: 4_000,
        }
    }
}

/// Resolves the address to render for a single image.
///
/// Eager requests render the target immediately and correct to the
/// placeholder only on load failure. Lazy requests render the placeholder,
/// probe the target's reachability, and fall back to a full load when the
/// probe is inconclusive. At most one resolution sequence is active at a
/// time; changing the target, placeholder, or decoding hint cancels the
/// in-flight sequence and restarts from the top.
pub struct ImageResolver {
    probe: Arc<dyn ReachabilityPort>,
    fetcher: Arc<dyn ImageFetchPort>,
    warnings: Arc<WarnRegistry>,
    config: ResolverConfig,
    request: ImageRequest,
    resolution_tx: watch::Sender<Resolution>,
    epoch: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for ImageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageResolver")
            .field("request", &self.request)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ImageResolver {
    /// Creates a resolver and starts the first resolution sequence.
    ///
    /// The initial resolved address is available synchronously: the target
    /// for eager requests, the placeholder for lazy ones.
    #[must_use]
    pub fn new(
        request: ImageRequest,
        probe: Arc<dyn ReachabilityPort>,
        fetcher: Arc<dyn ImageFetchPort>,
        warnings: Arc<WarnRegistry>,
    ) -> Self {
        Self::with_config(request, probe, fetcher, warnings, ResolverConfig::default())
    }

    /// Creates a resolver with an explicit configuration.
    #[must_use]
    pub fn with_config(
        request: ImageRequest,
        probe: Arc<dyn ReachabilityPort>,
        fetcher: Arc<dyn ImageFetchPort>,
        warnings: Arc<WarnRegistry>,
        config: ResolverConfig,
    ) -> Self {
        let (resolution_tx, _) =
            watch::channel(Resolution::new(String::new(), ResolutionPhase::Initial));
        let mut resolver = Self {
            probe,
            fetcher,
            warnings,
            config,
            request,
            resolution_tx,
            epoch: Arc::new(AtomicU64::new(0)),
            task: None,
        };
        resolver.restart();
        resolver
    }

    /// Subscribes to resolved address updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Resolution> {
        self.resolution_tx.subscribe()
    }

    /// Returns the currently resolved address.
    #[must_use]
    pub fn resolved_address(&self) -> String {
        self.resolution_tx.borrow().address.clone()
    }

    /// Returns the current resolution phase.
    #[must_use]
    pub fn phase(&self) -> ResolutionPhase {
        self.resolution_tx.borrow().phase
    }

    /// Returns the active request.
    #[must_use]
    pub const fn request(&self) -> &ImageRequest {
        &self.request
    }

    /// Replaces the whole request, restarting resolution if it differs from
    /// the active one.
    pub fn set_request(&mut self, request: ImageRequest) {
        if request == self.request {
            return;
        }
        self.request = request;
        self.restart();
    }

    /// Points the resolver at a new target address. Empty or identical
    /// targets are ignored.
    pub fn set_target(&mut self, target: impl Into<String>) {
        let target = target.into();
        if target.trim().is_empty() || target == self.request.target {
            return;
        }
        self.request.target = target;
        self.restart();
    }

    /// Changes the placeholder address. Empty or identical values are ignored.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        let placeholder = placeholder.into();
        if placeholder.trim().is_empty() || placeholder == self.request.placeholder {
            return;
        }
        self.request.placeholder = placeholder;
        self.restart();
    }

    /// Changes the decoding hint. The hint is opaque to the algorithm but is
    /// part of the request's identity, so changing it restarts resolution.
    pub fn set_decoding(&mut self, decoding: DecodingHint) {
        if decoding == self.request.decoding {
            return;
        }
        self.request.decoding = decoding;
        self.restart();
    }

    /// Waits for the active resolution sequence to settle and returns the
    /// final resolution. Eager requests settle without a transition when the
    /// load succeeds behind the already-rendered target.
    pub async fn settled(&mut self) -> Resolution {
        if let Some(task) = self.task.take() {
            if let Err(join_error) = task.await {
                if join_error.is_panic() {
                    error!(error = %join_error, "resolution session panicked");
                }
            }
        }
        self.resolution_tx.borrow().clone()
    }

    /// Cancels any in-flight work and runs the algorithm from the top.
    ///
    /// The epoch bump and the task abort together guarantee that a stale
    /// sequence can never publish a resolution after it was superseded.
    fn restart(&mut self) {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let phase = match self.request.loading {
            LoadingPolicy::Eager => ResolutionPhase::ShowingTargetOptimistic,
            LoadingPolicy::Lazy => ResolutionPhase::ShowingPlaceholderProbing,
        };
        self.resolution_tx
            .send_replace(Resolution::new(self.request.initial_address(), phase));

        let session = ResolutionSession {
            request: self.request.clone(),
            probe: self.probe.clone(),
            fetcher: self.fetcher.clone(),
            warnings: self.warnings.clone(),
            probe_timeout_ms: self.config.probe_timeout_ms,
            resolution_tx: self.resolution_tx.clone(),
            epoch: self.epoch.clone(),
            session_epoch: epoch,
        };
        self.task = Some(tokio::spawn(session.run()));
    }
}

impl Drop for ImageResolver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// One cancellable pass of the resolution algorithm.
struct ResolutionSession {
    request: ImageRequest,
    probe: Arc<dyn ReachabilityPort>,
    fetcher: Arc<dyn ImageFetchPort>,
    warnings: Arc<WarnRegistry>,
    probe_timeout_ms: u64,
    resolution_tx: watch::Sender<Resolution>,
    epoch: Arc<AtomicU64>,
    session_epoch: u64,
}

impl ResolutionSession {
    async fn run(self) {
        match self.request.loading {
            LoadingPolicy::Eager => self.run_eager().await,
            LoadingPolicy::Lazy => self.run_lazy().await,
        }
    }

    /// Eager path: the target is already rendered, correct only on failure.
    async fn run_eager(&self) {
        if let Err(error) = self.fetcher.fetch(&self.request.target).await {
            if self.commit(
                &self.request.placeholder,
                ResolutionPhase::ShowingPlaceholderDegraded,
            ) {
                self.warnings
                    .report_load_failure(&self.request.target, &error);
            }
        }
    }

    /// Lazy path: probe first, commit to the target on success, otherwise
    /// fall back to a full load.
    async fn run_lazy(&self) {
        let timeout = Duration::from_millis(self.probe_timeout_ms);
        let probe_result = match tokio::time::timeout(timeout, self.probe.check(&self.request.target))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout {
                elapsed_ms: self.probe_timeout_ms,
            }),
        };

        match probe_result {
            Ok(()) => {
                self.commit(
                    &self.request.target,
                    ResolutionPhase::ShowingTargetConfirmed,
                );
                return;
            }
            Err(error) => {
                debug!(
                    address = %self.request.target,
                    error = %error,
                    "probe inconclusive, attempting full load"
                );
            }
        }

        if !self.commit(&self.request.placeholder, ResolutionPhase::LoadingFallback) {
            return;
        }

        match self.fetcher.fetch(&self.request.target).await {
            Ok(_) => {
                self.commit(
                    &self.request.target,
                    ResolutionPhase::ShowingTargetConfirmed,
                );
            }
            Err(error) => {
                if self.commit(
                    &self.request.placeholder,
                    ResolutionPhase::ShowingPlaceholderDegraded,
                ) {
                    self.warnings
                        .report_load_failure(&self.request.target, &error);
                }
            }
        }
    }

    /// Publishes a new resolution unless this session has been superseded.
    /// Returns false if the session is stale.
    ///
    /// The epoch check runs inside the channel's modify closure so that the
    /// liveness test and the publish serialize on the channel lock: a stale
    /// session can never publish after `restart` has sent the resolution
    /// that supersedes it.
    fn commit(&self, address: &str, phase: ResolutionPhase) -> bool {
        let committed = self.resolution_tx.send_if_modified(|resolution| {
            if self.epoch.load(Ordering::SeqCst) != self.session_epoch {
                return false;
            }
            *resolution = Resolution::new(address, phase);
            true
        });
        if !committed {
            trace!(address = %address, "stale resolution session, dropping update");
        }
        committed
    }
}
