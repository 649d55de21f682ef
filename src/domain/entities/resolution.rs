//! Resolution state for a single image request.

/// Phase of the per-instance resolution state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionPhase {
    /// No resolution work has started.
    #[default]
    Initial,
    /// Eager policy: target rendered optimistically, load outcome pending.
    ShowingTargetOptimistic,
    /// Lazy policy: placeholder rendered while the reachability probe runs.
    ShowingPlaceholderProbing,
    /// Probe was inconclusive; a full load attempt is in flight.
    LoadingFallback,
    /// Target confirmed reachable or loaded. Terminal until re-resolution.
    ShowingTargetConfirmed,
    /// Target failed to load; placeholder substituted. Terminal until re-resolution.
    ShowingPlaceholderDegraded,
}

impl ResolutionPhase {
    /// Returns true if no further transitions happen without a new request.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::ShowingTargetConfirmed | Self::ShowingPlaceholderDegraded)
    }

    /// Returns true if the target address is currently rendered.
    #[must_use]
    pub const fn is_showing_target(&self) -> bool {
        matches!(self, Self::ShowingTargetOptimistic | Self::ShowingTargetConfirmed)
    }

    /// Returns true if the placeholder was substituted after a load failure.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::ShowingPlaceholderDegraded)
    }
}

impl std::fmt::Display for ResolutionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::ShowingTargetOptimistic => write!(f, "target-optimistic"),
            Self::ShowingPlaceholderProbing => write!(f, "placeholder-probing"),
            Self::LoadingFallback => write!(f, "loading-fallback"),
            Self::ShowingTargetConfirmed => write!(f, "target-confirmed"),
            Self::ShowingPlaceholderDegraded => write!(f, "placeholder-degraded"),
        }
    }
}

/// Currently resolved address plus the phase that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Address the caller should render right now.
    pub address: String,
    /// State machine phase.
    pub phase: ResolutionPhase,
}

impl Resolution {
    /// Creates a resolution snapshot.
    #[must_use]
    pub fn new(address: impl Into<String>, phase: ResolutionPhase) -> Self {
        Self {
            address: address.into(),
            phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(ResolutionPhase::ShowingTargetConfirmed.is_terminal());
        assert!(ResolutionPhase::ShowingPlaceholderDegraded.is_terminal());
        assert!(!ResolutionPhase::ShowingTargetOptimistic.is_terminal());
        assert!(!ResolutionPhase::ShowingPlaceholderProbing.is_terminal());
        assert!(!ResolutionPhase::LoadingFallback.is_terminal());
        assert!(!ResolutionPhase::Initial.is_terminal());
    }

    #[test]
    fn test_showing_target() {
        assert!(ResolutionPhase::ShowingTargetOptimistic.is_showing_target());
        assert!(ResolutionPhase::ShowingTargetConfirmed.is_showing_target());
        assert!(!ResolutionPhase::ShowingPlaceholderProbing.is_showing_target());
        assert!(!ResolutionPhase::ShowingPlaceholderDegraded.is_showing_target());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            ResolutionPhase::ShowingPlaceholderDegraded.to_string(),
            "placeholder-degraded"
        );
        assert_eq!(ResolutionPhase::LoadingFallback.to_string(), "loading-fallback");
    }
}
