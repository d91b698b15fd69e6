//! Cooperative cancellation for list fetches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation counter guarding fetch results.
///
/// Opening a fetch bumps the generation and captures it in a token.
/// Invalidating (teardown, or a superseding fetch opening its own token)
/// bumps the generation again, which strands every earlier token: its
/// result must be discarded instead of applied. Cancellation is
/// cooperative; nothing aborts the underlying call, the token is simply
/// checked before the settled result may touch any state.
#[derive(Debug, Default)]
pub struct FetchGate {
    generation: AtomicU64,
}

impl FetchGate {
    /// Creates a gate with no fetch outstanding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch, superseding any earlier one.
    pub fn open(self: &Arc<Self>) -> FetchToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchToken {
            gate: Arc::clone(self),
            generation,
        }
    }

    /// Invalidates every outstanding token without starting a new fetch.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// The current generation number.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

/// Proof of which fetch generation a result belongs to.
#[derive(Debug, Clone)]
pub struct FetchToken {
    gate: Arc<FetchGate>,
    generation: u64,
}

impl FetchToken {
    /// Returns true once a newer fetch or an invalidation superseded this
    /// token. A cancelled token's result must never reach client state.
    pub fn is_cancelled(&self) -> bool {
        self.gate.generation() != self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_live() {
        let gate = Arc::new(FetchGate::new());
        let token = gate.open();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn invalidate_strands_open_tokens() {
        let gate = Arc::new(FetchGate::new());
        let token = gate.open();
        gate.invalidate();
        assert!(token.is_cancelled());
    }

    #[test]
    fn newer_fetch_supersedes_older() {
        let gate = Arc::new(FetchGate::new());
        let first = gate.open();
        let second = gate.open();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn generations_are_monotonic() {
        let gate = Arc::new(FetchGate::new());
        assert_eq!(gate.generation(), 0);
        let _a = gate.open();
        assert_eq!(gate.generation(), 1);
        gate.invalidate();
        assert_eq!(gate.generation(), 2);
    }
}
