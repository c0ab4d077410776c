use std::future::Future;
use std::time::Duration;

/// Rate-limited upstream endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    LeagueEntries,
}

/// Spacing policy acquired before each rate-limited call.
///
/// `slot` is the caller's position in its batch (0-based). Implementations only delay; they
/// never retry or reject.
pub trait Pacer: Send + Sync {
    fn acquire(&self, endpoint: Endpoint, slot: usize) -> impl Future<Output = ()> + Send;
}

/// Wait `step * slot` before the call, so later lookups are spaced further apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearBackoff {
    pub step: Duration,
}

impl LinearBackoff {
    pub const DEFAULT_STEP: Duration = Duration::from_millis(100);

    pub fn new(step: Duration) -> Self {
        Self { step }
    }

    pub fn delay_for(&self, slot: usize) -> Duration {
        self.step
            .saturating_mul(u32::try_from(slot).unwrap_or(u32::MAX))
    }
}

impl Default for LinearBackoff {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

impl Pacer for LinearBackoff {
    async fn acquire(&self, endpoint: Endpoint, slot: usize) {
        let delay = self.delay_for(slot);
        if delay.is_zero() {
            return;
        }
        tracing::trace!(?endpoint, slot, delay_ms = delay.as_millis() as u64, "pacing");
        tokio::time::sleep(delay).await;
    }
}

/// No spacing at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unpaced;

impl Pacer for Unpaced {
    async fn acquire(&self, _endpoint: Endpoint, _slot: usize) {}
}
