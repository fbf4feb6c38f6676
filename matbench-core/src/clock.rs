use std::time::{Duration, Instant};

/// A monotonic clock capability injected into the benchmark runner.
///
/// Readings are offsets from an arbitrary per-clock epoch; only
/// differences between two readings are meaningful. Taking `&self` lets
/// test clocks advance through interior mutability.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `std::time::Instant`, anchored at construction.
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}
