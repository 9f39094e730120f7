use std::time::Instant;

/// Source of "now" on the host's animation timeline, in milliseconds.
///
/// The engine never reads wall time itself; every sampling entry point takes
/// a timestamp so playback is deterministic when the host wants it to be.
pub trait Clock {
    /// Milliseconds elapsed on this clock's timeline. Monotonic non-decreasing.
    fn now_ms(&self) -> f64;
}

/// Clock backed by [`std::time::Instant`], anchored at construction.
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-stepped clock for tests and scripted playback.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now_ms: start_ms }
    }

    /// Advance the clock by `delta_ms`. Negative deltas are ignored so the
    /// timeline stays monotonic.
    pub fn advance(&mut self, delta_ms: f64) {
        if delta_ms > 0.0 {
            self.now_ms += delta_ms;
        }
    }

    pub fn set(&mut self, now_ms: f64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}
