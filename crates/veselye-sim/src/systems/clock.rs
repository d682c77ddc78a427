//! Fixed-interval clocks driven by the simulation step.
//!
//! The spawn timer and the countdown both hang off the one step clock
//! instead of being scheduled independently.

/// Accumulates elapsed milliseconds and reports how many intervals elapsed.
#[derive(Debug, Clone)]
pub struct IntervalClock {
    interval_ms: u64,
    accumulated_ms: u64,
}

impl IntervalClock {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    /// Add `elapsed_ms` to the clock.
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.accumulated_ms += elapsed_ms;
    }

    /// Consume one elapsed interval, if any. Call in a loop to catch up.
    pub fn fire(&mut self) -> bool {
        if self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}
