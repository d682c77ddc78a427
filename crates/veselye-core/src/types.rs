//! Fundamental identifiers and simulation time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 2D position in playfield units. x grows to the right, y grows downward.
pub type Position = glam::DVec2;

/// Identifier of a falling bottle.
///
/// Allocated from a per-engine counter that only grows, so ordering by id
/// is the same as ordering by spawn time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BottleId(pub u64);

impl fmt::Display for BottleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bottle#{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current step number (increments by 1 each step).
    pub step: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: u64,
}

impl SimTime {
    /// Advance by one fixed step.
    pub fn advance(&mut self) {
        self.step += 1;
        self.elapsed_ms += crate::constants::STEP_MS;
    }
}
