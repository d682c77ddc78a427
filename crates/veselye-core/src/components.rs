//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::types::BottleId;

/// A collectible falling bottle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bottle {
    /// Stable identifier used by the presentation layer to catch it.
    pub id: BottleId,
    /// Golden bottles are worth more points.
    pub is_bonus: bool,
}

/// Distance a bottle falls per simulation step. Sampled once at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallSpeed(pub f64);
