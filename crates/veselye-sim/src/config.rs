//! Engine configuration.
//!
//! Every field has a default taken from `veselye_core::constants`, so a
//! partial JSON document only needs to name what it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use veselye_core::constants::{DEFAULT_SEED, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Configuration for a game engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and same commands = same session.
    pub seed: u64,
    /// Playfield width; spawns land in `[0, width - BOTTLE_WIDTH]`.
    pub playfield_width: f64,
    /// Lower bound; bottles falling past it are discarded.
    pub playfield_height: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse game config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read game config {}: {e}", path.display()))?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.playfield_width.is_finite() && self.playfield_width > 0.0) {
            return Err(format!(
                "playfield_width must be positive, got {}",
                self.playfield_width
            ));
        }
        if !(self.playfield_height.is_finite() && self.playfield_height > 0.0) {
            return Err(format!(
                "playfield_height must be positive, got {}",
                self.playfield_height
            ));
        }
        Ok(())
    }
}
