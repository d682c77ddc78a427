//! Enumeration types used throughout the arcade.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catch game session status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No session has been played yet.
    #[default]
    Idle,
    /// Timer is counting down, bottles are falling.
    Running,
    /// Timer reached zero. Only `StartGame` leaves this state.
    Ended,
}

/// Final score tier shown when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Novice,
    Competent,
    Legendary,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Novice => "novice",
            Grade::Competent => "competent",
            Grade::Legendary => "legendary",
        }
    }

    /// Line shown on the game-over card.
    pub fn verdict(&self) -> &'static str {
        match self {
            Grade::Novice => "Новичок! Ты можешь лучше!",
            Grade::Competent => "Неплохо, бомж-брат!",
            Grade::Legendary => "Легенда помоек! 👑",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personality quiz outcome. Every answer option is tagged with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Bottle sprinter.
    Butilochnik,
    /// Cardboard king.
    Karton,
    /// Subway sage.
    Mudrec,
    /// Courtyard philosopher.
    Filosof,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Butilochnik,
        Category::Karton,
        Category::Mudrec,
        Category::Filosof,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Butilochnik => "butilochnik",
            Category::Karton => "karton",
            Category::Mudrec => "mudrec",
            Category::Filosof => "filosof",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
