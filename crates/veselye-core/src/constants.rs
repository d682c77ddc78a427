//! Game and quiz tuning parameters.
//!
//! Values carried over unchanged from the live site. They are not derived
//! from anything; keep them here rather than re-tuning at call sites.

// --- Clocks ---

/// Fixed simulation step (milliseconds). One fall update per step (~60 Hz).
pub const STEP_MS: u64 = 16;

/// Interval between bottle spawns (milliseconds).
pub const SPAWN_INTERVAL_MS: u64 = 800;

/// Interval between countdown ticks (milliseconds).
pub const CLOCK_INTERVAL_MS: u64 = 1000;

/// Length of one session in countdown ticks (seconds).
pub const SESSION_DURATION_SECS: u32 = 30;

// --- Playfield ---

/// Default playfield width in simulation units (pixels on the site).
pub const PLAYFIELD_WIDTH: f64 = 640.0;

/// Lower bound of the playfield. Bottles with `y` past this are discarded.
pub const PLAYFIELD_HEIGHT: f64 = 400.0;

/// Bottle sprite width, used to keep spawns fully inside the playfield.
pub const BOTTLE_WIDTH: f64 = 50.0;

/// Bottle sprite height. New bottles start one height above the top edge.
pub const BOTTLE_HEIGHT: f64 = 50.0;

// --- Bottles ---

/// Minimum fall speed (units per step).
pub const FALL_SPEED_MIN: f64 = 2.0;

/// Maximum fall speed (units per step).
pub const FALL_SPEED_MAX: f64 = 4.0;

/// Probability that a spawned bottle is a golden bonus bottle.
pub const BONUS_CHANCE: f64 = 0.10;

/// Points for catching a regular bottle.
pub const BOTTLE_POINTS: u32 = 10;

/// Points for catching a golden bonus bottle.
pub const BONUS_BOTTLE_POINTS: u32 = 50;

// --- Grading ---

/// Lowest score graded as competent.
pub const GRADE_COMPETENT_MIN: u32 = 100;

/// Lowest score graded as legendary.
pub const GRADE_LEGENDARY_MIN: u32 = 300;

// --- Quiz ---

/// Number of questions in the personality quiz.
pub const TOTAL_QUESTIONS: usize = 5;

/// Number of options offered per question.
pub const OPTIONS_PER_QUESTION: usize = 4;

// --- Engine defaults ---

/// Default RNG seed for a new engine.
pub const DEFAULT_SEED: u64 = 42;
