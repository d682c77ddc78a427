//! Personality quiz for Veselye.
//!
//! A fixed five-question quiz. Each option is tagged with a category and the
//! result is the category picked most often, ties going to whichever was
//! picked first. No timers and no randomness.

pub mod engine;
pub mod error;
pub mod profiles;
pub mod questions;
pub mod tally;

pub use engine::QuizEngine;
pub use error::QuizError;
pub use veselye_core as core;
