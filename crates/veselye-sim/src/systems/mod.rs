//! Systems that operate on the playfield world each step.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own session state; the engine passes in what they need.

pub mod cleanup;
pub mod clock;
pub mod movement;
pub mod snapshot;
