//! Veselye host application.
//!
//! Wires the game and quiz engines together behind a shared application
//! state and exposes them to a frontend through plain handler functions.

pub mod chat;
pub mod game_loop;
pub mod ipc;
pub mod state;

pub use veselye_core as core;
