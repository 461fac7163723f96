//! Session control loop.
//!
//! A session moves through
//! `Init → Ready → Active → (Resetting → Ready → Active)*` and never
//! terminates on its own: it runs until the process is killed or a protocol
//! error ends it.

pub mod controller;

pub use controller::{run_session, SessionController};

/// Where the control loop currently is. Exactly one holds at any instant.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SessionState {
    /// Waiting for the one-time init line.
    #[default]
    Init,
    /// Player built; the ready signal is about to be sent.
    Ready,
    /// Waiting for, or handling, a scene.
    Active,
    /// Reset acknowledged; the player is clearing its state.
    Resetting,
}

/// Counters kept across the lifetime of a session.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SessionStats {
    /// Scenes handed to the player.
    pub frames: u64,
    /// Reset cycles completed.
    pub resets: u64,
    /// Action commands whose `frame` did not echo the scene's frame.
    pub frame_mismatches: u64,
}
