//! Global state machine.
//!
//! ```text
//! Idle --activate--> Playing --solid hit--> GameOver --activate--> Idle
//! ```

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    /// Flyer hovers, intro banner up, nothing scrolls.
    #[default]
    Idle,
    Playing,
    /// Frozen until the restart activation.
    GameOver,
}
