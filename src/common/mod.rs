//! Common, shared types.

pub mod intents;
pub mod playfield;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
