//! Session setup: expansion/variant flags and override lists.
//!
//! The setup is the ground truth every gate is evaluated against. It is
//! read-only from the engine's point of view; default-filling and user
//! input handling belong to the caller.

pub mod flags;
pub mod game_setup;

pub use flags::SetupFlag;
pub use game_setup::GameSetup;
