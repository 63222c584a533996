//! Input handling
//!
//! Device polling lives outside the crate; this module only defines the
//! per-tick command the player entity consumes.

mod command;

pub use command::PlayerCommand;
