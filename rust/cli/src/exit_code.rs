//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or an engine failure.
pub const ERROR: i32 = 2;

/// Input closed in the middle of a hand.
pub const INTERRUPTED: i32 = 130;
