//! Exit codes returned by [`crate::run`].

/// Game finished, abandoned, or command completed.
pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or an I/O failure.
pub const ERROR: i32 = 2;
