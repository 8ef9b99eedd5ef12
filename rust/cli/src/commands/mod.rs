//! Command handler modules for the `pig` CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated via `CliError`

mod cfg;
mod play;
mod rolls;

pub use cfg::handle_cfg_command;
pub use play::{PlayOptions, handle_play_command};
pub use rolls::handle_rolls_command;
