//! Command handlers for the `headsup` CLI.
//!
//! Each subcommand lives in its own module and follows the same pattern:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and stdin passed in, never grabbed
//! - Errors propagated as [`CliError`](crate::error::CliError)

mod cfg;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
