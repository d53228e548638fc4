//! Command handler modules for the Doumate CLI.
//!
//! Each subcommand is implemented in its own module with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, for the
//!   interactive session, the input stream (`&mut dyn BufRead`) passed as
//!   parameters so tests can drive them with buffers
//! - Error propagation: all errors propagated via the `CliError` enum

mod cfg;
mod classify;
mod play;

pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use play::handle_play_command;
