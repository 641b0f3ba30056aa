//! CLI module for the demo binary.
//!
//! The dispatcher runs before the terminal is touched:
//!
//! ```ignore
//! use viewdesc::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command.clone()) {
//!     result?;
//!     return Ok(());
//! }
//! // RunDemo: continue to the TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if it does not need the TUI.
///
/// Returns `None` for [`CliCommand::RunDemo`]. `Version` never returns.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::RunDemo { .. } => None,
    }
}
