//! Command-line interface.
//!
//! The dispatcher runs early in `main`, before the terminal is touched:
//!
//! ```ignore
//! use ruler::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if let CliCommand::Run(options) = command {
//!     // start the TUI with `options`
//! } else if let Some(result) = run_cli_command(command) {
//!     result?;
//! }
//! ```

pub mod args;
pub mod version;
pub mod write_config;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions, USAGE};
pub use version::{handle_version_command, VERSION};
pub use write_config::handle_write_config;

use color_eyre::Result;

/// Run a non-TUI command.
///
/// Returns `None` for [`CliCommand::Run`], which the caller handles.
/// `Version` never returns.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::WriteConfig(options) => Some(handle_write_config(&options).map(|path| {
            println!("Wrote {}", path.display());
        })),
        CliCommand::Run(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_none() {
        let result = run_cli_command(CliCommand::Run(RunOptions::default()));
        assert!(result.is_none());
    }

    #[test]
    fn test_help_succeeds() {
        let result = run_cli_command(CliCommand::Help);
        assert!(matches!(result, Some(Ok(()))));
    }
}
