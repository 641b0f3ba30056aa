//! Command-line argument parsing for the demo binary.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the demo, optionally with descriptions from a JSON catalog
    RunDemo { catalog: Option<PathBuf> },
    /// Arguments could not be parsed
    Invalid(String),
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: viewdesc [--catalog <path>]

Options:
  --catalog <path>  Load descriptions from a JSON catalog
  -V, --version     Print version
  -h, --help        Print this help";

/// Parse command-line arguments and return the command to run.
///
/// # Examples
///
/// ```
/// use viewdesc::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["viewdesc".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut catalog = None;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--catalog" => match args.next() {
                Some(path) => catalog = Some(PathBuf::from(path)),
                None => return CliCommand::Invalid("--catalog needs a path".to_string()),
            },
            other => {
                if let Some(path) = other.strip_prefix("--catalog=") {
                    catalog = Some(PathBuf::from(path));
                } else {
                    return CliCommand::Invalid(format!("unknown argument '{}'", other));
                }
            }
        }
    }

    CliCommand::RunDemo { catalog }
}
