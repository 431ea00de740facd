// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use crate::types::SalesError;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

/// Parse the process command-line arguments
///
/// `--help` and `--version` are printed by clap, which then exits the process.
/// Any other parse failure (no input directory, more than one, unknown flags)
/// becomes [`SalesError::BadInvocation`] so it is reported like every other
/// failure.
pub fn parse_args() -> Result<CliArgs, SalesError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an explicit iterator (first item is the program name)
pub fn parse_args_from<I, T>(args: I) -> Result<CliArgs, SalesError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args).or_else(|error| match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
        _ => Err(SalesError::bad_invocation(error.to_string())),
    })
}
