//! Command-line interface for the chorusmap project records tooling.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod export;
mod markers;
mod source;
mod validate;

pub use error::CliError;

use export::{ExportArgs, run_export};
use markers::{MarkersArgs, run_markers};
use validate::{ValidateArgs, run_validate};

pub(crate) const ARG_TABLE: &str = "table";
pub(crate) const ARG_OUTPUT: &str = "output";

/// Run the chorusmap CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Export(args) => run_export(args),
        Command::Markers(args) => run_markers(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "chorusmap",
    about = "Maintenance tooling for the chorusmap project records table",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a projects document against the record schema.
    Validate(ValidateArgs),
    /// Emit the canonical JSON form of a projects document.
    Export(ExportArgs),
    /// List the map markers for a projects document.
    Markers(MarkersArgs),
}

#[cfg(test)]
mod tests;
