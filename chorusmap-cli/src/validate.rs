//! Validate command implementation for the chorusmap CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_TABLE, CliError, source::TableSource};

/// CLI arguments for the `validate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Check a projects document against the record schema. \
                 Without --table the dataset built into the tooling is \
                 checked, which keeps the shipped data honest after \
                 edits. The path can come from the CLI flag, \
                 configuration files, or environment variables.",
    about = "Check a projects document against the record schema"
)]
#[ortho_config(prefix = "CHORUSMAP")]
pub(crate) struct ValidateArgs {
    /// Path to the projects document (defaults to the builtin dataset).
    #[arg(long = ARG_TABLE, value_name = "path")]
    #[serde(default)]
    pub(crate) table: Option<Utf8PathBuf>,
}

impl ValidateArgs {
    pub(crate) fn into_config(self) -> Result<ValidateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ValidateConfig::from(merged))
    }
}

/// Resolved `validate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidateConfig {
    pub(crate) source: TableSource,
}

impl From<ValidateArgs> for ValidateConfig {
    fn from(args: ValidateArgs) -> Self {
        Self {
            source: TableSource::from_arg(args.table),
        }
    }
}

pub(super) fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_validate_with(args, &mut stdout)
}

pub(super) fn run_validate_with(
    args: ValidateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.source.validate()?;
    let table = config.source.load()?;
    writeln!(
        writer,
        "{}: {} records, {} markers",
        config.source,
        table.len(),
        table.markers().count()
    )
    .map_err(CliError::WriteOutput)?;
    Ok(())
}
