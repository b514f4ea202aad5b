//! Export command implementation for the chorusmap CLI.
//!
//! Exporting re-emits a projects document in the canonical form: a
//! pretty-printed top-level array with the record fields in schema
//! order. Running it over a hand-edited document normalises the
//! formatting without changing any value.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use chorusmap_data::{write_projects, write_projects_file};

use crate::{ARG_OUTPUT, ARG_TABLE, CliError, source::TableSource};

/// CLI arguments for the `export` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Emit the canonical JSON form of a projects document. \
                 Without --table the builtin dataset is exported; \
                 without --output the document goes to stdout.",
    about = "Emit the canonical JSON form of a projects document"
)]
#[ortho_config(prefix = "CHORUSMAP")]
pub(crate) struct ExportArgs {
    /// Path to the projects document (defaults to the builtin dataset).
    #[arg(long = ARG_TABLE, value_name = "path")]
    #[serde(default)]
    pub(crate) table: Option<Utf8PathBuf>,
    /// Write the document here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ExportArgs {
    pub(crate) fn into_config(self) -> Result<ExportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ExportConfig::from(merged))
    }
}

/// Resolved `export` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportConfig {
    pub(crate) source: TableSource,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl From<ExportArgs> for ExportConfig {
    fn from(args: ExportArgs) -> Self {
        Self {
            source: TableSource::from_arg(args.table),
            output: args.output,
        }
    }
}

pub(super) fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_export_with(args, &mut stdout)
}

pub(super) fn run_export_with(args: ExportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.source.validate()?;
    let table = config.source.load()?;
    match config.output {
        Some(path) => Ok(write_projects_file(&path, &table)?),
        None => Ok(write_projects(writer, &table)?),
    }
}
