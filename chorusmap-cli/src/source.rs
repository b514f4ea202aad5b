//! Resolution of the projects table a command operates on.
//!
//! Every subcommand takes the same optional `--table` flag: a document
//! path when given, the dataset embedded in `chorusmap-data` otherwise.

use camino::{Utf8Path, Utf8PathBuf};
use chorusmap_core::ProjectTable;
use chorusmap_data::{builtin_projects, load_projects_file};

use crate::{ARG_TABLE, CliError};

/// Where a command reads its projects table from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TableSource {
    /// The dataset embedded in `chorusmap-data`.
    Builtin,
    /// A projects document on disk.
    File(Utf8PathBuf),
}

impl TableSource {
    pub(crate) fn from_arg(table: Option<Utf8PathBuf>) -> Self {
        table.map_or(Self::Builtin, Self::File)
    }

    /// Check the source is readable before any work happens.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        match self {
            Self::Builtin => Ok(()),
            Self::File(path) => require_existing(path, ARG_TABLE),
        }
    }

    /// Load and validate the table.
    pub(crate) fn load(&self) -> Result<ProjectTable, CliError> {
        match self {
            Self::Builtin => {
                let table = builtin_projects()
                    .map_err(|source| CliError::BuiltinTable { source })?;
                Ok(table.clone())
            }
            Self::File(path) => Ok(load_projects_file(path)?),
        }
    }
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }
}
