//! Error types emitted by the chorusmap CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use chorusmap_data::{TableError, TableWriteError};
use thiserror::Error;

/// Errors emitted by the chorusmap CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The dataset embedded in the tooling failed validation.
    #[error("builtin projects table is invalid: {source}")]
    BuiltinTable {
        #[source]
        source: &'static TableError,
    },
    /// Loading a projects document failed.
    #[error(transparent)]
    Table(#[from] TableError),
    /// Writing a projects document failed.
    #[error(transparent)]
    WriteTable(#[from] TableWriteError),
    /// Serialising the marker list failed.
    #[error("failed to serialise marker list: {0}")]
    SerialiseMarkers(serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write command output: {0}")]
    WriteOutput(std::io::Error),
}
