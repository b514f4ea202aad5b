//! Error types produced while loading and writing projects documents.
//!
//! Loading fails fast: the first invalid record aborts the load and the
//! error names the record by index and project name, so a data
//! maintainer can find the offending entry without bisecting the file.

use std::io;

use camino::Utf8PathBuf;
use chorusmap_core::{CoordinatesError, UnknownSpeciesIcon};
use thiserror::Error;

/// Reasons a single record fails schema validation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordError {
    /// The entry was not an object with the expected field types.
    #[error("malformed record object: {source}")]
    Deserialize {
        /// Underlying decode failure.
        source: serde_json::Error,
    },
    /// A required field was absent or null.
    #[error("missing required field \"{field}\"")]
    MissingField {
        /// Wire name of the absent field.
        field: &'static str,
    },
    /// A required field was present but empty or only whitespace.
    #[error("required field \"{field}\" is blank")]
    BlankField {
        /// Wire name of the blank field.
        field: &'static str,
    },
    /// The icon name is not one of the eight known values.
    #[error(transparent)]
    UnknownIcon(#[from] UnknownSpeciesIcon),
    /// Exactly one of latitude and longitude was provided.
    #[error(
        "\"{present}\" is set but \"{missing}\" is null; coordinates must \
         be given together or not at all"
    )]
    PartialCoordinates {
        /// The axis that was supplied.
        present: &'static str,
        /// The axis that was not.
        missing: &'static str,
    },
    /// The coordinate pair is off the globe.
    #[error(transparent)]
    InvalidCoordinates(#[from] CoordinatesError),
}

/// Errors raised while loading a projects document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
    /// Reading the document from disk failed.
    #[error("failed to read projects document {path}: {source}")]
    Read {
        /// Document path as given.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },
    /// The document is not valid JSON at all.
    #[error("failed to parse projects document: {source}")]
    Syntax {
        /// Underlying parse failure.
        source: serde_json::Error,
    },
    /// The document parsed but is not a records table.
    #[error("expected a top-level array of project records, found {found}")]
    UnexpectedDocument {
        /// What the document top level actually was.
        found: &'static str,
    },
    /// An envelope object was given without its records array.
    #[error("document object has no \"projects_data\" array")]
    MissingProjectsArray,
    /// The envelope's records entry is not an array.
    #[error("\"projects_data\" must be an array, found {found}")]
    ProjectsNotArray {
        /// What the entry actually was.
        found: &'static str,
    },
    /// A record failed schema validation.
    ///
    /// `index` is the zero-based position in the document; `name` is
    /// the record's project name, or `unnamed` when that field itself
    /// is unusable.
    #[error("record {index} (\"{name}\") is invalid: {source}")]
    Record {
        /// Zero-based position in the document.
        index: usize,
        /// Project name, or `unnamed`.
        name: String,
        /// What was wrong with the record.
        source: RecordError,
    },
}

/// Errors raised while writing a projects document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableWriteError {
    /// Converting the table to JSON failed.
    #[error("failed to serialise projects document: {source}")]
    Serialise {
        /// Underlying encode failure.
        source: serde_json::Error,
    },
    /// Writing the serialised document failed.
    #[error("failed to write projects document: {source}")]
    Write {
        /// Underlying IO failure.
        source: io::Error,
    },
    /// Creating the output file failed.
    #[error("failed to create projects document at {path}: {source}")]
    Create {
        /// Target path as given.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },
}
