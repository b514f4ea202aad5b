//! Load and validate projects documents.
//!
//! The canonical document is a top-level JSON array of records. The
//! loader also accepts the legacy envelope `{"projects_data": [...]}`
//! that mirrors how the dataset was first published. Validation is
//! strict and fail-fast: the first schema violation aborts the load
//! with the record's index and name.

use std::io::Read;

use camino::Utf8Path;
use chorusmap_core::{ProjectRecord, ProjectTable};
use log::debug;
use serde_json::Value;

use crate::error::{RecordError, TableError};
use crate::fs;
use crate::wire::{FIELD_PROJECT_NAME, RawProjectRecord};

/// Key under which the legacy envelope stores the records array.
pub const PROJECTS_KEY: &str = "projects_data";

/// Placeholder used in errors when a record's name is itself unusable.
const UNNAMED: &str = "unnamed";

/// Parse a projects document from a JSON string.
///
/// # Errors
/// Returns [`TableError`] when the document is not JSON, not a table,
/// or contains a record that violates the schema.
///
/// # Examples
/// ```
/// use chorusmap_data::parse_projects;
///
/// # fn main() -> Result<(), chorusmap_data::TableError> {
/// let table = parse_projects("[]")?;
/// assert!(table.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn parse_projects(json: &str) -> Result<ProjectTable, TableError> {
    let document: Value =
        serde_json::from_str(json).map_err(|source| TableError::Syntax { source })?;
    table_from_document(document)
}

/// Parse a projects document from a reader.
///
/// # Errors
/// Returns [`TableError`] on IO or validation failure; read errors are
/// reported through [`TableError::Syntax`] as the decoder sees them.
pub fn read_projects(reader: impl Read) -> Result<ProjectTable, TableError> {
    let document: Value =
        serde_json::from_reader(reader).map_err(|source| TableError::Syntax { source })?;
    table_from_document(document)
}

/// Load a projects document from a file.
///
/// # Errors
/// Returns [`TableError::Read`] when the file cannot be read, and the
/// usual validation errors otherwise.
pub fn load_projects_file(path: &Utf8Path) -> Result<ProjectTable, TableError> {
    let mut file = fs::open_projects_file(path).map_err(|source| TableError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut json = String::new();
    file.read_to_string(&mut json)
        .map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_projects(&json)
}

fn table_from_document(document: Value) -> Result<ProjectTable, TableError> {
    let entries = document_entries(document)?;
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        records.push(record_from_entry(index, entry)?);
    }
    let table = ProjectTable::new(records);
    debug!(
        "loaded {} project records ({} with markers)",
        table.len(),
        table.markers().count()
    );
    Ok(table)
}

fn document_entries(document: Value) -> Result<Vec<Value>, TableError> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut members) => match members.remove(PROJECTS_KEY) {
            Some(Value::Array(entries)) => Ok(entries),
            Some(other) => Err(TableError::ProjectsNotArray {
                found: json_kind(&other),
            }),
            None => Err(TableError::MissingProjectsArray),
        },
        other => Err(TableError::UnexpectedDocument {
            found: json_kind(&other),
        }),
    }
}

fn record_from_entry(index: usize, entry: Value) -> Result<ProjectRecord, TableError> {
    // Peek the name before full decoding so even type errors carry it.
    let name = entry
        .get(FIELD_PROJECT_NAME)
        .and_then(Value::as_str)
        .unwrap_or(UNNAMED)
        .to_owned();
    let invalid = |source: RecordError| TableError::Record {
        index,
        name: name.clone(),
        source,
    };
    let raw: RawProjectRecord = serde_json::from_value(entry)
        .map_err(|source| invalid(RecordError::Deserialize { source }))?;
    raw.into_record().map_err(invalid)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
