//! The projects dataset embedded in the crate.
//!
//! The document is compiled in verbatim and parsed once, on first use.
//! Because the table is validated like any other input, a bad asset
//! surfaces as an error rather than a panic, and the loader tests keep
//! the shipped data honest.

use std::sync::LazyLock;

use chorusmap_core::ProjectTable;

use crate::error::TableError;
use crate::loader::parse_projects;

/// The shipped projects document, verbatim.
pub const BUILTIN_JSON: &str = include_str!("../data/projects_data.json");

static BUILTIN: LazyLock<Result<ProjectTable, TableError>> =
    LazyLock::new(|| parse_projects(BUILTIN_JSON));

/// The parsed builtin table, loaded once for the process lifetime.
///
/// # Errors
/// Returns the load error when the embedded document does not satisfy
/// the schema. Every call observes the same outcome.
///
/// # Examples
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = chorusmap_data::builtin_projects()?;
/// assert!(!table.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn builtin_projects() -> Result<&'static ProjectTable, &'static TableError> {
    BUILTIN.as_ref()
}
