//! Loading, validation, and persistence for the projects table.
//!
//! Responsibilities:
//! - Parse persisted JSON documents into `chorusmap-core` types.
//! - Enforce the record schema at load time, failing fast with the
//!   offending record's index and name.
//! - Embed the dataset shipped with the crate.
//! - Write tables back out in the canonical document form.
//!
//! Boundaries:
//! - Domain semantics live in `chorusmap-core`; this crate owns the
//!   wire format and nothing else.
//! - Logging goes through the `log` facade; no logger is installed
//!   here.
#![forbid(unsafe_code)]

mod builtin;
mod error;
mod fs;
mod loader;
mod wire;
mod writer;

pub use builtin::{BUILTIN_JSON, builtin_projects};
pub use error::{RecordError, TableError, TableWriteError};
pub use loader::{PROJECTS_KEY, load_projects_file, parse_projects, read_projects};
pub use writer::{projects_to_string, write_projects, write_projects_file};
