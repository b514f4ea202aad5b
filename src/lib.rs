//! Facade crate for the chorusmap project records table.
//!
//! This crate re-exports the core domain types together with the loading
//! and persistence helpers, so most consumers only need one dependency.

#![forbid(unsafe_code)]

pub use chorusmap_core::{
    Coordinates, CoordinatesError, Marker, ProjectRecord, ProjectTable, SpeciesIcon,
    UnknownSpeciesIcon,
};

pub use chorusmap_data::{
    BUILTIN_JSON, PROJECTS_KEY, RecordError, TableError, TableWriteError, builtin_projects,
    load_projects_file, parse_projects, projects_to_string, read_projects, write_projects,
    write_projects_file,
};
