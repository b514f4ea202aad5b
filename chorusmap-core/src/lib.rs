//! Core domain types for the chorusmap project records table.
//!
//! These models describe bioacoustic monitoring projects as the map
//! renderer sees them: an ordered, immutable table of fixed-schema
//! records, each carrying an optional validated position and a closed
//! set of marker icons. Constructors return `Result` where invalid
//! input is possible, so bad data surfaces early instead of as a broken
//! map.
//!
//! Parsing and persistence live in `chorusmap-data`; this crate has no
//! knowledge of the wire format.
#![forbid(unsafe_code)]

mod coords;
mod icon;
mod marker;
mod record;
mod table;

pub use coords::{Coordinates, CoordinatesError};
pub use icon::{SpeciesIcon, UnknownSpeciesIcon};
pub use marker::Marker;
pub use record::ProjectRecord;
pub use table::ProjectTable;
