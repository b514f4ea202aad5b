//! Serialise project tables back into the persisted document form.
//!
//! Output is the canonical shape: a pretty-printed top-level array,
//! newline terminated. Reloading a written document yields an equal
//! table.

use std::io::Write;

use camino::Utf8Path;
use chorusmap_core::ProjectTable;

use crate::error::TableWriteError;
use crate::fs;
use crate::wire::RawProjectRecord;

/// Render the canonical JSON document for a table.
///
/// # Errors
/// Returns [`TableWriteError::Serialise`] when encoding fails.
pub fn projects_to_string(table: &ProjectTable) -> Result<String, TableWriteError> {
    let raw: Vec<RawProjectRecord> = table.iter().map(RawProjectRecord::from).collect();
    serde_json::to_string_pretty(&raw).map_err(|source| TableWriteError::Serialise { source })
}

/// Write the canonical document to `writer`, newline terminated.
///
/// # Errors
/// Returns [`TableWriteError`] when encoding or writing fails.
pub fn write_projects(writer: &mut dyn Write, table: &ProjectTable) -> Result<(), TableWriteError> {
    let payload = projects_to_string(table)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(|source| TableWriteError::Write { source })?;
    writer
        .write_all(b"\n")
        .map_err(|source| TableWriteError::Write { source })
}

/// Write the canonical document to `path`, creating parent directories
/// as needed.
///
/// # Errors
/// Returns [`TableWriteError::Create`] when the file cannot be created
/// and the usual encode and write errors otherwise.
pub fn write_projects_file(path: &Utf8Path, table: &ProjectTable) -> Result<(), TableWriteError> {
    let mut file = fs::create_projects_file(path).map_err(|source| TableWriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_projects(&mut file, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_projects;
    use crate::loader::{load_projects_file, parse_projects};
    use chorusmap_core::{Coordinates, ProjectRecord, SpeciesIcon};

    fn sample_table() -> ProjectTable {
        let located = ProjectRecord::new(
            "Dhole monitoring",
            "Dholes",
            "Nepal, India",
            "Nepal, India",
            SpeciesIcon::Paw,
        )
        .with_lead("Holger Klinck, Namitha Suresh")
        .with_coordinates(Coordinates::new(28.394857, 84.124008).unwrap())
        .with_image("https://upload.wikimedia.org/wikipedia/commons/7/7c/Cuon.alpinus-cut.jpg")
        .with_image_credit("Kalyanvarma via Wikimedia Commons");
        let unlocated = ProjectRecord::new(
            "Archive digitisation",
            "Historic recordings",
            "Global",
            "Remote",
            SpeciesIcon::Cog,
        );
        ProjectTable::new(vec![located, unlocated])
    }

    #[test]
    fn written_document_reloads_identically() {
        let table = sample_table();
        let json = projects_to_string(&table).unwrap();
        let reloaded = parse_projects(&json).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn builtin_dataset_round_trips() {
        let table = builtin_projects().unwrap();
        let json = projects_to_string(table).unwrap();
        let reloaded = parse_projects(&json).unwrap();
        assert_eq!(&reloaded, table);
    }

    #[test]
    fn unset_links_serialise_as_null() {
        let json = projects_to_string(&sample_table()).unwrap();
        assert!(json.contains("\"Contact\": null"));
        assert!(json.contains("\"Website\": null"));
        assert!(json.contains("\"Paper\": null"));
        assert!(json.contains("\"Latitude\": null"));
        assert!(json.contains("\"Longitude\": null"));
    }

    #[test]
    fn unset_image_fields_are_omitted() {
        let table = ProjectTable::new(vec![ProjectRecord::new(
            "Mid-western Bird Monitoring",
            "Birds",
            "USA",
            "Montana",
            SpeciesIcon::Feather,
        )]);
        let json = projects_to_string(&table).unwrap();
        assert!(!json.contains("Species Image"));
    }

    #[test]
    fn output_is_newline_terminated() {
        let mut buffer = Vec::new();
        write_projects(&mut buffer, &sample_table()).unwrap();
        assert_eq!(buffer.last(), Some(&b'\n'));
    }

    #[test]
    fn writes_into_a_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            camino::Utf8PathBuf::from_path_buf(dir.path().join("exports/nested/projects.json"))
                .expect("utf8 path");

        write_projects_file(&path, &sample_table()).unwrap();

        let reloaded = load_projects_file(&path).unwrap();
        assert_eq!(reloaded, sample_table());
    }
}
