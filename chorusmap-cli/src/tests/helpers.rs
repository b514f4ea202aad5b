//! Test helpers for composing projects documents on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Two schema-valid records: one geolocated, one without coordinates.
pub(super) const TWO_RECORD_DOCUMENT: &str = r#"[
    {
        "Project name": "Night heron survey",
        "Organization/Project lead": "R. Okafor",
        "Target species": "Night herons",
        "Country": "Portugal",
        "Region/Location": "Tagus estuary",
        "Latitude": 38.8,
        "Longitude": -9.0,
        "Contact": null,
        "Website": "https://example.org/herons",
        "Paper": null,
        "Species Icon": "feather"
    },
    {
        "Project name": "Call archive triage",
        "Organization/Project lead": null,
        "Target species": "Mixed taxa",
        "Country": "Global",
        "Region/Location": "Remote",
        "Latitude": null,
        "Longitude": null,
        "Contact": null,
        "Website": null,
        "Paper": null,
        "Species Icon": "cog"
    }
]"#;

pub(super) fn write_document(path: &Utf8Path, contents: &str) {
    std::fs::write(path, contents).expect("write projects document");
}

pub(super) fn utf8_temp_path(dir: &TempDir, file_name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join(file_name)).expect("utf-8 path")
}
