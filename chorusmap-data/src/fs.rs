//! Capability-scoped file access for projects documents.
//!
//! Files are opened through `cap-std` with ambient authority granted
//! explicitly at the call site; paths are UTF-8 throughout via `camino`.
//! Windows drive prefixes are not handled here; document paths are
//! expected to be Unix style.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing projects document for reading.
pub(crate) fn open_projects_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a projects document, creating missing parent
/// directories first.
pub(crate) fn create_projects_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?;
    let parent = path
        .parent()
        .filter(|p| !p.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = open_or_create_dir(parent)?;
    dir.create(file_name)
}

/// Open `parent` as a capability directory, creating it if necessary.
fn open_or_create_dir(parent: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    let (base, relative) = if parent.is_absolute() {
        let relative = parent.strip_prefix("/").map_err(|_| {
            io::Error::other("failed to strip root from absolute path")
        })?;
        (Utf8PathBuf::from("/"), relative.to_path_buf())
    } else {
        (Utf8PathBuf::from("."), parent.to_path_buf())
    };

    let base_dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    if relative.as_str().is_empty() || relative == Utf8Path::new(".") {
        return Ok(base_dir);
    }
    base_dir.create_dir_all(&relative)?;
    base_dir.open_dir(&relative)
}
