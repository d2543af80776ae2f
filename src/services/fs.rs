use std::{
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

/// Write `contents` to `path` so readers never observe a partial file.
///
/// The bytes land in a temporary file in the destination directory first and
/// are renamed over the target only once the write has succeeded.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
