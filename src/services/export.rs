use std::path::Path;

use crate::{error::ExportError, services::fs::write_atomic, source::DescriptionSource};

/// Write the source's current API description to `path`.
///
/// Unlike the live description endpoint this utility has no always-respond
/// obligation: it returns [`ExportError::Unavailable`] when the source yields
/// no document and [`ExportError::Write`] when the file cannot be written.
/// The write is atomic and replaces any existing file at `path`.
pub fn write_description_to_file(
    source: &dyn DescriptionSource,
    path: &Path,
) -> Result<(), ExportError> {
    let description = source
        .current_description()
        .ok_or(ExportError::Unavailable)?;

    write_atomic(path, &description).map_err(|err| ExportError::Write {
        path: path.to_path_buf(),
        source: err,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const DESCRIPTION: &str = "{\"openapi\":\"3.1.0\",\"paths\":{}}";

    #[test]
    fn written_file_matches_the_live_description() {
        let source = || Some(DESCRIPTION.to_string());
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("openapi.json");

        write_description_to_file(&source, &target).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        assert_eq!(Some(written), source.current_description());
    }

    #[test]
    fn unavailable_description_propagates_an_error() {
        let source = || None;
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("openapi.json");

        let err = write_description_to_file(&source, &target).unwrap_err();
        assert!(matches!(err, ExportError::Unavailable));
        assert!(!target.exists());
    }

    #[test]
    fn unwritable_target_propagates_an_error() {
        let source = || Some(DESCRIPTION.to_string());
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing-dir").join("openapi.json");

        let err = write_description_to_file(&source, &target).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
