use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while installing the documentation UI.
///
/// These never escape [`crate::add_endpoints`]: a failed UI install is logged
/// and skipped so a broken asset bundle cannot take the description endpoint
/// down with it.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The resolved UI asset directory does not exist.
    #[error("UI asset directory not found: {}", .0.display())]
    AssetDirMissing(PathBuf),
    /// The UI template file could not be read.
    #[error("failed to read UI template {}", path.display())]
    TemplateRead {
        /// Path of the template file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The rendered UI entry file could not be written.
    #[error("failed to write UI entry file {}", path.display())]
    EntryWrite {
        /// Path of the entry file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors returned by [`crate::write_description_to_file`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// The description source produced no document.
    #[error("no API description is currently available")]
    Unavailable,
    /// The description could not be written to the target file.
    #[error("failed to write API description to {}", path.display())]
    Write {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
