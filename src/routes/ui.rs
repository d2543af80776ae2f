use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::{error::InstallError, services::template};

/// Build the static route tree for the documentation UI, rendering its entry
/// file first.
///
/// Returns `None` when the install fails; a missing or unreadable UI bundle
/// must not take the description endpoint down with it, so the failure is
/// logged here and the mount skipped.
pub fn router<S>(assets_dir: &Path, ui_path: &str, description_path: &str) -> Option<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    if let Err(err) = install(assets_dir, description_path) {
        warn!(error = %err, "failed to install documentation UI; skipping");
        return None;
    }

    info!(path = %ui_path, dir = %assets_dir.display(), "mounting documentation UI");
    Some(Router::new().nest_service(ui_path, ServeDir::new(assets_dir)))
}

/// Render the entry file into the asset directory, verifying it exists first.
fn install(assets_dir: &Path, description_path: &str) -> Result<(), InstallError> {
    if !assets_dir.is_dir() {
        return Err(InstallError::AssetDirMissing(assets_dir.to_path_buf()));
    }
    template::render_entry(assets_dir, description_path)
}
