use std::{path::Path, sync::Arc};

use axum::Router;
use tracing::info;

use crate::{
    config::{self, DocsConfig},
    source::DescriptionSource,
};

pub mod description;
pub mod ui;

/// Mount the configured documentation endpoints onto `router`.
///
/// The API description endpoint and the documentation UI are each guarded by
/// their own configuration flag; an absent path skips that feature with an
/// informational log rather than failing the call. The UI asset directory is
/// resolved from the `OPENAPI_SERVE_UI_DIR` environment variable, falling
/// back to the bundled default location.
///
/// The UI entry file is rewritten on every call. Run this once during
/// application setup; concurrent calls against the same asset directory are
/// not arbitrated.
pub fn add_endpoints<S>(
    router: Router<S>,
    source: Arc<dyn DescriptionSource>,
    config: &DocsConfig,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let assets_dir = config::resolve_ui_dir();
    add_endpoints_with_assets(router, source, config, &assets_dir)
}

/// Like [`add_endpoints`], with an explicit UI asset directory.
pub fn add_endpoints_with_assets<S>(
    router: Router<S>,
    source: Arc<dyn DescriptionSource>,
    config: &DocsConfig,
    assets_dir: &Path,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let description_path = config.description_path.as_deref().map(config::absolute);

    let router = match &description_path {
        Some(path) => {
            info!(path = %path, "mounting API description endpoint");
            router.merge(description::router(path, source))
        }
        None => {
            info!("API description endpoint disabled; skipping");
            router
        }
    };

    match (config.ui_path.as_deref().map(config::absolute), description_path) {
        (Some(ui_path), Some(description_path)) => {
            match ui::router(assets_dir, &ui_path, &description_path) {
                Some(ui_router) => router.merge(ui_router),
                None => router,
            }
        }
        _ => {
            info!("documentation UI disabled; skipping");
            router
        }
    }
}
