//! Mount-path configuration and documentation UI asset directory resolution.

use std::{env, path::PathBuf};

/// Default mount path for the API description endpoint.
pub const DEFAULT_DESCRIPTION_PATH: &str = "/openapi";
/// Default mount path for the documentation UI.
pub const DEFAULT_UI_PATH: &str = "/openapi/ui";
/// Default location on disk where the documentation UI bundle is installed.
const DEFAULT_UI_DIR: &str = "assets/openapi-ui";
/// Environment variable that overrides [`DEFAULT_UI_DIR`].
const UI_DIR_ENV: &str = "OPENAPI_SERVE_UI_DIR";

#[derive(Debug, Clone)]
/// Immutable pair of optional mount paths consumed by [`crate::add_endpoints`].
///
/// The two features are orthogonal: either path may be `None` to disable that
/// endpoint on its own, and a disabled feature is skipped with an
/// informational log rather than failing the call. Paths are normalized to be
/// `/`-prefixed when the endpoints are mounted; the configuration itself is
/// stored as given.
pub struct DocsConfig {
    /// Mount path for the description endpoint, or `None` to disable it.
    pub description_path: Option<String>,
    /// Mount path for the documentation UI, or `None` to disable it.
    pub ui_path: Option<String>,
}

impl DocsConfig {
    /// Build a configuration from explicit mount paths.
    pub fn new(description_path: Option<String>, ui_path: Option<String>) -> Self {
        Self {
            description_path,
            ui_path,
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            description_path: Some(DEFAULT_DESCRIPTION_PATH.to_string()),
            ui_path: Some(DEFAULT_UI_PATH.to_string()),
        }
    }
}

/// Return `path` prefixed with the path separator, leaving already-absolute
/// paths unchanged. No other character is altered.
pub(crate) fn absolute(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Resolve the UI asset directory taking the environment override into account.
pub(crate) fn resolve_ui_dir() -> PathBuf {
    env::var_os(UI_DIR_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_UI_DIR))
}
