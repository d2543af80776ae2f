//! Library crate for openapi-serve, mounting an API description endpoint and a
//! static documentation UI onto an existing axum router.

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod source;

pub use config::DocsConfig;
pub use error::{ExportError, InstallError};
pub use routes::{add_endpoints, add_endpoints_with_assets};
pub use services::export::write_description_to_file;
pub use source::DescriptionSource;
