/// API description file export.
pub mod export;
/// Atomic file write helper.
pub(crate) mod fs;
/// Documentation UI template rendering.
pub(crate) mod template;
