//! The injected capability producing the router's current API description.

use tracing::warn;

/// Query capability for the current machine-readable API description.
///
/// The document is regenerated on every call; nothing is cached by this
/// crate. Returning `None` is a valid outcome and surfaces to HTTP clients as
/// a 500 response from the description endpoint.
pub trait DescriptionSource: Send + Sync {
    /// Produce the current API description as a JSON string, if available.
    fn current_description(&self) -> Option<String>;
}

impl<F> DescriptionSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn current_description(&self) -> Option<String> {
        self()
    }
}

/// Serialize a utoipa document on every request.
impl DescriptionSource for utoipa::openapi::OpenApi {
    fn current_description(&self) -> Option<String> {
        match self.to_json() {
            Ok(json) => Some(json),
            Err(err) => {
                warn!(error = %err, "failed to serialize OpenAPI document");
                None
            }
        }
    }
}
