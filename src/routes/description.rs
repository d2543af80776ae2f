use std::sync::Arc;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::warn;

use crate::source::DescriptionSource;

/// Fixed body returned when the source cannot produce a description.
const UNAVAILABLE_MESSAGE: &str = "failed to generate the API description";

/// Build the one-route tree serving the current API description at `path`.
///
/// The handler is stateless: it queries `source` on every request, so a
/// transient failure on one request does not affect the next.
pub fn router<S>(path: &str, source: Arc<dyn DescriptionSource>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        path,
        get(move || async move { serve_description(source.as_ref()) }),
    )
}

/// Answer a single description request, always producing a response.
fn serve_description(source: &dyn DescriptionSource) -> Response {
    match source.current_description() {
        Some(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => {
            warn!("description source produced no document");
            (StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE_MESSAGE).into_response()
        }
    }
}
