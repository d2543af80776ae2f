//! Demo binary mounting the documentation endpoints onto a small axum API.

use std::{env, net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};

use openapi_serve::{DescriptionSource, DocsConfig, add_endpoints, write_description_to_file};

#[derive(Debug, Serialize, ToSchema)]
/// Status payload returned by the demo `/status` route.
struct StatusResponse {
    /// Always `"ok"` while the service is running.
    status: String,
}

#[utoipa::path(
    get,
    path = "/status",
    responses((status = 200, description = "Service is up", body = StatusResponse))
)]
/// Report that the demo service is up.
async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
    })
}

#[derive(OpenApi)]
/// Aggregated OpenAPI description for the demo server.
#[openapi(
    paths(status),
    components(schemas(StatusResponse)),
    tags((name = "demo", description = "Demo endpoints"))
)]
struct ApiDoc;

/// Description capability handed to the library: regenerates the document on
/// every request.
fn description_source() -> Arc<dyn DescriptionSource> {
    Arc::new(|| ApiDoc::openapi().to_json().ok())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = env::args().skip(1);
    if let Some(flag) = args.next() {
        anyhow::ensure!(flag == "--export", "unrecognized argument: {flag}");
        let path = PathBuf::from(args.next().context("--export requires a file path")?);
        write_description_to_file(&*description_source(), &path)?;
        info!(path = %path.display(), "wrote API description");
        return Ok(());
    }

    let app = build_router();

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Build the demo router, mount the documentation endpoints, and attach
/// cross-cutting middleware layers.
fn build_router() -> Router<()> {
    let api = Router::new().route("/status", get(status));

    add_endpoints(api, description_source(), &DocsConfig::default())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
