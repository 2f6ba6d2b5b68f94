//! Loadout Server
//!
//! Self-hosted API server for browsing and managing AI coding assistant
//! customizations. This is a library crate — the server is started via
//! `start_server()`.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Response, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use rust_embed::Embed;
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod routes;
pub mod types;

/// Embedded dashboard frontend assets.
///
/// At compile time, rust-embed includes all files from the static build
/// directory. When the directory is absent, this is empty and the server
/// gracefully falls back to API-only mode.
#[derive(Embed)]
#[folder = "static"]
#[prefix = ""]
#[allow_missing = true]
struct DashboardAssets;

/// Configuration for starting the server.
pub struct ServerConfig {
    /// Port to listen on (default: 3000).
    pub port: u16,
    /// User home directory. Tilde expansion, the dashboard config location,
    /// and the default discovery roots all derive from it.
    pub home: PathBuf,
    /// Root of the bundled customization library (contains `skills/`,
    /// `commands/`, `agents/`, `output-styles/`).
    pub library_root: PathBuf,
    /// Working directory, used for project-level settings.
    pub working_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let library_root = working_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| working_dir.clone());
        Self {
            port: 3000,
            home: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            library_root,
            working_dir,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub home: Arc<PathBuf>,
    pub library_root: Arc<PathBuf>,
    pub working_dir: Arc<PathBuf>,
}

/// Build the Axum router with all routes and embedded frontend assets.
pub fn build_router(config: &ServerConfig) -> (Router, AppState) {
    let state = AppState {
        home: Arc::new(config.home.clone()),
        library_root: Arc::new(config.library_root.clone()),
        working_dir: Arc::new(config.working_dir.clone()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", routes::api_router())
        .fallback(serve_dashboard)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (app, state)
}

/// Start the Loadout server and block until shutdown.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let (app, _state) = build_router(&config);

    tracing::info!("Loadout server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve embedded frontend assets with SPA fallback.
async fn serve_dashboard(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    // Try exact file match first
    if let Some(file) = DashboardAssets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime.as_ref())
            .header(header::CACHE_CONTROL, cache_control(path))
            .body(Body::from(file.data.to_vec()))
            .expect("static response builder");
    }

    // SPA fallback: serve index.html for all non-file routes
    match DashboardAssets::get("index.html") {
        Some(index) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
            .header(header::CACHE_CONTROL, "no-cache")
            .body(Body::from(index.data.to_vec()))
            .expect("static response builder"),
        None => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(
                "Loadout API server running. Dashboard frontend not embedded in this build.",
            ))
            .expect("static response builder"),
    }
}

/// Cache-control header value based on file type.
fn cache_control(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "no-cache"
    } else {
        "public, max-age=3600"
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: HashMap::from([
            ("customizations".to_string(), true),
            ("projects".to_string(), true),
        ]),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    features: HashMap<String, bool>,
}
