//! Loadout Server
//!
//! Self-hosted API server for browsing and managing AI coding assistant
//! customizations.

use std::path::{Path, PathBuf};

use loadout_server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let working_dir = std::env::current_dir()?;

    // The bundled customization library sits next to the dashboard checkout
    // unless overridden.
    let library_root = std::env::var("LOADOUT_LIBRARY_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            working_dir
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| working_dir.clone())
        });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    start_server(ServerConfig {
        port,
        home,
        library_root,
        working_dir,
    })
    .await
}
