//! API routes

use axum::Router;

use loadout_core::assets::AssetKind;

use crate::AppState;

mod config;
mod customizations;
mod projects;
mod settings;

/// Build the API router with all endpoints
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/skills", customizations::router(AssetKind::Skill))
        .nest("/commands", customizations::router(AssetKind::Command))
        .nest("/agents", customizations::router(AssetKind::Agent))
        .nest(
            "/output-styles",
            customizations::router(AssetKind::OutputStyle),
        )
        .nest("/projects", projects::router())
        .nest("/config", config::router())
        .nest("/settings", settings::router())
}
