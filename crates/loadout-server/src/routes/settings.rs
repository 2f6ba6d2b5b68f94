//! Assistant settings endpoints
//!
//! `?local=true` targets the settings file of the configured `.claude`
//! directory; otherwise the working directory's project-level settings are
//! used.

use std::path::PathBuf;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use loadout_core::config::DashboardConfig;
use loadout_core::constants::{CONFIG_DIR_NAME, SETTINGS_FILE_NAME};
use loadout_core::settings::{self, Settings};

use crate::error::AppError;
use crate::types::{ActionResponse, LocalQuery};
use crate::AppState;

/// Build the settings router
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(put_settings))
}

/// Read the targeted settings file.
async fn get_settings(
    State(state): State<AppState>,
    Query(query): Query<LocalQuery>,
) -> Result<Json<Settings>, AppError> {
    let path = settings_path(&state, query.local).await;
    settings::read_settings(&path)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Settings file not found".to_string()))
}

/// Replace the targeted settings file.
async fn put_settings(
    State(state): State<AppState>,
    Query(query): Query<LocalQuery>,
    Json(new_settings): Json<Settings>,
) -> Result<Json<ActionResponse>, AppError> {
    let path = settings_path(&state, query.local).await;
    settings::write_settings(&path, &new_settings).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Settings updated successfully".to_string(),
    }))
}

async fn settings_path(state: &AppState, local: bool) -> PathBuf {
    if local {
        let config = DashboardConfig::load(&state.home).await;
        config.claude_dir(&state.home).join(SETTINGS_FILE_NAME)
    } else {
        state
            .working_dir
            .join(CONFIG_DIR_NAME)
            .join(SETTINGS_FILE_NAME)
    }
}
