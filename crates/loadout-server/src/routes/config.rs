//! Dashboard configuration endpoints

use axum::{extract::State, routing::get, Json, Router};

use loadout_core::config::DashboardConfig;

use crate::error::AppError;
use crate::types::ActionResponse;
use crate::AppState;

/// Build the config router
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_config).post(save_config))
}

/// Current dashboard configuration (defaults when none is saved yet).
async fn get_config(State(state): State<AppState>) -> Json<DashboardConfig> {
    Json(DashboardConfig::load(&state.home).await)
}

/// Replace the dashboard configuration.
async fn save_config(
    State(state): State<AppState>,
    Json(config): Json<DashboardConfig>,
) -> Result<Json<ActionResponse>, AppError> {
    config.save(&state.home).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Configuration saved".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let home = tempdir().unwrap();
        let state = AppState {
            home: Arc::new(home.path().to_path_buf()),
            library_root: Arc::new(home.path().join("library")),
            working_dir: Arc::new(home.path().to_path_buf()),
        };

        let mut config = DashboardConfig::defaults(home.path());
        config.theme = "light".to_string();
        save_config(State(state.clone()), Json(config)).await.unwrap();

        let Json(loaded) = get_config(State(state)).await;
        assert_eq!(loaded.theme, "light");
    }
}
