//! Project discovery endpoints

use std::path::PathBuf;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use loadout_core::config::DashboardConfig;
use loadout_core::discovery::{self, DiscoveryOptions};

use crate::error::AppError;
use crate::types::{ProjectResponse, ProjectsQuery, SelectProjectRequest, SelectProjectResponse};
use crate::AppState;

/// Build the projects router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects))
        .route("/select", post(select_project))
}

/// Discover configuration directories, optionally widening the search with
/// `?paths=a,b`.
async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let extra_roots = query
        .paths
        .as_deref()
        .map(parse_search_paths)
        .unwrap_or_default();

    let options =
        DiscoveryOptions::new(state.home.as_ref().clone()).with_extra_roots(extra_roots);
    let projects = discovery::discover_projects(&options).await;

    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// Point the dashboard at another project's `.claude` directory.
async fn select_project(
    State(state): State<AppState>,
    Json(req): Json<SelectProjectRequest>,
) -> Result<Json<SelectProjectResponse>, AppError> {
    let claude_path = req
        .claude_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("claudePath is required".to_string()))?;

    let mut config = DashboardConfig::load(&state.home).await;
    config.select_project(claude_path, &state.home);
    config.save(&state.home).await?;

    Ok(Json(SelectProjectResponse {
        success: true,
        message: "Project selected successfully".to_string(),
        config,
    }))
}

fn parse_search_paths(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    fn state(home: &TempDir) -> AppState {
        AppState {
            home: Arc::new(home.path().to_path_buf()),
            library_root: Arc::new(home.path().join("library")),
            working_dir: Arc::new(home.path().to_path_buf()),
        }
    }

    #[test]
    fn search_paths_are_trimmed_and_non_empty() {
        assert_eq!(
            parse_search_paths(" /srv/a , /srv/b ,, "),
            vec![PathBuf::from("/srv/a"), PathBuf::from("/srv/b")]
        );
    }

    #[tokio::test]
    async fn discovery_picks_up_extra_roots() {
        let home = tempdir().unwrap();
        let extra = tempdir().unwrap();
        std_fs::create_dir_all(extra.path().join("svc/.claude")).unwrap();

        let Json(projects) = list_projects(
            State(state(&home)),
            Query(ProjectsQuery {
                paths: Some(extra.path().display().to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "svc");
    }

    #[tokio::test]
    async fn select_requires_a_path() {
        let home = tempdir().unwrap();

        let result = select_project(
            State(state(&home)),
            Json(SelectProjectRequest { claude_path: None }),
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn select_rebases_and_persists_config() {
        let home = tempdir().unwrap();

        let Json(response) = select_project(
            State(state(&home)),
            Json(SelectProjectRequest {
                claude_path: Some("/srv/app/.claude".to_string()),
            }),
        )
        .await
        .unwrap();
        assert!(response.success);

        let reloaded = DashboardConfig::load(home.path()).await;
        assert_eq!(reloaded.claude_base_path, "/srv/app/.claude");
        assert_eq!(reloaded.local_skills_path, "/srv/app/.claude/skills");
    }
}
