//! Customization endpoints, shared by all four asset kinds.
//!
//! Each kind mounts the same route shape under its own prefix:
//! - `GET /` — bundled library list
//! - `GET /local` — local list with archive flags applied
//! - `GET /:name` — single asset (`?local=true` for the local copy)
//! - `DELETE /:name` — delete a local asset
//! - `POST /:name` — `{"action": "archive" | "unarchive"}`

use std::path::Path;

use axum::{
    extract::{Path as UrlPath, Query, State},
    routing::get,
    Json, Router,
};

use loadout_core::assets::{self, AssetKind};
use loadout_core::config::DashboardConfig;

use crate::error::AppError;
use crate::types::{ActionResponse, ArchiveActionRequest, CustomizationResponse, LocalQuery};
use crate::AppState;

/// Build the router for one asset kind.
pub fn router(kind: AssetKind) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(move |state: State<AppState>| list_library(state, kind)),
        )
        .route(
            "/local",
            get(move |state: State<AppState>| list_local(state, kind)),
        )
        .route(
            "/:name",
            get(
                move |state: State<AppState>, name: UrlPath<String>, query: Query<LocalQuery>| {
                    get_one(state, name, query, kind)
                },
            )
            .delete(move |state: State<AppState>, name: UrlPath<String>| {
                delete_one(state, name, kind)
            })
            .post(
                move |state: State<AppState>,
                      name: UrlPath<String>,
                      req: Json<ArchiveActionRequest>| {
                    archive_action(state, name, req, kind)
                },
            ),
        )
}

/// List assets bundled with the dashboard's library checkout.
async fn list_library(
    State(state): State<AppState>,
    kind: AssetKind,
) -> Result<Json<Vec<CustomizationResponse>>, AppError> {
    let dir = state.library_root.join(kind.dir_name());
    Ok(Json(load_all(&dir, kind, false, &[]).await))
}

/// List local assets, marking entries archived via the dashboard config.
async fn list_local(
    State(state): State<AppState>,
    kind: AssetKind,
) -> Result<Json<Vec<CustomizationResponse>>, AppError> {
    let config = DashboardConfig::load(&state.home).await;
    let dir = config.local_dir(kind, &state.home);
    Ok(Json(load_all(&dir, kind, true, config.archived_names(kind)).await))
}

/// Fetch a single asset by name.
async fn get_one(
    State(state): State<AppState>,
    UrlPath(name): UrlPath<String>,
    Query(query): Query<LocalQuery>,
    kind: AssetKind,
) -> Result<Json<CustomizationResponse>, AppError> {
    validate_name(&name)?;

    let dir = if query.local {
        let config = DashboardConfig::load(&state.home).await;
        config.local_dir(kind, &state.home)
    } else {
        state.library_root.join(kind.dir_name())
    };

    load_one(&dir, &name, kind, query.local)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("{} not found: {}", kind.label(), name)))
}

/// Delete a local asset.
async fn delete_one(
    State(state): State<AppState>,
    UrlPath(name): UrlPath<String>,
    kind: AssetKind,
) -> Result<Json<ActionResponse>, AppError> {
    validate_name(&name)?;

    let config = DashboardConfig::load(&state.home).await;
    let dir = config.local_dir(kind, &state.home);
    assets::delete(&dir, &entry_name(kind, &name)).await?;

    Ok(Json(ActionResponse {
        success: true,
        message: format!("{} deleted successfully", kind.label()),
    }))
}

/// Archive or restore a local asset.
async fn archive_action(
    State(state): State<AppState>,
    UrlPath(name): UrlPath<String>,
    Json(req): Json<ArchiveActionRequest>,
    kind: AssetKind,
) -> Result<Json<ActionResponse>, AppError> {
    validate_name(&name)?;

    let config = DashboardConfig::load(&state.home).await;
    let dir = config.local_dir(kind, &state.home);
    let entry = entry_name(kind, &name);

    match req.action.as_str() {
        "archive" => {
            assets::archive(&dir, &entry).await?;
            Ok(Json(ActionResponse {
                success: true,
                message: format!("{} archived successfully", kind.label()),
            }))
        }
        "unarchive" => {
            assets::unarchive(&dir, &entry).await?;
            Ok(Json(ActionResponse {
                success: true,
                message: format!("{} restored successfully", kind.label()),
            }))
        }
        other => Err(AppError::BadRequest(format!("Invalid action: {}", other))),
    }
}

async fn load_all(
    dir: &Path,
    kind: AssetKind,
    is_local: bool,
    archived: &[String],
) -> Vec<CustomizationResponse> {
    match kind {
        AssetKind::Skill => {
            let mut items = assets::list_skills(dir, is_local).await;
            assets::apply_archive_flags(&mut items, archived);
            items
                .into_iter()
                .map(|s| CustomizationResponse::Skill(s.into()))
                .collect()
        }
        AssetKind::Command => {
            let mut items = assets::list_commands(dir, is_local).await;
            assets::apply_archive_flags(&mut items, archived);
            items
                .into_iter()
                .map(|c| CustomizationResponse::Command(c.into()))
                .collect()
        }
        AssetKind::Agent => {
            let mut items = assets::list_agents(dir, is_local).await;
            assets::apply_archive_flags(&mut items, archived);
            items
                .into_iter()
                .map(|a| CustomizationResponse::Agent(a.into()))
                .collect()
        }
        AssetKind::OutputStyle => {
            let mut items = assets::list_output_styles(dir, is_local).await;
            assets::apply_archive_flags(&mut items, archived);
            items
                .into_iter()
                .map(|o| CustomizationResponse::OutputStyle(o.into()))
                .collect()
        }
    }
}

async fn load_one(
    dir: &Path,
    name: &str,
    kind: AssetKind,
    is_local: bool,
) -> Option<CustomizationResponse> {
    match kind {
        AssetKind::Skill => assets::get_skill(dir, name, is_local)
            .await
            .map(|s| CustomizationResponse::Skill(s.into())),
        AssetKind::Command => assets::get_command(dir, name, is_local)
            .await
            .map(|c| CustomizationResponse::Command(c.into())),
        AssetKind::Agent => assets::get_agent(dir, name, is_local)
            .await
            .map(|a| CustomizationResponse::Agent(a.into())),
        AssetKind::OutputStyle => assets::get_output_style(dir, name, is_local)
            .await
            .map(|o| CustomizationResponse::OutputStyle(o.into())),
    }
}

/// Skills live in a directory named after the asset; everything else is a
/// single markdown file.
fn entry_name(kind: AssetKind, name: &str) -> String {
    match kind {
        AssetKind::Skill => name.to_string(),
        _ => format!("{}.md", name),
    }
}

/// Reject names that could escape the asset directory.
fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(AppError::BadRequest(format!("Invalid name: {}", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    fn state(home: &TempDir, library: &TempDir) -> AppState {
        AppState {
            home: Arc::new(home.path().to_path_buf()),
            library_root: Arc::new(library.path().to_path_buf()),
            working_dir: Arc::new(PathBuf::from(".")),
        }
    }

    fn seed_local_command(home: &TempDir, name: &str) {
        let dir = home.path().join(".claude/commands");
        std_fs::create_dir_all(&dir).unwrap();
        std_fs::write(
            dir.join(format!("{}.md", name)),
            "---\ndescription: test\n---\n",
        )
        .unwrap();
    }

    #[tokio::test]
    async fn local_listing_reads_default_claude_dir() {
        let home = tempdir().unwrap();
        let library = tempdir().unwrap();
        seed_local_command(&home, "deploy");

        let Json(items) = list_local(State(state(&home, &library)), AssetKind::Command)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn archive_action_rejects_unknown_action() {
        let home = tempdir().unwrap();
        let library = tempdir().unwrap();
        seed_local_command(&home, "deploy");

        let result = archive_action(
            State(state(&home, &library)),
            UrlPath("deploy".to_string()),
            Json(ArchiveActionRequest {
                action: "obliterate".to_string(),
            }),
            AssetKind::Command,
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn archive_then_unarchive_moves_the_file() {
        let home = tempdir().unwrap();
        let library = tempdir().unwrap();
        seed_local_command(&home, "deploy");
        let commands_dir = home.path().join(".claude/commands");

        archive_action(
            State(state(&home, &library)),
            UrlPath("deploy".to_string()),
            Json(ArchiveActionRequest {
                action: "archive".to_string(),
            }),
            AssetKind::Command,
        )
        .await
        .unwrap();
        assert!(commands_dir.join(".archived/deploy.md").exists());

        archive_action(
            State(state(&home, &library)),
            UrlPath("deploy".to_string()),
            Json(ArchiveActionRequest {
                action: "unarchive".to_string(),
            }),
            AssetKind::Command,
        )
        .await
        .unwrap();
        assert!(commands_dir.join("deploy.md").exists());
    }

    #[tokio::test]
    async fn delete_of_missing_asset_is_not_found() {
        let home = tempdir().unwrap();
        let library = tempdir().unwrap();

        let result = delete_one(
            State(state(&home, &library)),
            UrlPath("ghost".to_string()),
            AssetKind::Skill,
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn traversal_names_are_rejected() {
        let home = tempdir().unwrap();
        let library = tempdir().unwrap();

        let result = delete_one(
            State(state(&home, &library)),
            UrlPath("../escape".to_string()),
            AssetKind::Command,
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn library_listing_reads_library_root() {
        let home = tempdir().unwrap();
        let library = tempdir().unwrap();
        let skills = library.path().join("skills/review");
        std_fs::create_dir_all(&skills).unwrap();
        std_fs::write(skills.join("SKILL.md"), "---\ndescription: Review\n---\n").unwrap();

        let Json(items) = list_library(State(state(&home, &library)), AssetKind::Skill)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);

        let value = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(value["name"], "review");
        assert_eq!(value["isTemplate"], true);
    }
}
