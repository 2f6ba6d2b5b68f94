//! Dashboard configuration persisted under `<home>/.config/loadout/`.
//!
//! Loading is total: a missing or malformed file yields the defaults, and
//! any field absent on disk is filled in from the configured base path so
//! older config files keep working.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::assets::AssetKind;
use crate::constants::{
    AGENTS_DIR_NAME, COMMANDS_DIR_NAME, CONFIG_DIR_NAME, OUTPUT_STYLES_DIR_NAME, SKILLS_DIR_NAME,
};
use crate::paths;

const DEFAULT_REPO_URL: &str = "https://github.com/you/loadout";
const DEFAULT_THEME: &str = "dark";

/// Persisted dashboard configuration. Path fields may carry a leading `~`,
/// expanded against the home directory at use sites.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Base path of the active `.claude` directory.
    pub claude_base_path: String,
    pub local_skills_path: String,
    pub local_commands_path: String,
    pub local_agents_path: String,
    pub local_output_styles_path: String,
    pub git_repo_url: String,
    pub archived_skills: Vec<String>,
    pub archived_commands: Vec<String>,
    pub archived_agents: Vec<String>,
    pub archived_output_styles: Vec<String>,
    pub auto_sync: bool,
    pub theme: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            claude_base_path: format!("~/{}", CONFIG_DIR_NAME),
            local_skills_path: format!("~/{}/{}", CONFIG_DIR_NAME, SKILLS_DIR_NAME),
            local_commands_path: format!("~/{}/{}", CONFIG_DIR_NAME, COMMANDS_DIR_NAME),
            local_agents_path: format!("~/{}/{}", CONFIG_DIR_NAME, AGENTS_DIR_NAME),
            local_output_styles_path: format!("~/{}/{}", CONFIG_DIR_NAME, OUTPUT_STYLES_DIR_NAME),
            git_repo_url: DEFAULT_REPO_URL.to_string(),
            archived_skills: Vec::new(),
            archived_commands: Vec::new(),
            archived_agents: Vec::new(),
            archived_output_styles: Vec::new(),
            auto_sync: false,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// On-disk shape: every field optional so partial files from older versions
/// still load.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawConfig {
    claude_base_path: Option<String>,
    local_skills_path: Option<String>,
    local_commands_path: Option<String>,
    local_agents_path: Option<String>,
    local_output_styles_path: Option<String>,
    git_repo_url: Option<String>,
    archived_skills: Option<Vec<String>>,
    archived_commands: Option<Vec<String>>,
    archived_agents: Option<Vec<String>>,
    archived_output_styles: Option<Vec<String>>,
    auto_sync: Option<bool>,
    theme: Option<String>,
}

impl DashboardConfig {
    /// Defaults rooted at the given home directory.
    pub fn defaults(home: &Path) -> Self {
        let base = home.join(CONFIG_DIR_NAME);
        Self {
            claude_base_path: path_string(&base),
            local_skills_path: path_string(&base.join(SKILLS_DIR_NAME)),
            local_commands_path: path_string(&base.join(COMMANDS_DIR_NAME)),
            local_agents_path: path_string(&base.join(AGENTS_DIR_NAME)),
            local_output_styles_path: path_string(&base.join(OUTPUT_STYLES_DIR_NAME)),
            ..Self::default()
        }
    }

    /// Load from `<home>/.config/loadout/config.json`. Cannot fail: any
    /// read or parse problem yields the defaults.
    pub async fn load(home: &Path) -> Self {
        let file = paths::config_file(home);
        let content = match fs::read_to_string(&file).await {
            Ok(content) => content,
            Err(_) => return Self::defaults(home),
        };
        match serde_json::from_str::<RawConfig>(&content) {
            Ok(raw) => Self::resolve(raw, home),
            Err(e) => {
                debug!("Malformed config at {:?}: {}", file, e);
                Self::defaults(home)
            }
        }
    }

    fn resolve(raw: RawConfig, home: &Path) -> Self {
        let defaults = Self::defaults(home);
        let claude_base_path = raw.claude_base_path.unwrap_or(defaults.claude_base_path);
        let base = paths::expand_home(&claude_base_path, home);
        Self {
            local_skills_path: raw
                .local_skills_path
                .unwrap_or_else(|| path_string(&base.join(SKILLS_DIR_NAME))),
            local_commands_path: raw
                .local_commands_path
                .unwrap_or_else(|| path_string(&base.join(COMMANDS_DIR_NAME))),
            local_agents_path: raw
                .local_agents_path
                .unwrap_or_else(|| path_string(&base.join(AGENTS_DIR_NAME))),
            local_output_styles_path: raw
                .local_output_styles_path
                .unwrap_or_else(|| path_string(&base.join(OUTPUT_STYLES_DIR_NAME))),
            claude_base_path,
            git_repo_url: raw.git_repo_url.unwrap_or(defaults.git_repo_url),
            archived_skills: raw.archived_skills.unwrap_or_default(),
            archived_commands: raw.archived_commands.unwrap_or_default(),
            archived_agents: raw.archived_agents.unwrap_or_default(),
            archived_output_styles: raw.archived_output_styles.unwrap_or_default(),
            auto_sync: raw.auto_sync.unwrap_or(false),
            theme: raw.theme.unwrap_or(defaults.theme),
        }
    }

    /// Persist, creating the config directory if needed.
    pub async fn save(&self, home: &Path) -> Result<()> {
        let dir = paths::app_config_dir(home);
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("create config directory {}", dir.display()))?;
        let json = serde_json::to_string_pretty(self)?;
        let file = paths::config_file(home);
        fs::write(&file, json)
            .await
            .with_context(|| format!("write config file {}", file.display()))?;
        Ok(())
    }

    /// Point the local asset paths at a different `.claude` directory.
    pub fn select_project(&mut self, claude_path: &str, home: &Path) {
        let base = paths::expand_home(claude_path, home);
        self.claude_base_path = claude_path.to_string();
        self.local_skills_path = path_string(&base.join(SKILLS_DIR_NAME));
        self.local_commands_path = path_string(&base.join(COMMANDS_DIR_NAME));
        self.local_agents_path = path_string(&base.join(AGENTS_DIR_NAME));
        self.local_output_styles_path = path_string(&base.join(OUTPUT_STYLES_DIR_NAME));
    }

    /// Absolute directory holding local assets of the given kind.
    pub fn local_dir(&self, kind: AssetKind, home: &Path) -> PathBuf {
        let path = match kind {
            AssetKind::Skill => &self.local_skills_path,
            AssetKind::Command => &self.local_commands_path,
            AssetKind::Agent => &self.local_agents_path,
            AssetKind::OutputStyle => &self.local_output_styles_path,
        };
        paths::expand_home(path, home)
    }

    /// Absolute path of the active `.claude` directory.
    pub fn claude_dir(&self, home: &Path) -> PathBuf {
        paths::expand_home(&self.claude_base_path, home)
    }

    /// Names marked archived for the given kind.
    pub fn archived_names(&self, kind: AssetKind) -> &[String] {
        match kind {
            AssetKind::Skill => &self.archived_skills,
            AssetKind::Command => &self.archived_commands,
            AssetKind::Agent => &self.archived_agents,
            AssetKind::OutputStyle => &self.archived_output_styles,
        }
    }
}

fn path_string(path: &Path) -> String {
    path.display().to_string()
}
