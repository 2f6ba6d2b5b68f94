//! Project discovery: recursive search for `.claude` configuration
//! directories.
//!
//! The walker is best-effort throughout. Unreadable roots and directories
//! are skipped silently, stat failures fall back to defaults, and the only
//! externally visible failure mode is an empty result set.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tokio::fs;
use tracing::debug;

use crate::constants::{
    AGENTS_DIR_NAME, COMMANDS_DIR_NAME, CONFIG_DIR_NAME, DEFAULT_MAX_DEPTH, DISCOVERY_DENYLIST,
    FIXED_SEARCH_ROOT, HOME_PROJECT_LABEL, HOME_SEARCH_SUBDIRS, OUTPUT_STYLES_DIR_NAME,
    SETTINGS_FILE_NAME, SKILLS_DIR_NAME,
};

/// Number of assets of each kind inside one configuration directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetCounts {
    pub skills: usize,
    pub commands: usize,
    pub agents: usize,
    pub output_styles: usize,
}

/// One located configuration directory and its summary metadata.
#[derive(Debug, Clone)]
pub struct DiscoveredProject {
    /// Display name: the project root's base name, or a fixed label for the
    /// home directory itself.
    pub name: String,
    /// Project root (parent of `claude_path`).
    pub path: PathBuf,
    /// The `.claude` directory itself.
    pub claude_path: PathBuf,
    pub last_modified: DateTime<Utc>,
    pub has_settings: bool,
    pub counts: AssetCounts,
}

/// Where and how deep to search. The home directory is an explicit input so
/// callers (and tests) control the default root set.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub home: PathBuf,
    pub max_depth: usize,
    pub extra_roots: Vec<PathBuf>,
}

impl DiscoveryOptions {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            extra_roots: Vec::new(),
        }
    }

    pub fn with_extra_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.extra_roots = roots;
        self
    }

    /// Default root set unioned with caller-supplied roots, de-duplicated,
    /// first occurrence wins.
    fn search_roots(&self) -> Vec<PathBuf> {
        let mut roots = vec![self.home.clone(), PathBuf::from(FIXED_SEARCH_ROOT)];
        for sub in HOME_SEARCH_SUBDIRS {
            roots.push(self.home.join(sub));
        }
        for root in &self.extra_roots {
            if !roots.contains(root) {
                roots.push(root.clone());
            }
        }
        roots
    }
}

/// Discover every configuration directory reachable from the options'
/// search roots, most recently modified first.
pub async fn discover_projects(options: &DiscoveryOptions) -> Vec<DiscoveredProject> {
    let mut claude_dirs = Vec::new();
    for root in options.search_roots() {
        if fs::metadata(&root).await.is_err() {
            continue;
        }
        claude_dirs.extend(find_claude_dirs(&root, options.max_depth, 0).await);
    }

    let mut projects = join_all(
        claude_dirs
            .iter()
            .map(|dir| project_info(dir, &options.home)),
    )
    .await;

    sort_by_recency(&mut projects);
    projects
}

/// Look up a single configuration directory, `None` when inaccessible.
pub async fn project_by_path(claude_path: &Path, home: &Path) -> Option<DiscoveredProject> {
    if fs::metadata(claude_path).await.is_err() {
        return None;
    }
    Some(project_info(claude_path, home).await)
}

/// Recursively collect `.claude` directories under `dir`.
///
/// Hidden entries (other than `.claude` itself) and denylisted directories
/// are never descended into, and a `.claude` match is a leaf: its contents
/// are not searched for further matches.
async fn find_claude_dirs(dir: &Path, max_depth: usize, depth: usize) -> Vec<PathBuf> {
    let mut found = Vec::new();
    if depth >= max_depth {
        return found;
    }

    let Ok(mut entries) = fs::read_dir(dir).await else {
        debug!("Skipping unreadable directory {:?}", dir);
        return found;
    };

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            _ => break,
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') && name != CONFIG_DIR_NAME {
            continue;
        }
        if DISCOVERY_DENYLIST.contains(&name.as_str()) {
            continue;
        }

        let Ok(file_type) = entry.file_type().await else {
            continue;
        };
        if !file_type.is_dir() {
            continue;
        }

        if name == CONFIG_DIR_NAME {
            found.push(entry.path());
        } else {
            let nested = Box::pin(find_claude_dirs(&entry.path(), max_depth, depth + 1)).await;
            found.extend(nested);
        }
    }

    found
}

/// Build the project record for one discovered configuration directory.
///
/// Every lookup is independent and read-only, so the stat, settings check,
/// and asset counts run concurrently.
pub async fn project_info(claude_path: &Path, home: &Path) -> DiscoveredProject {
    let project_path = claude_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| claude_path.to_path_buf());

    let name = if project_path == home {
        HOME_PROJECT_LABEL.to_string()
    } else {
        project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| project_path.display().to_string())
    };

    let (last_modified, has_settings, counts) = tokio::join!(
        modified_time(claude_path),
        settings_present(claude_path),
        count_assets(claude_path),
    );

    DiscoveredProject {
        name,
        path: project_path,
        claude_path: claude_path.to_path_buf(),
        last_modified,
        has_settings,
        counts,
    }
}

/// Count assets in the four well-known subdirectories. A missing or
/// unreadable subdirectory counts zero.
pub async fn count_assets(claude_path: &Path) -> AssetCounts {
    let (skills, commands, agents, output_styles) = tokio::join!(
        count_asset_dirs(claude_path.join(SKILLS_DIR_NAME)),
        count_markdown_files(claude_path.join(COMMANDS_DIR_NAME)),
        count_markdown_files(claude_path.join(AGENTS_DIR_NAME)),
        count_markdown_files(claude_path.join(OUTPUT_STYLES_DIR_NAME)),
    );
    AssetCounts {
        skills,
        commands,
        agents,
        output_styles,
    }
}

async fn modified_time(path: &Path) -> DateTime<Utc> {
    match fs::metadata(path).await.and_then(|meta| meta.modified()) {
        Ok(mtime) => DateTime::<Utc>::from(mtime),
        Err(_) => Utc::now(),
    }
}

async fn settings_present(claude_path: &Path) -> bool {
    fs::metadata(claude_path.join(SETTINGS_FILE_NAME))
        .await
        .is_ok()
}

/// Skills are one non-hidden directory each.
async fn count_asset_dirs(dir: PathBuf) -> usize {
    let Ok(mut entries) = fs::read_dir(&dir).await else {
        return 0;
    };
    let mut count = 0;
    while let Ok(Some(entry)) = entries.next_entry().await {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false)
        {
            count += 1;
        }
    }
    count
}

/// Commands, agents, and output styles are one `.md` file each.
async fn count_markdown_files(dir: PathBuf) -> usize {
    let Ok(mut entries) = fs::read_dir(&dir).await else {
        return 0;
    };
    let mut count = 0;
    while let Ok(Some(entry)) = entries.next_entry().await {
        if !entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false)
        {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(".md") {
            count += 1;
        }
    }
    count
}

/// Most recently modified first; the sort is stable so ties keep input
/// order.
fn sort_by_recency(projects: &mut [DiscoveredProject]) {
    projects.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs as std_fs;
    use tempfile::tempdir;

    fn project(name: &str, last_modified: DateTime<Utc>) -> DiscoveredProject {
        DiscoveredProject {
            name: name.to_string(),
            path: PathBuf::from("/tmp").join(name),
            claude_path: PathBuf::from("/tmp").join(name).join(CONFIG_DIR_NAME),
            last_modified,
            has_settings: false,
            counts: AssetCounts::default(),
        }
    }

    #[tokio::test]
    async fn finds_claude_dirs_and_treats_them_as_leaves() {
        let root = tempdir().unwrap();
        std_fs::create_dir_all(root.path().join(".claude/.claude")).unwrap();
        std_fs::create_dir_all(root.path().join("proj/.claude")).unwrap();

        let mut found = find_claude_dirs(root.path(), DEFAULT_MAX_DEPTH, 0).await;
        found.sort();
        assert_eq!(
            found,
            vec![
                root.path().join(".claude"),
                root.path().join("proj/.claude"),
            ]
        );
    }

    #[tokio::test]
    async fn depth_bound_is_enforced() {
        let root = tempdir().unwrap();
        std_fs::create_dir_all(root.path().join(".claude")).unwrap();
        std_fs::create_dir_all(root.path().join("sub/.claude")).unwrap();

        let found = find_claude_dirs(root.path(), 1, 0).await;
        assert_eq!(found, vec![root.path().join(".claude")]);
    }

    #[tokio::test]
    async fn denylisted_directories_are_not_descended() {
        let root = tempdir().unwrap();
        std_fs::create_dir_all(root.path().join("node_modules/.claude")).unwrap();
        std_fs::create_dir_all(root.path().join("target/.claude")).unwrap();

        let found = find_claude_dirs(root.path(), DEFAULT_MAX_DEPTH, 0).await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn hidden_directories_are_skipped_except_claude() {
        let root = tempdir().unwrap();
        std_fs::create_dir_all(root.path().join(".cache/.claude")).unwrap();

        let found = find_claude_dirs(root.path(), DEFAULT_MAX_DEPTH, 0).await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn missing_root_yields_empty_result() {
        let root = tempdir().unwrap();
        let options = DiscoveryOptions::new(root.path().join("does-not-exist"));
        assert!(discover_projects(&options).await.is_empty());
    }

    #[tokio::test]
    async fn duplicate_roots_are_scanned_once() {
        let home = tempdir().unwrap();
        std_fs::create_dir_all(home.path().join(".claude")).unwrap();

        let options = DiscoveryOptions::new(home.path())
            .with_extra_roots(vec![home.path().to_path_buf()]);
        let projects = discover_projects(&options).await;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, HOME_PROJECT_LABEL);
    }

    #[tokio::test]
    async fn project_info_uses_home_label_and_settings_flag() {
        let home = tempdir().unwrap();
        let claude = home.path().join(".claude");
        std_fs::create_dir_all(&claude).unwrap();
        std_fs::write(claude.join(SETTINGS_FILE_NAME), "{}").unwrap();

        let info = project_info(&claude, home.path()).await;
        assert_eq!(info.name, HOME_PROJECT_LABEL);
        assert_eq!(info.path, home.path());
        assert!(info.has_settings);
    }

    #[tokio::test]
    async fn project_info_names_other_roots_by_basename() {
        let home = tempdir().unwrap();
        let claude = home.path().join("my-app/.claude");
        std_fs::create_dir_all(&claude).unwrap();

        let info = project_info(&claude, home.path()).await;
        assert_eq!(info.name, "my-app");
        assert!(!info.has_settings);
    }

    #[tokio::test]
    async fn counts_markdown_files_and_skill_dirs() {
        let root = tempdir().unwrap();
        let claude = root.path().join(".claude");
        std_fs::create_dir_all(claude.join("commands")).unwrap();
        std_fs::write(claude.join("commands/a.md"), "").unwrap();
        std_fs::write(claude.join("commands/b.md"), "").unwrap();
        std_fs::write(claude.join("commands/notes.txt"), "").unwrap();
        std_fs::create_dir_all(claude.join("skills/review")).unwrap();
        std_fs::create_dir_all(claude.join("skills/.archived")).unwrap();

        let counts = count_assets(&claude).await;
        assert_eq!(counts.commands, 2);
        assert_eq!(counts.skills, 1);
        assert_eq!(counts.agents, 0);
        assert_eq!(counts.output_styles, 0);
    }

    #[tokio::test]
    async fn project_by_path_returns_none_for_missing_dir() {
        let root = tempdir().unwrap();
        let missing = root.path().join("gone/.claude");
        assert!(project_by_path(&missing, root.path()).await.is_none());
    }

    #[test]
    fn most_recent_project_sorts_first() {
        let day1 = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap();
        let mut projects = vec![project("older", day1), project("newer", day2)];

        sort_by_recency(&mut projects);
        assert_eq!(projects[0].name, "newer");
        assert_eq!(projects[1].name, "older");
    }

    #[test]
    fn extra_roots_follow_defaults() {
        let options = DiscoveryOptions::new("/home/sam")
            .with_extra_roots(vec![PathBuf::from("/srv/repos"), PathBuf::from("/home/sam")]);
        let roots = options.search_roots();
        assert_eq!(roots[0], PathBuf::from("/home/sam"));
        assert_eq!(roots[1], PathBuf::from(FIXED_SEARCH_ROOT));
        assert_eq!(*roots.last().unwrap(), PathBuf::from("/srv/repos"));
        assert_eq!(
            roots
                .iter()
                .filter(|r| **r == PathBuf::from("/home/sam"))
                .count(),
            1
        );
    }
}
