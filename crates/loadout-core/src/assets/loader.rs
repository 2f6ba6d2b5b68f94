//! Best-effort asset readers.
//!
//! Missing or unreadable files are absences, not errors: readers return
//! `None`, listings return whatever could be read. Per-entry reads run
//! concurrently since they are independent.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use tokio::fs;
use tracing::debug;

use crate::constants::SKILL_MANIFEST_NAME;
use crate::frontmatter;

use super::source::{classify, is_personal_path};
use super::types::{Agent, AssetRecord, Command, OutputStyle, Skill};

/// Read one skill directory. `None` when `SKILL.md` is missing or
/// unreadable.
pub async fn read_skill(skill_path: &Path, is_local: bool) -> Option<Skill> {
    let manifest = skill_path.join(SKILL_MANIFEST_NAME);
    let content = match fs::read_to_string(&manifest).await {
        Ok(content) => content,
        Err(e) => {
            debug!("Skipping skill at {:?}: {}", skill_path, e);
            return None;
        }
    };

    let doc = frontmatter::parse(&content);
    let metadata = frontmatter::skill_metadata(&doc);
    let name = file_name_string(skill_path);

    Some(Skill {
        source: classify(&name),
        is_personal: is_personal_path(skill_path),
        name,
        description: metadata.description,
        path: skill_path.to_path_buf(),
        content,
        is_local,
        is_archived: false,
        is_template: !is_local,
    })
}

/// Read one command file. `None` when missing or unreadable.
pub async fn read_command(path: &Path, is_local: bool) -> Option<Command> {
    let content = read_markdown(path).await?;
    let doc = frontmatter::parse(&content);
    let metadata = frontmatter::command_metadata(&doc);
    let name = file_stem_string(path);

    Some(Command {
        source: classify(&name),
        is_personal: is_personal_path(path),
        name,
        description: metadata.description,
        path: path.to_path_buf(),
        content,
        is_local,
        is_archived: false,
        is_template: !is_local,
        allowed_tools: metadata.allowed_tools,
        argument_hint: metadata.argument_hint,
        model: metadata.model,
    })
}

/// Read one agent file. The document body becomes the agent prompt.
pub async fn read_agent(path: &Path, is_local: bool) -> Option<Agent> {
    let content = read_markdown(path).await?;
    let doc = frontmatter::parse(&content);
    let metadata = frontmatter::agent_metadata(&doc);
    let name = file_stem_string(path);

    Some(Agent {
        source: classify(&name),
        is_personal: is_personal_path(path),
        name,
        description: metadata.description,
        path: path.to_path_buf(),
        prompt: doc.body.trim().to_string(),
        content,
        is_local,
        is_archived: false,
        is_template: !is_local,
        tools: metadata.tools,
        model: metadata.model,
    })
}

/// Read one output style file. The document body becomes the instructions.
pub async fn read_output_style(path: &Path, is_local: bool) -> Option<OutputStyle> {
    let content = read_markdown(path).await?;
    let doc = frontmatter::parse(&content);
    let metadata = frontmatter::output_style_metadata(&doc);
    let name = file_stem_string(path);

    Some(OutputStyle {
        source: classify(&name),
        is_personal: is_personal_path(path),
        name,
        description: metadata.description,
        path: path.to_path_buf(),
        instructions: doc.body.trim().to_string(),
        content,
        is_local,
        is_archived: false,
        is_template: !is_local,
    })
}

/// List skills in a directory: one per non-hidden subdirectory.
pub async fn list_skills(dir: &Path, is_local: bool) -> Vec<Skill> {
    let paths = subdirectories(dir).await;
    let skills = join_all(paths.iter().map(|p| read_skill(p, is_local))).await;
    let mut skills: Vec<Skill> = skills.into_iter().flatten().collect();
    skills.sort_by(|a, b| a.name.cmp(&b.name));
    skills
}

/// List command files (`*.md`) in a directory.
pub async fn list_commands(dir: &Path, is_local: bool) -> Vec<Command> {
    let paths = markdown_files(dir).await;
    let commands = join_all(paths.iter().map(|p| read_command(p, is_local))).await;
    let mut commands: Vec<Command> = commands.into_iter().flatten().collect();
    commands.sort_by(|a, b| a.name.cmp(&b.name));
    commands
}

/// List agent files (`*.md`) in a directory.
pub async fn list_agents(dir: &Path, is_local: bool) -> Vec<Agent> {
    let paths = markdown_files(dir).await;
    let agents = join_all(paths.iter().map(|p| read_agent(p, is_local))).await;
    let mut agents: Vec<Agent> = agents.into_iter().flatten().collect();
    agents.sort_by(|a, b| a.name.cmp(&b.name));
    agents
}

/// List output style files (`*.md`) in a directory.
pub async fn list_output_styles(dir: &Path, is_local: bool) -> Vec<OutputStyle> {
    let paths = markdown_files(dir).await;
    let styles = join_all(paths.iter().map(|p| read_output_style(p, is_local))).await;
    let mut styles: Vec<OutputStyle> = styles.into_iter().flatten().collect();
    styles.sort_by(|a, b| a.name.cmp(&b.name));
    styles
}

/// Read a single named skill out of `dir`.
pub async fn get_skill(dir: &Path, name: &str, is_local: bool) -> Option<Skill> {
    read_skill(&dir.join(name), is_local).await
}

/// Read a single named command out of `dir`.
pub async fn get_command(dir: &Path, name: &str, is_local: bool) -> Option<Command> {
    read_command(&dir.join(format!("{}.md", name)), is_local).await
}

/// Read a single named agent out of `dir`.
pub async fn get_agent(dir: &Path, name: &str, is_local: bool) -> Option<Agent> {
    read_agent(&dir.join(format!("{}.md", name)), is_local).await
}

/// Read a single named output style out of `dir`.
pub async fn get_output_style(dir: &Path, name: &str, is_local: bool) -> Option<OutputStyle> {
    read_output_style(&dir.join(format!("{}.md", name)), is_local).await
}

/// Mark entries whose names appear in the archived list.
pub fn apply_archive_flags<T: AssetRecord>(items: &mut [T], archived_names: &[String]) {
    for item in items {
        let archived = archived_names.iter().any(|name| name == item.name());
        item.set_archived(archived);
    }
}

async fn read_markdown(path: &Path) -> Option<String> {
    match fs::read_to_string(path).await {
        Ok(content) => Some(content),
        Err(e) => {
            debug!("Skipping asset at {:?}: {}", path, e);
            None
        }
    }
}

async fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    let Ok(mut entries) = fs::read_dir(dir).await else {
        debug!("Cannot list asset directory {:?}", dir);
        return Vec::new();
    };
    let mut paths = Vec::new();
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
            paths.push(entry.path());
        }
    }
    paths
}

async fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(mut entries) = fs::read_dir(dir).await else {
        debug!("Cannot list asset directory {:?}", dir);
        return Vec::new();
    };
    let mut paths = Vec::new();
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
            paths.push(entry.path());
        }
    }
    paths
}

fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem_string(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
