//! Customization asset records.

use std::path::PathBuf;

use crate::constants::{
    AGENTS_DIR_NAME, COMMANDS_DIR_NAME, OUTPUT_STYLES_DIR_NAME, SKILLS_DIR_NAME,
};

/// The four customization kinds managed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Skill,
    Command,
    Agent,
    OutputStyle,
}

impl AssetKind {
    /// Stable identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Skill => "skill",
            AssetKind::Command => "command",
            AssetKind::Agent => "agent",
            AssetKind::OutputStyle => "output-style",
        }
    }

    /// Well-known subdirectory holding assets of this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            AssetKind::Skill => SKILLS_DIR_NAME,
            AssetKind::Command => COMMANDS_DIR_NAME,
            AssetKind::Agent => AGENTS_DIR_NAME,
            AssetKind::OutputStyle => OUTPUT_STYLES_DIR_NAME,
        }
    }

    /// Human label for messages.
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Skill => "Skill",
            AssetKind::Command => "Command",
            AssetKind::Agent => "Agent",
            AssetKind::OutputStyle => "Output style",
        }
    }
}

/// Where a customization came from, by naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    Base,
    Org,
    Personal,
}

impl AssetSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetSource::Base => "base",
            AssetSource::Org => "org",
            AssetSource::Personal => "personal",
        }
    }
}

/// A skill: a directory containing a `SKILL.md` manifest.
#[derive(Debug, Clone)]
pub struct Skill {
    /// Directory base name (not the manifest's `name` field).
    pub name: String,
    pub description: String,
    pub path: PathBuf,
    /// Raw manifest text.
    pub content: String,
    pub is_local: bool,
    pub is_archived: bool,
    pub is_personal: bool,
    pub is_template: bool,
    pub source: AssetSource,
}

/// A slash command: one markdown file.
#[derive(Debug, Clone)]
pub struct Command {
    /// File stem (without the `.md` extension).
    pub name: String,
    pub description: String,
    pub path: PathBuf,
    pub content: String,
    pub is_local: bool,
    pub is_archived: bool,
    pub is_personal: bool,
    pub is_template: bool,
    pub source: AssetSource,
    pub allowed_tools: Option<String>,
    pub argument_hint: Option<String>,
    pub model: Option<String>,
}

/// A subagent definition: one markdown file whose body is the prompt.
#[derive(Debug, Clone)]
pub struct Agent {
    pub name: String,
    pub description: String,
    pub path: PathBuf,
    pub content: String,
    /// Trimmed body text.
    pub prompt: String,
    pub is_local: bool,
    pub is_archived: bool,
    pub is_personal: bool,
    pub is_template: bool,
    pub source: AssetSource,
    pub tools: Option<Vec<String>>,
    pub model: Option<String>,
}

/// An output style: one markdown file whose body is the instructions.
#[derive(Debug, Clone)]
pub struct OutputStyle {
    pub name: String,
    pub description: String,
    pub path: PathBuf,
    pub content: String,
    /// Trimmed body text.
    pub instructions: String,
    pub is_local: bool,
    pub is_archived: bool,
    pub is_personal: bool,
    pub is_template: bool,
    pub source: AssetSource,
}

/// Common view over the four asset record types, used where the dashboard
/// treats them uniformly.
pub trait AssetRecord {
    fn name(&self) -> &str;
    fn set_archived(&mut self, archived: bool);
}

impl AssetRecord for Skill {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_archived(&mut self, archived: bool) {
        self.is_archived = archived;
    }
}

impl AssetRecord for Command {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_archived(&mut self, archived: bool) {
        self.is_archived = archived;
    }
}

impl AssetRecord for Agent {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_archived(&mut self, archived: bool) {
        self.is_archived = archived;
    }
}

impl AssetRecord for OutputStyle {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_archived(&mut self, archived: bool) {
        self.is_archived = archived;
    }
}
