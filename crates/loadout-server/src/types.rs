//! Request and response types for the API
//!
//! Wire field names are camelCase for compatibility with the dashboard
//! frontend.

use serde::{Deserialize, Serialize};

use loadout_core::assets::{Agent, Command, OutputStyle, Skill};
use loadout_core::config::DashboardConfig;
use loadout_core::discovery::DiscoveredProject;

// ============================================================================
// Customization Types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub path: String,
    pub content: String,
    pub is_local: bool,
    pub is_archived: bool,
    pub is_personal: bool,
    pub is_template: bool,
    pub source: &'static str,
}

impl From<Skill> for SkillResponse {
    fn from(s: Skill) -> Self {
        Self {
            kind: "skill",
            name: s.name,
            description: s.description,
            path: s.path.display().to_string(),
            content: s.content,
            is_local: s.is_local,
            is_archived: s.is_archived,
            is_personal: s.is_personal,
            is_template: s.is_template,
            source: s.source.as_str(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub path: String,
    pub content: String,
    pub is_local: bool,
    pub is_archived: bool,
    pub is_personal: bool,
    pub is_template: bool,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl From<Command> for CommandResponse {
    fn from(c: Command) -> Self {
        Self {
            kind: "command",
            name: c.name,
            description: c.description,
            path: c.path.display().to_string(),
            content: c.content,
            is_local: c.is_local,
            is_archived: c.is_archived,
            is_personal: c.is_personal,
            is_template: c.is_template,
            source: c.source.as_str(),
            allowed_tools: c.allowed_tools,
            argument_hint: c.argument_hint,
            model: c.model,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub path: String,
    pub content: String,
    pub prompt: String,
    pub is_local: bool,
    pub is_archived: bool,
    pub is_personal: bool,
    pub is_template: bool,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl From<Agent> for AgentResponse {
    fn from(a: Agent) -> Self {
        Self {
            kind: "agent",
            name: a.name,
            description: a.description,
            path: a.path.display().to_string(),
            content: a.content,
            prompt: a.prompt,
            is_local: a.is_local,
            is_archived: a.is_archived,
            is_personal: a.is_personal,
            is_template: a.is_template,
            source: a.source.as_str(),
            tools: a.tools,
            model: a.model,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputStyleResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub path: String,
    pub content: String,
    pub instructions: String,
    pub is_local: bool,
    pub is_archived: bool,
    pub is_personal: bool,
    pub is_template: bool,
    pub source: &'static str,
}

impl From<OutputStyle> for OutputStyleResponse {
    fn from(o: OutputStyle) -> Self {
        Self {
            kind: "output-style",
            name: o.name,
            description: o.description,
            path: o.path.display().to_string(),
            content: o.content,
            instructions: o.instructions,
            is_local: o.is_local,
            is_archived: o.is_archived,
            is_personal: o.is_personal,
            is_template: o.is_template,
            source: o.source.as_str(),
        }
    }
}

/// One customization of any kind, serialized by its own shape.
#[derive(Serialize)]
#[serde(untagged)]
pub enum CustomizationResponse {
    Skill(SkillResponse),
    Command(CommandResponse),
    Agent(AgentResponse),
    OutputStyle(OutputStyleResponse),
}

#[derive(Deserialize)]
pub struct LocalQuery {
    #[serde(default)]
    pub local: bool,
}

#[derive(Deserialize)]
pub struct ArchiveActionRequest {
    pub action: String,
}

#[derive(Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

// ============================================================================
// Project Types
// ============================================================================

#[derive(Deserialize)]
pub struct ProjectsQuery {
    /// Comma-separated extra search roots.
    pub paths: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCountsResponse {
    pub skills: usize,
    pub commands: usize,
    pub agents: usize,
    pub output_styles: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub name: String,
    pub path: String,
    pub claude_path: String,
    pub last_modified: String,
    pub has_settings: bool,
    pub customization_counts: ProjectCountsResponse,
}

impl From<DiscoveredProject> for ProjectResponse {
    fn from(p: DiscoveredProject) -> Self {
        Self {
            name: p.name,
            path: p.path.display().to_string(),
            claude_path: p.claude_path.display().to_string(),
            last_modified: p.last_modified.to_rfc3339(),
            has_settings: p.has_settings,
            customization_counts: ProjectCountsResponse {
                skills: p.counts.skills,
                commands: p.counts.commands,
                agents: p.counts.agents,
                output_styles: p.counts.output_styles,
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectProjectRequest {
    pub claude_path: Option<String>,
}

#[derive(Serialize)]
pub struct SelectProjectResponse {
    pub success: bool,
    pub message: String,
    pub config: DashboardConfig,
}
