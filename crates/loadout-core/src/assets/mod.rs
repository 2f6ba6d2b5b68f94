//! Customization assets: records, readers, and file operations.
//!
//! Assets live in two places:
//! - Library: a checkout of shared customizations, one subdirectory per kind.
//! - Local: the user's active `.claude` directory, selected via the
//!   dashboard config.
//!
//! A skill is a directory containing a `SKILL.md` manifest; commands,
//! agents, and output styles are single markdown files with front matter.

mod loader;
mod ops;
mod source;
mod types;

pub use loader::{
    apply_archive_flags, get_agent, get_command, get_output_style, get_skill, list_agents,
    list_commands, list_output_styles, list_skills, read_agent, read_command, read_output_style,
    read_skill,
};
pub use ops::{archive, delete, unarchive, OpError};
pub use source::{classify, is_personal_path};
pub use types::{Agent, AssetKind, AssetRecord, AssetSource, Command, OutputStyle, Skill};
