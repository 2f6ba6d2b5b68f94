//! Well-known names shared across the dashboard.
//!
//! These mirror the on-disk layout the assistant uses and must not change.

/// Configuration directory name searched for during project discovery.
pub const CONFIG_DIR_NAME: &str = ".claude";

/// Settings file stored directly inside a configuration directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Subdirectory holding skills (one directory per skill).
pub const SKILLS_DIR_NAME: &str = "skills";

/// Subdirectory holding command markdown files.
pub const COMMANDS_DIR_NAME: &str = "commands";

/// Subdirectory holding agent markdown files.
pub const AGENTS_DIR_NAME: &str = "agents";

/// Subdirectory holding output style markdown files.
pub const OUTPUT_STYLES_DIR_NAME: &str = "output-styles";

/// Manifest file inside each skill directory.
pub const SKILL_MANIFEST_NAME: &str = "SKILL.md";

/// Subdirectory archived assets are moved into.
pub const ARCHIVE_DIR_NAME: &str = ".archived";

/// Front-matter delimiter line.
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Directories never descended into during discovery.
pub const DISCOVERY_DENYLIST: [&str; 7] = [
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "target",
    "vendor",
];

/// Fixed absolute search root scanned in addition to the home-relative set.
pub const FIXED_SEARCH_ROOT: &str = "/data/dev";

/// Conventional project subdirectories of home scanned by default.
pub const HOME_SEARCH_SUBDIRS: [&str; 3] = ["projects", "workspace", "code"];

/// Maximum directory depth descended from each search root.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Placeholder used when front matter omits a name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Placeholder used when front matter omits a description.
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Display label for the home configuration directory.
pub const HOME_PROJECT_LABEL: &str = "Home (~/.claude)";
