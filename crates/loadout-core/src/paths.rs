//! Path helpers shared across the dashboard.

use std::path::{Path, PathBuf};

/// Directory name under `<home>/.config` holding dashboard state.
pub const APP_CONFIG_DIR_NAME: &str = "loadout";

/// Dashboard config directory (`<home>/.config/loadout`).
pub fn app_config_dir(home: &Path) -> PathBuf {
    home.join(".config").join(APP_CONFIG_DIR_NAME)
}

/// Dashboard config file (`<home>/.config/loadout/config.json`).
pub fn config_file(home: &Path) -> PathBuf {
    app_config_dir(home).join("config.json")
}

/// Expand a leading `~` to the provided home directory. Paths without a
/// tilde pass through unchanged.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_leading_tilde() {
        let home = Path::new("/home/sam");
        assert_eq!(
            expand_home("~/.claude/skills", home),
            PathBuf::from("/home/sam/.claude/skills")
        );
        assert_eq!(expand_home("~", home), PathBuf::from("/home/sam"));
    }

    #[test]
    fn absolute_paths_pass_through() {
        let home = Path::new("/home/sam");
        assert_eq!(
            expand_home("/data/dev/.claude", home),
            PathBuf::from("/data/dev/.claude")
        );
    }

    #[test]
    fn config_file_lives_under_dot_config() {
        let home = Path::new("/home/sam");
        assert_eq!(
            config_file(home),
            PathBuf::from("/home/sam/.config/loadout/config.json")
        );
    }
}
