//! Source classification by naming convention.
//!
//! Three rules, applied in order: a personal marker (`.personal.md` suffix
//! or a `personal` path segment) wins, then an organization prefix
//! (`[a-z0-9]+-`), then base.

use std::path::Path;

use super::types::AssetSource;

/// True for `*.personal.md` files and anything inside a `personal/`
/// directory.
pub fn is_personal_path(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name.ends_with(".personal.md") {
            return true;
        }
    }
    match path.parent() {
        Some(dir) => dir.components().any(|c| c.as_os_str() == "personal"),
        None => false,
    }
}

/// Classify an asset name.
pub fn classify(name: &str) -> AssetSource {
    if is_personal_path(Path::new(name)) {
        return AssetSource::Personal;
    }
    if has_org_prefix(name) {
        return AssetSource::Org;
    }
    AssetSource::Base
}

/// One or more lowercase-alphanumeric characters followed by a dash.
fn has_org_prefix(name: &str) -> bool {
    match name.find('-') {
        Some(0) | None => false,
        Some(i) => name[..i]
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()),
    }
}
