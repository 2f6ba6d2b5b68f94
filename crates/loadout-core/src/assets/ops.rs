//! Archive, restore, and delete operations on local assets.
//!
//! Archiving moves an entry into a `.archived` subdirectory next to the
//! live assets so hidden-entry filtering keeps it out of listings; restoring
//! moves it back. `entry` is the on-disk name: the skill directory name, or
//! `<name>.md` for file-backed kinds.

use std::io;
use std::path::Path;

use thiserror::Error;
use tokio::fs;
use tracing::info;

use crate::constants::ARCHIVE_DIR_NAME;

/// Failure modes the HTTP layer needs to tell apart.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Move an entry into `.archived`.
pub async fn archive(local_dir: &Path, entry: &str) -> Result<(), OpError> {
    let from = local_dir.join(entry);
    if fs::metadata(&from).await.is_err() {
        return Err(OpError::NotFound(entry.to_string()));
    }

    let archive_dir = local_dir.join(ARCHIVE_DIR_NAME);
    fs::create_dir_all(&archive_dir).await?;
    fs::rename(&from, archive_dir.join(entry)).await?;
    info!("Archived {:?}", from);
    Ok(())
}

/// Restore a previously archived entry.
pub async fn unarchive(local_dir: &Path, entry: &str) -> Result<(), OpError> {
    let from = local_dir.join(ARCHIVE_DIR_NAME).join(entry);
    if fs::metadata(&from).await.is_err() {
        return Err(OpError::NotFound(entry.to_string()));
    }

    fs::rename(&from, local_dir.join(entry)).await?;
    info!("Restored {:?}", local_dir.join(entry));
    Ok(())
}

/// Permanently delete an entry. Skill directories are removed recursively.
pub async fn delete(local_dir: &Path, entry: &str) -> Result<(), OpError> {
    let target = local_dir.join(entry);
    let metadata = match fs::metadata(&target).await {
        Ok(metadata) => metadata,
        Err(_) => return Err(OpError::NotFound(entry.to_string())),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(&target).await?;
    } else {
        fs::remove_file(&target).await?;
    }
    info!("Deleted {:?}", target);
    Ok(())
}
