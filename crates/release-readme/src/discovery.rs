//! Release folder discovery.
//!
//! Every immediate subdirectory of the releases directory is one release.
//! Plain files next to them (the generated README included) are skipped.

use std::path::{Path, PathBuf};

/// A release folder found under the releases directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDir {
    /// Folder name, rendered in the first table column.
    pub name: String,
    /// Path to the folder.
    pub path: PathBuf,
}

/// List the release folders under `base`, sorted by name.
pub fn discover_release_dirs(base: &Path) -> Result<Vec<ReleaseDir>, DiscoveryError> {
    if !base.exists() {
        return Err(DiscoveryError::MissingDir {
            path: base.to_path_buf(),
        });
    }
    if !base.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: base.to_path_buf(),
        });
    }

    let io_err = |source: std::io::Error| DiscoveryError::Io {
        path: base.to_path_buf(),
        source,
    };

    let mut found = Vec::new();
    for entry in std::fs::read_dir(base).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        tracing::debug!(%name, "Found release folder");
        found.push(ReleaseDir { name, path });
    }

    found.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(found)
}

/// Errors that can occur while listing the releases directory.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("releases directory '{}' does not exist", path.display())]
    MissingDir { path: PathBuf },
    #[error("releases path '{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("failed to list '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
