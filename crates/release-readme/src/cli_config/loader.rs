//! Config file discovery and loading for `.release-readme.toml`.

use std::path::{Path, PathBuf};

use super::CliConfig;

pub(crate) const CONFIG_FILENAME: &str = ".release-readme.toml";

/// Load CLI config from `dir`, or return defaults.
///
/// A config file that cannot be read or parsed is reported and ignored.
pub(crate) fn load_cli_config(dir: &Path) -> CliConfig {
    let path = dir.join(CONFIG_FILENAME);
    if !path.is_file() {
        return CliConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded CLI config");
                return config;
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to parse CLI config, using defaults");
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read CLI config, using defaults");
        }
    }
    CliConfig::default()
}

/// Expand a configured path, resolving `~` to the home directory.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
