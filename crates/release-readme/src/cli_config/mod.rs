//! CLI configuration for default paths.
//!
//! Values come from `.release-readme.toml` in the working directory. Command-line
//! flags always win over the file.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use std::path::PathBuf;

use serde::Deserialize;

use loader::expand_path;
use release_readme::{DEFAULT_RELEASES_DIR, README_FILENAME};

/// Defaults read from `.release-readme.toml`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Directory holding one subdirectory per release. Default: "releases".
    pub releases_dir: Option<String>,

    /// Output file. Default: `README.md` inside the releases directory.
    pub output: Option<String>,
}

/// Paths a run operates on, after applying flags, config and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedPaths {
    pub releases_dir: PathBuf,
    pub output: PathBuf,
}

impl CliConfig {
    /// Resolve paths with precedence flag > config file > default.
    ///
    /// An explicit `releases_dir` flag also moves the default output into that
    /// directory, ignoring the configured `output`.
    pub fn resolve(&self, releases_dir: Option<PathBuf>, output: Option<PathBuf>) -> ResolvedPaths {
        let dir_from_flag = releases_dir.is_some();
        let releases_dir = releases_dir
            .or_else(|| self.releases_dir.as_deref().map(expand_path))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RELEASES_DIR));

        let output = output
            .or_else(|| {
                if dir_from_flag {
                    None
                } else {
                    self.output.as_deref().map(expand_path)
                }
            })
            .unwrap_or_else(|| releases_dir.join(README_FILENAME));

        ResolvedPaths {
            releases_dir,
            output,
        }
    }
}
