//! Regenerates a release index README from per-folder YAML metadata.
//!
//! The pipeline runs once per invocation and keeps no state between runs:
//!
//! ```text
//! releases/<folder>/  →  discovery  →  metadata  →  table  →  writer
//! (one per release)      (subdirs)     (*.yaml)     (lines)   (README.md)
//! ```
//!
//! # Modules
//!
//! - [`discovery`]: lists the release folders
//! - [`metadata`]: loads each folder's metadata file into a [`FolderRecord`]
//! - [`table`]: builds the Markdown table lines
//! - [`writer`]: assembles the document and overwrites the output file
//!
//! All metadata is loaded before anything is written, so a bad metadata file
//! leaves the existing README untouched.

pub mod discovery;
pub mod error;
pub mod metadata;
pub mod table;
pub mod writer;

use std::collections::BTreeMap;
use std::path::Path;

pub use error::{ReadmeError, ReadmeResult};
pub use metadata::FolderRecord;
pub use table::ReleaseTable;
pub use writer::WriteOutcome;

/// Default releases directory, relative to the working directory.
pub const DEFAULT_RELEASES_DIR: &str = "releases";

/// README file name inside the releases directory.
pub const README_FILENAME: &str = "README.md";

/// Load the record of every release folder under `releases_dir`.
pub fn collect_records(releases_dir: &Path) -> ReadmeResult<BTreeMap<String, FolderRecord>> {
    let mut records = BTreeMap::new();
    for dir in discovery::discover_release_dirs(releases_dir)? {
        let record = metadata::load_folder_record(&dir.path)?;
        records.insert(dir.name, record);
    }
    Ok(records)
}

/// Build the release table for `releases_dir`.
pub fn build_table(releases_dir: &Path) -> ReadmeResult<ReleaseTable> {
    let table = ReleaseTable::new(collect_records(releases_dir)?);
    tracing::info!(
        releases = table.len(),
        columns = table.columns().len(),
        "Built release table"
    );
    Ok(table)
}

/// Render the complete README document for `releases_dir`.
pub fn render_readme(releases_dir: &Path) -> ReadmeResult<String> {
    let table = build_table(releases_dir)?;
    Ok(writer::render_document(table.lines()))
}

/// Render the README for `releases_dir` and overwrite `output` with it.
pub fn generate(releases_dir: &Path, output: &Path) -> ReadmeResult<WriteOutcome> {
    let document = render_readme(releases_dir)?;
    Ok(writer::write_document(output, &document)?)
}
