//! README rendering and output.

use std::io::Write;
use std::path::{Path, PathBuf};

/// First line of the generated document. The two trailing spaces are a Markdown line break.
pub const TITLE_LINE: &str = "# Releases  ";

/// Result of writing the README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No file existed at the output path.
    Created,
    /// The previous content differed and was replaced.
    Updated,
    /// The file was rewritten with identical content.
    Unchanged,
}

/// Assemble the full document: title line, then each table line, all newline-terminated.
pub fn render_document(lines: impl IntoIterator<Item = String>) -> String {
    let mut doc = String::from(TITLE_LINE);
    doc.push('\n');
    for line in lines {
        doc.push_str(&line);
        doc.push('\n');
    }
    doc
}

/// Overwrite `path` with `contents`. Prior content is discarded, never appended to.
pub fn write_document(path: &Path, contents: &str) -> Result<WriteOutcome, WriteError> {
    let outcome = match read_existing(path)? {
        None => WriteOutcome::Created,
        Some(previous) if previous == contents => WriteOutcome::Unchanged,
        Some(_) => WriteOutcome::Updated,
    };

    let io_err = |source: std::io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(io_err)?;
    let mut writer = std::io::BufWriter::new(file);
    writer.write_all(contents.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::debug!(?path, ?outcome, bytes = contents.len(), "Wrote README");
    Ok(outcome)
}

/// Whether `path` already holds exactly `contents`. A missing file is stale.
pub fn is_up_to_date(path: &Path, contents: &str) -> Result<bool, WriteError> {
    Ok(read_existing(path)?.is_some_and(|existing| existing == contents))
}

fn read_existing(path: &Path) -> Result<Option<String>, WriteError> {
    match std::fs::read_to_string(path) {
        Ok(existing) => Ok(Some(existing)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        // Non-UTF-8 content can never match a rendered document
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => Ok(Some(String::new())),
        Err(e) => Err(WriteError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Errors that can occur while reading or writing the output file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
