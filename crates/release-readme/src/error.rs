//! Crate-level error type for the README pipeline.

use crate::discovery::DiscoveryError;
use crate::metadata::MetadataError;
use crate::writer::WriteError;

/// Any failure that aborts a run. Every variant is fatal.
#[derive(Debug, thiserror::Error)]
pub enum ReadmeError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

pub type ReadmeResult<T> = Result<T, ReadmeError>;
