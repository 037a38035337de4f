//! Per-folder metadata loading (`*.yaml` / `*.yml`).
//!
//! Each release folder may carry one YAML document of scalar fields:
//!
//! ```yaml
//! Description: Simple MIDI card
//! Version: 0.6.6
//! Language: Arduino
//! Creator: Chris Johnson
//! Editor: https://example.com/editor
//! Status: Beta
//! ```
//!
//! Scalars are normalized to strings when loaded, so the table code never
//! sees YAML types.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_yaml::Value;

/// File name suffixes recognized as metadata files.
pub const METADATA_SUFFIXES: &[&str] = &[".yaml", ".yml"];

/// Metadata fields of one release folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderRecord {
    fields: BTreeMap<String, String>,
}

impl FolderRecord {
    /// Value of `key`, if the metadata declared it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FolderRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Find the metadata file of a release folder.
///
/// Candidates are sorted by file name so the choice does not depend on the
/// filesystem's enumeration order.
pub fn find_metadata_file(dir: &Path) -> Result<Option<PathBuf>, MetadataError> {
    let io_err = |source: std::io::Error| MetadataError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_metadata_name(&name) && entry.path().is_file() {
            candidates.push(name);
        }
    }

    candidates.sort();
    Ok(candidates.into_iter().next().map(|name| dir.join(name)))
}

/// Load the record of a release folder; an empty record when it has no metadata file.
pub fn load_folder_record(dir: &Path) -> Result<FolderRecord, MetadataError> {
    let Some(path) = find_metadata_file(dir)? else {
        tracing::debug!(?dir, "No metadata file, using empty record");
        return Ok(FolderRecord::default());
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| MetadataError::Io {
        path: path.clone(),
        source: e,
    })?;
    let record = parse_record(&path, &contents)?;
    tracing::debug!(?path, fields = record.len(), "Loaded metadata");
    Ok(record)
}

/// Parse a metadata document. `path` is only used for error reporting.
///
/// A key repeated at the top level keeps its last value.
pub fn parse_record(path: &Path, yaml: &str) -> Result<FolderRecord, MetadataError> {
    let document: RawDocument = serde_yaml::from_str(yaml).map_err(|e| MetadataError::Yaml {
        path: path.to_path_buf(),
        source: e,
    })?;

    let entries = match document {
        RawDocument::Empty => return Ok(FolderRecord::default()),
        RawDocument::Entries(entries) => entries,
        RawDocument::Other => {
            return Err(MetadataError::NotAMapping {
                path: path.to_path_buf(),
            })
        }
    };

    let mut record = FolderRecord::default();
    for (key, value) in entries {
        let non_scalar = |key: String| MetadataError::NonScalar {
            path: path.to_path_buf(),
            key,
        };
        let key = scalar_text(&key).ok_or_else(|| non_scalar(format!("{key:?}")))?;
        let value = scalar_text(&value).ok_or_else(|| non_scalar(key.clone()))?;
        if record.contains_key(&key) {
            tracing::warn!(?path, %key, "Duplicate metadata key, keeping last value");
        }
        record.insert(key, value);
    }
    Ok(record)
}

/// Top-level shape of a metadata document.
///
/// `serde_yaml::Mapping` rejects repeated keys, so top-level entries are
/// collected as plain pairs instead.
#[derive(Debug)]
enum RawDocument {
    /// Empty or comment-only document.
    Empty,
    Entries(Vec<(Value, Value)>),
    /// A scalar or sequence at the top level.
    Other,
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawDocumentVisitor)
    }
}

struct RawDocumentVisitor;

impl<'de> Visitor<'de> for RawDocumentVisitor {
    type Value = RawDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of metadata fields")
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawDocument, E> {
        Ok(RawDocument::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<RawDocument, E> {
        Ok(RawDocument::Empty)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<RawDocument, E> {
        Ok(RawDocument::Other)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<RawDocument, E> {
        Ok(RawDocument::Other)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<RawDocument, E> {
        Ok(RawDocument::Other)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<RawDocument, E> {
        Ok(RawDocument::Other)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<RawDocument, E> {
        Ok(RawDocument::Other)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawDocument, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawDocument::Other)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawDocument, A::Error> {
        let mut entries = Vec::new();
        while let Some(entry) = map.next_entry::<Value, Value>()? {
            entries.push(entry);
        }
        Ok(RawDocument::Entries(entries))
    }
}

fn is_metadata_name(name: &str) -> bool {
    METADATA_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// String form of a YAML scalar; `None` for sequences, mappings and tagged values.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Errors that can occur while loading folder metadata.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse metadata YAML '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("metadata '{}' is not a key-value mapping", path.display())]
    NotAMapping { path: PathBuf },
    #[error("metadata '{}': value of '{key}' is not a scalar", path.display())]
    NonScalar { path: PathBuf, key: String },
}
