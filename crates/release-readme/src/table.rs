//! Markdown table synthesis.
//!
//! The table has a `Folder Name` column followed by whichever of the
//! preferred metadata columns appear in at least one record:
//!
//! ```text
//! | Folder Name | Description | Version | Language | Creator |
//! | ----------- | ----------- | ------- | -------- | ------- |
//! | 00_Simple_MIDI | MIDI card<br>[Web editor](https://e) | 0.6.6<br>Beta | Arduino | Chris |
//! ```
//!
//! Divider dashes match the header text length, not the cell width.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::metadata::FolderRecord;

/// Optional key appended to the Description cell as a web editor link.
pub const EDITOR_KEY: &str = "Editor";

/// Optional key appended to the Version cell.
pub const STATUS_KEY: &str = "Status";

/// A table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    FolderName,
    Description,
    Version,
    Language,
    Creator,
}

impl Column {
    /// Metadata columns in display order. Other metadata keys never become columns.
    pub const PREFERRED: [Column; 4] = [
        Column::Description,
        Column::Version,
        Column::Language,
        Column::Creator,
    ];

    /// Header text, which is also the metadata key for non-folder columns.
    pub fn header(self) -> &'static str {
        match self {
            Column::FolderName => "Folder Name",
            Column::Description => "Description",
            Column::Version => "Version",
            Column::Language => "Language",
            Column::Creator => "Creator",
        }
    }

    fn cell(self, folder: &str, record: &FolderRecord) -> String {
        let mut text = match self {
            Column::FolderName => return folder.to_string(),
            _ => record.get(self.header()).unwrap_or_default().to_string(),
        };

        match self {
            Column::Description => {
                if let Some(editor) = record.get(EDITOR_KEY) {
                    text.push_str(&format!("<br>[Web editor]({editor})"));
                }
            }
            Column::Version => {
                if let Some(status) = record.get(STATUS_KEY) {
                    text.push_str(&format!("<br>{status}"));
                }
            }
            _ => {}
        }
        text
    }
}

/// Columns to render for a set of records: the folder column, then each
/// preferred column that some record declares.
pub fn select_columns<'a>(records: impl IntoIterator<Item = &'a FolderRecord>) -> Vec<Column> {
    let records: Vec<&FolderRecord> = records.into_iter().collect();

    let mut columns = vec![Column::FolderName];
    columns.extend(
        Column::PREFERRED
            .into_iter()
            .filter(|column| records.iter().any(|r| r.contains_key(column.header()))),
    );
    columns
}

/// Release records keyed by folder name, ready to render.
#[derive(Debug, Clone)]
pub struct ReleaseTable {
    columns: Vec<Column>,
    records: BTreeMap<String, FolderRecord>,
}

impl ReleaseTable {
    pub fn new(records: BTreeMap<String, FolderRecord>) -> Self {
        let columns = select_columns(records.values());
        Self { columns, records }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header, divider and one row per folder in ascending name order.
    /// Lines carry no trailing newline.
    pub fn lines(&self) -> TableLines<'_> {
        TableLines {
            columns: &self.columns,
            stage: Stage::Header,
            rows: self.records.iter(),
        }
    }
}

impl Default for ReleaseTable {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl<K: Into<String>> FromIterator<(K, FolderRecord)> for ReleaseTable {
    fn from_iter<I: IntoIterator<Item = (K, FolderRecord)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Header,
    Divider,
    Rows,
}

/// Lazy line sequence produced by [`ReleaseTable::lines`].
#[derive(Debug)]
pub struct TableLines<'a> {
    columns: &'a [Column],
    stage: Stage,
    rows: btree_map::Iter<'a, String, FolderRecord>,
}

impl Iterator for TableLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.stage {
            Stage::Header => {
                self.stage = Stage::Divider;
                Some(pipe_row(self.columns.iter().map(|c| c.header().to_string())))
            }
            Stage::Divider => {
                self.stage = Stage::Rows;
                Some(pipe_row(
                    self.columns
                        .iter()
                        .map(|c| "-".repeat(c.header().chars().count())),
                ))
            }
            Stage::Rows => {
                let (folder, record) = self.rows.next()?;
                Some(pipe_row(
                    self.columns.iter().map(|c| c.cell(folder, record)),
                ))
            }
        }
    }
}

fn pipe_row(cells: impl Iterator<Item = String>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}
