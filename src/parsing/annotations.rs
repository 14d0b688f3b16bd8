//! Loading of the centroid annotation table into an in-memory index.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::core::annotation::{AnnotationRecord, CENTROID_COLUMN};
use crate::parsing::ParseError;
use crate::utils::io::open_input;

/// Counts collected while loading an annotation table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Data rows read (header excluded)
    pub rows: usize,
    /// Rows dropped because `centroid` was missing or empty
    pub skipped: usize,
    /// Rows that replaced an earlier row with the same centroid
    pub replaced: usize,
}

/// Annotation records keyed by centroid.
///
/// Built once, read-only afterwards. When a centroid occurs more than once,
/// the row appearing last in the file is kept.
#[derive(Debug, Default)]
pub struct AnnotationIndex {
    records: HashMap<String, AnnotationRecord>,
    stats: LoadStats,
}

impl AnnotationIndex {
    /// Load an annotation table from a file (`-` for stdin, `.gz` decompressed).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened, otherwise see
    /// [`AnnotationIndex::from_reader`].
    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self, ParseError> {
        let reader = open_input(path)?;
        Self::from_reader(reader, delimiter)
    }

    /// Load an annotation table whose first row is a header.
    ///
    /// Rows may be ragged: columns missing from a row are absent on its
    /// record. Rows without a non-empty `centroid` are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingKeyColumn` if the header has no `centroid`
    /// column, or `ParseError::Csv` if the text cannot be read as delimited
    /// records (e.g. invalid UTF-8).
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, ParseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if !headers.iter().any(|h| h == CENTROID_COLUMN) {
            return Err(ParseError::MissingKeyColumn(CENTROID_COLUMN.to_string()));
        }

        let mut index = Self::default();
        let mut row = csv::StringRecord::new();

        while csv_reader.read_record(&mut row)? {
            index.stats.rows += 1;
            match AnnotationRecord::from_fields(headers.iter(), row.iter()) {
                Some(record) => index.insert(record),
                None => index.stats.skipped += 1,
            }
        }

        debug!(
            "Loaded {} annotations from {} rows ({} without centroid, {} duplicates replaced)",
            index.len(),
            index.stats.rows,
            index.stats.skipped,
            index.stats.replaced
        );

        Ok(index)
    }

    /// Insert a record, replacing any earlier record with the same centroid
    pub fn insert(&mut self, record: AnnotationRecord) {
        if self
            .records
            .insert(record.centroid.clone(), record)
            .is_some()
        {
            self.stats.replaced += 1;
        }
    }

    /// Find the annotation for a sequence identifier
    pub fn get(&self, centroid: &str) -> Option<&AnnotationRecord> {
        self.records.get(centroid)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }
}

impl FromIterator<AnnotationRecord> for AnnotationIndex {
    fn from_iter<T: IntoIterator<Item = AnnotationRecord>>(iter: T) -> Self {
        let mut index = Self::default();
        for record in iter {
            index.stats.rows += 1;
            index.insert(record);
        }
        index
    }
}
