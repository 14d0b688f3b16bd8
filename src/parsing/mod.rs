//! Readers for the two inputs of an annotation run.
//!
//! - **Annotation tables**: delimited text with a header row that must name a
//!   `centroid` column. Loaded eagerly into an [`AnnotationIndex`].
//! - **BLAST hits**: tab-delimited `-outfmt 6` text, no header, 12 positional
//!   columns. Streamed lazily through a [`HitReader`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use blastomatic::parsing::annotations::AnnotationIndex;
//! use blastomatic::parsing::hits::HitReader;
//! use std::path::Path;
//!
//! let index = AnnotationIndex::from_path(Path::new("centroids.csv"), b',').unwrap();
//! for hit in HitReader::from_path(Path::new("hits.tsv")).unwrap() {
//!     let hit = hit.unwrap();
//!     if let Some(annotation) = index.get(&hit.sseqid) {
//!         println!("{} {:?}", hit.sseqid, annotation.genus);
//!     }
//! }
//! ```

use thiserror::Error;

use crate::core::hit::HIT_FIELDS;

pub mod annotations;
pub mod hits;

pub use annotations::AnnotationIndex;
pub use hits::HitReader;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed delimited text: {0}")]
    Csv(#[from] csv::Error),

    #[error("Annotation table has no '{0}' column in its header")]
    MissingKeyColumn(String),

    #[error("Hit record {record} has {found} fields, expected {}", HIT_FIELDS.len())]
    TruncatedHit { record: u64, found: usize },
}
