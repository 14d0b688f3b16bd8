//! Filtering BLAST hits by identity and joining them with annotations.
//!
//! Each hit, in input order, goes through two checks:
//!
//! 1. **Identity filter**: `pident` must be at least the threshold. A
//!    `pident` that is empty or not a number counts as -1.
//! 2. **Annotation lookup**: `sseqid` must be a centroid in the index.
//!
//! Hits failing either check are dropped silently; annotation coverage is
//! expected to be partial. Survivors are written straight to the sink.
//!
//! ## Example
//!
//! ```rust,no_run
//! use blastomatic::matching::HitAnnotator;
//! use blastomatic::parsing::{AnnotationIndex, HitReader};
//! use std::path::Path;
//!
//! let index = AnnotationIndex::from_path(Path::new("centroids.csv"), b',').unwrap();
//! let hits = HitReader::from_path(Path::new("hits.tsv")).unwrap();
//!
//! let annotator = HitAnnotator::new(&index, 90.0, ",");
//! let mut out = std::io::stdout();
//! let summary = annotator.run(hits, &mut out).unwrap();
//! eprintln!("{} rows", summary.written);
//! ```

pub mod annotator;

pub use annotator::{AnnotateError, HitAnnotator, HitOutcome, RunSummary};
