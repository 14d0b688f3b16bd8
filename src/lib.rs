//! # blastomatic
//!
//! A library for annotating BLAST search results with taxonomy.
//!
//! BLAST tabular output (`-outfmt 6`) tells you which reference sequence each
//! query hit, but not what organism that reference came from. `blastomatic`
//! joins each hit's subject id (`sseqid`) against an annotation table keyed by
//! `centroid`, keeps hits at or above a minimum percent identity, and writes a
//! compact `sseqid, pident, genus, species` report.
//!
//! ## Features
//!
//! - **Streaming hits**: the hit file is read one record at a time
//! - **Identity filter**: inclusive minimum percent identity
//! - **Tolerant joins**: unannotated hits and rows without a centroid are skipped
//! - **Delimiter inference**: `.csv` output gets commas, anything else tabs
//! - **Compressed input**: `.gz`/`.bgz` inputs are decompressed transparently
//!
//! ## Example
//!
//! ```rust
//! use blastomatic::{AnnotationIndex, HitAnnotator, HitReader};
//!
//! let annotations = "centroid,genus,species\nSEQ1,Vibrio,harveyi\n";
//! let hits = "q1\tSEQ1\t99.5\t250\t1\t0\t1\t250\t1\t250\t1e-120\t450\n";
//!
//! let index = AnnotationIndex::from_reader(annotations.as_bytes(), b',').unwrap();
//! let annotator = HitAnnotator::new(&index, 80.0, ",");
//!
//! let mut out = Vec::new();
//! let summary = annotator.run(HitReader::new(hits.as_bytes()), &mut out).unwrap();
//!
//! assert_eq!(summary.written, 1);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "sseqid,pident,genus,species\nSEQ1,99.5,Vibrio,harveyi\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Hit, annotation, and output row types
//! - [`parsing`]: Annotation table loader and streaming hit reader
//! - [`matching`]: Identity filter and annotation join
//! - [`utils`]: Delimiter inference and stream helpers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::annotation::AnnotationRecord;
pub use crate::core::hit::HitRecord;
pub use crate::core::row::OutputRow;
pub use crate::matching::annotator::{AnnotateError, HitAnnotator, RunSummary};
pub use crate::parsing::annotations::AnnotationIndex;
pub use crate::parsing::hits::HitReader;
pub use crate::parsing::ParseError;
