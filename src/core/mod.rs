//! Core data types for annotating BLAST hits.
//!
//! - [`HitRecord`]: One row of BLAST tabular output (`-outfmt 6`)
//! - [`AnnotationRecord`]: Taxonomy for one reference sequence, keyed by centroid
//! - [`OutputRow`]: A hit joined with its annotation
//!
//! ## Output
//!
//! Annotated rows always have four columns:
//!
//! | Column  | Source |
//! |---------|--------|
//! | sseqid  | hit, verbatim |
//! | pident  | hit, verbatim (not reformatted) |
//! | genus   | annotation, `NA` when missing or empty |
//! | species | annotation, `NA` when missing or empty |

pub mod annotation;
pub mod hit;
pub mod row;

pub use annotation::AnnotationRecord;
pub use hit::HitRecord;
pub use row::OutputRow;
