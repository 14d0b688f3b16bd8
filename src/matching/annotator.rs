use std::io::Write;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::hit::HitRecord;
use crate::core::row::{header_line, OutputRow};
use crate::parsing::annotations::AnnotationIndex;
use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("Failed to read hits: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Why a hit did or did not produce an output row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitOutcome<'a> {
    /// Percent identity below the threshold (or not a number)
    BelowThreshold,
    /// `sseqid` has no entry in the annotation index
    Unmatched,
    Annotated(OutputRow<'a>),
}

/// Counts for one annotation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Hits read from the input
    pub hits_read: usize,
    /// Hits dropped by the identity filter
    pub below_threshold: usize,
    /// Hits passing the filter but without an annotation
    pub unmatched: usize,
    /// Data rows written (header excluded)
    pub written: usize,
}

/// Filters hits by percent identity and joins them with their annotation.
pub struct HitAnnotator<'a> {
    index: &'a AnnotationIndex,
    min_pct_id: f64,
    delimiter: String,
}

impl<'a> HitAnnotator<'a> {
    /// `min_pct_id` is inclusive: a hit exactly at the threshold passes.
    pub fn new(index: &'a AnnotationIndex, min_pct_id: f64, delimiter: impl Into<String>) -> Self {
        Self {
            index,
            min_pct_id,
            delimiter: delimiter.into(),
        }
    }

    /// Decide the fate of a single hit.
    ///
    /// The identity filter is applied before the lookup, so a sub-threshold
    /// hit is reported as such whether or not it has an annotation.
    pub fn annotate<'h>(&self, hit: &'h HitRecord) -> HitOutcome<'h>
    where
        'a: 'h,
    {
        if hit.percent_identity() < self.min_pct_id {
            return HitOutcome::BelowThreshold;
        }

        match self.index.get(&hit.sseqid) {
            Some(annotation) => HitOutcome::Annotated(OutputRow::new(hit, annotation)),
            None => HitOutcome::Unmatched,
        }
    }

    /// Annotate a stream of hits, writing the header and then one line per
    /// annotated hit, in input order.
    ///
    /// The header is written even if no hit qualifies. Each line ends with a
    /// single `\n`. The sink is flushed before returning.
    ///
    /// # Errors
    ///
    /// Returns `AnnotateError::Parse` on the first malformed hit (the run is
    /// aborted; rows already written stay in the sink), or
    /// `AnnotateError::Write` if the sink fails.
    pub fn run<I, W>(&self, hits: I, out: &mut W) -> Result<RunSummary, AnnotateError>
    where
        I: IntoIterator<Item = Result<HitRecord, ParseError>>,
        W: Write + ?Sized,
    {
        let mut summary = RunSummary::default();

        writeln!(out, "{}", header_line(&self.delimiter))?;

        for hit in hits {
            let hit = hit?;
            summary.hits_read += 1;

            match self.annotate(&hit) {
                HitOutcome::BelowThreshold => summary.below_threshold += 1,
                HitOutcome::Unmatched => summary.unmatched += 1,
                HitOutcome::Annotated(row) => {
                    writeln!(out, "{}", row.to_line(&self.delimiter))?;
                    summary.written += 1;
                }
            }
        }

        out.flush()?;

        debug!(
            "Read {} hits: {} below {}% identity, {} without annotation, {} written",
            summary.hits_read,
            summary.below_threshold,
            self.min_pct_id,
            summary.unmatched,
            summary.written
        );

        if summary.written == 0 && summary.hits_read > 0 {
            warn!(
                "None of the {} hits passed the identity filter with a matching annotation",
                summary.hits_read
            );
        }

        Ok(summary)
    }
}
