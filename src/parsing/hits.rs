//! Streaming reader for BLAST tabular output (`-outfmt 6`).

use std::io::Read;
use std::path::Path;

use crate::core::hit::HitRecord;
use crate::parsing::ParseError;
use crate::utils::io::open_input;

/// Lazily yields one [`HitRecord`] per line of a BLAST tabular file.
///
/// The file has no header and its columns are taken positionally. A row
/// with fewer than 12 fields yields `ParseError::TruncatedHit`, numbered by
/// its 1-based position among non-blank rows; extra trailing fields are
/// ignored. Blank lines are skipped.
pub struct HitReader<R: Read> {
    reader: csv::Reader<R>,
    record: csv::StringRecord,
    records_read: u64,
}

impl HitReader<Box<dyn Read>> {
    /// Open a hits file (`-` for stdin, `.gz` decompressed).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        Ok(Self::new(open_input(path)?))
    }
}

impl<R: Read> HitReader<R> {
    pub fn new(reader: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        Self {
            reader,
            record: csv::StringRecord::new(),
            records_read: 0,
        }
    }

    fn read_hit(&mut self) -> Result<Option<HitRecord>, ParseError> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }
        self.records_read += 1;

        match HitRecord::from_fields(self.record.iter()) {
            Some(hit) => Ok(Some(hit)),
            None => Err(ParseError::TruncatedHit {
                record: self.records_read,
                found: self.record.len(),
            }),
        }
    }
}

impl<R: Read> Iterator for HitReader<R> {
    type Item = Result<HitRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_hit().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HITS: &str = "\
q1\tSEQ1\t99.5\t250\t1\t0\t1\t250\t1\t250\t1e-120\t450
q2\tSEQ2\t50.0\t250\t125\t0\t1\t250\t1\t250\t1e-10\t90

q3\tSEQ3\t100.0\t250\t0\t0\t1\t250\t1\t250\t1e-130\t462
";

    #[test]
    fn test_read_hits_in_order() {
        let hits: Vec<HitRecord> = HitReader::new(HITS.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].sseqid, "SEQ1");
        assert_eq!(hits[1].pident, "50.0");
        assert_eq!(hits[2].qseqid, "q3");
        assert_eq!(hits[2].bitscore, "462");
    }

    #[test]
    fn test_truncated_hit_reports_record() {
        let text = "q1\tSEQ1\t99.5\t250\t1\t0\t1\t250\t1\t250\t1e-120\t450\nq2\tSEQ2\t98.0\n";
        let mut reader = HitReader::new(text.as_bytes());

        assert!(reader.next().unwrap().is_ok());
        match reader.next().unwrap() {
            Err(ParseError::TruncatedHit { record, found }) => {
                assert_eq!(record, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected truncated hit error, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_hit_after_blank_lines() {
        let text = "q1\tSEQ1\t99.5\t250\t1\t0\t1\t250\t1\t250\t1e-120\t450\n\n\nq2\tSEQ2\t98.0\n";
        let mut reader = HitReader::new(text.as_bytes());

        assert!(reader.next().unwrap().is_ok());
        match reader.next().unwrap() {
            Err(err @ ParseError::TruncatedHit { record: 2, found: 3 }) => {
                assert_eq!(err.to_string(), "Hit record 2 has 3 fields, expected 12");
            }
            other => panic!("expected truncated hit error, got {other:?}"),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(HitReader::new("".as_bytes()).count(), 0);
    }
}
