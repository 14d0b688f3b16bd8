use crate::core::annotation::AnnotationRecord;
use crate::core::hit::HitRecord;

/// Placeholder written for a missing or empty genus/species
pub const NA: &str = "NA";

/// Column names of the annotated output, in order
pub const OUTPUT_HEADER: [&str; 4] = ["sseqid", "pident", "genus", "species"];

/// Join fields with a delimiter into a single line (no terminator).
pub fn join_fields<S: AsRef<str>>(fields: &[S], delimiter: &str) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push_str(delimiter);
        }
        line.push_str(field.as_ref());
    }
    line
}

/// The header line of the annotated output
pub fn header_line(delimiter: &str) -> String {
    join_fields(&OUTPUT_HEADER, delimiter)
}

/// A hit joined with its annotation, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow<'a> {
    pub sseqid: &'a str,
    /// Percent identity exactly as it appeared in the hit file
    pub pident: &'a str,
    pub genus: &'a str,
    pub species: &'a str,
}

impl<'a> OutputRow<'a> {
    pub fn new(hit: &'a HitRecord, annotation: &'a AnnotationRecord) -> Self {
        Self {
            sseqid: &hit.sseqid,
            pident: &hit.pident,
            genus: or_na(annotation.genus.as_deref()),
            species: or_na(annotation.species.as_deref()),
        }
    }

    pub fn to_line(&self, delimiter: &str) -> String {
        join_fields(&[self.sseqid, self.pident, self.genus, self.species], delimiter)
    }
}

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NA,
    }
}
