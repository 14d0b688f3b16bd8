/// Column holding the join key in an annotation table
pub const CENTROID_COLUMN: &str = "centroid";

/// Column holding the genus name
pub const GENUS_COLUMN: &str = "genus";

/// Column holding the species name
pub const SPECIES_COLUMN: &str = "species";

/// Taxonomic metadata for one reference sequence (one annotation table row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    /// Join key matched against the hit's `sseqid`
    pub centroid: String,

    /// Genus, `None` when the column or the field is absent
    pub genus: Option<String>,

    /// Species, `None` when the column or the field is absent
    pub species: Option<String>,

    /// Every other column of the row, in header order
    pub extra: Vec<(String, String)>,
}

impl AnnotationRecord {
    pub fn new(centroid: impl Into<String>) -> Self {
        Self {
            centroid: centroid.into(),
            genus: None,
            species: None,
            extra: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_genus(mut self, genus: impl Into<String>) -> Self {
        self.genus = Some(genus.into());
        self
    }

    #[must_use]
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    /// Build a record from header names and the matching row values.
    ///
    /// Returns `None` when the row has no usable centroid (missing or empty).
    /// Values beyond the header width are dropped; header columns beyond the
    /// row width are treated as absent.
    pub fn from_fields<'a, H, V>(headers: H, values: V) -> Option<Self>
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        let mut centroid = None;
        let mut genus = None;
        let mut species = None;
        let mut extra = Vec::new();

        for (name, value) in headers.into_iter().zip(values) {
            match name {
                CENTROID_COLUMN => centroid = Some(value),
                GENUS_COLUMN => genus = Some(value.to_string()),
                SPECIES_COLUMN => species = Some(value.to_string()),
                _ => extra.push((name.to_string(), value.to_string())),
            }
        }

        let centroid = centroid.filter(|c| !c.is_empty())?;

        Some(Self {
            centroid: centroid.to_string(),
            genus,
            species,
            extra,
        })
    }

    /// Look up any column of the original row by header name
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            CENTROID_COLUMN => Some(&self.centroid),
            GENUS_COLUMN => self.genus.as_deref(),
            SPECIES_COLUMN => self.species.as_deref(),
            _ => self
                .extra
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_full_row() {
        let headers = ["seq_id", "centroid", "genus", "species", "domain"];
        let values = ["26", "SEQ1", "Vibrio", "harveyi", "Bacteria"];

        let record = AnnotationRecord::from_fields(headers, values).unwrap();
        assert_eq!(record.centroid, "SEQ1");
        assert_eq!(record.genus.as_deref(), Some("Vibrio"));
        assert_eq!(record.species.as_deref(), Some("harveyi"));
        assert_eq!(record.field("domain"), Some("Bacteria"));
        assert_eq!(record.field("seq_id"), Some("26"));
    }

    #[test]
    fn test_from_fields_empty_centroid_skipped() {
        let record = AnnotationRecord::from_fields(["centroid", "genus"], ["", "Vibrio"]);
        assert!(record.is_none());
    }

    #[test]
    fn test_from_fields_short_row() {
        // Trailing columns missing from the row are absent, not empty
        let record =
            AnnotationRecord::from_fields(["centroid", "genus", "species"], ["SEQ1", ""]).unwrap();
        assert_eq!(record.genus.as_deref(), Some(""));
        assert!(record.species.is_none());
    }

    #[test]
    fn test_from_fields_no_centroid_column() {
        assert!(AnnotationRecord::from_fields(["genus"], ["Vibrio"]).is_none());
    }
}
