/// Column names of BLAST tabular output (`-outfmt 6`), in file order
pub const HIT_FIELDS: [&str; 12] = [
    "qseqid", "sseqid", "pident", "length", "mismatch", "gapopen", "qstart", "qend", "sstart",
    "send", "evalue", "bitscore",
];

/// Value used for a percent identity that is empty or not a number
pub const UNPARSABLE_PIDENT: f64 = -1.0;

/// One row of BLAST tabular output.
///
/// All fields are kept as the raw text from the file. Only `sseqid` and
/// `pident` are interpreted; the rest pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRecord {
    pub qseqid: String,
    pub sseqid: String,
    pub pident: String,
    pub length: String,
    pub mismatch: String,
    pub gapopen: String,
    pub qstart: String,
    pub qend: String,
    pub sstart: String,
    pub send: String,
    pub evalue: String,
    pub bitscore: String,
}

impl HitRecord {
    /// Build a hit from its positional fields.
    ///
    /// Returns `None` if fewer than 12 fields are given. Fields past the
    /// twelfth are ignored.
    pub fn from_fields<'a, I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut it = fields.into_iter().map(str::to_string);
        Some(Self {
            qseqid: it.next()?,
            sseqid: it.next()?,
            pident: it.next()?,
            length: it.next()?,
            mismatch: it.next()?,
            gapopen: it.next()?,
            qstart: it.next()?,
            qend: it.next()?,
            sstart: it.next()?,
            send: it.next()?,
            evalue: it.next()?,
            bitscore: it.next()?,
        })
    }

    /// Percent identity as a number.
    ///
    /// An empty or non-numeric `pident` yields [`UNPARSABLE_PIDENT`], so such
    /// hits fail any non-negative identity threshold.
    pub fn percent_identity(&self) -> f64 {
        self.pident.trim().parse().unwrap_or(UNPARSABLE_PIDENT)
    }
}
