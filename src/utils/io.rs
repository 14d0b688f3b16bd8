//! Opening input and output streams.
//!
//! `-` stands for stdin/stdout. Inputs ending in `.gz` or `.bgz` are
//! decompressed on the fly.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Path standing for stdin or stdout
pub const STDIO_PATH: &str = "-";

pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a file (or stdin) for buffered reading.
///
/// # Errors
///
/// Returns the underlying IO error if the file cannot be opened.
pub fn open_input(path: &Path) -> io::Result<Box<dyn Read>> {
    if is_stdio(path) {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path)?;
    if is_gzipped(path) {
        // bgzip is a series of gzip members
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Create (or truncate) a file, or take stdout, for buffered writing.
///
/// # Errors
///
/// Returns the underlying IO error if the file cannot be created.
pub fn create_output(path: &Path) -> io::Result<Box<dyn Write>> {
    if is_stdio(path) {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }

    Ok(Box::new(BufWriter::new(File::create(path)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("hits.tsv.gz")));
        assert!(is_gzipped(Path::new("hits.tsv.BGZ")));
        assert!(!is_gzipped(Path::new("hits.tsv")));
    }

    #[test]
    fn test_is_stdio() {
        assert!(is_stdio(Path::new("-")));
        assert!(!is_stdio(Path::new("./-")));
    }

    #[test]
    fn test_open_plain_input() {
        let mut temp = NamedTempFile::with_suffix(".tsv").unwrap();
        temp.write_all(b"hello\n").unwrap();
        temp.flush().unwrap();

        let mut text = String::new();
        open_input(temp.path())
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "hello\n");
    }

    #[test]
    fn test_open_gzipped_input() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"centroid,genus\nSEQ1,Vibrio\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".csv.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let mut text = String::new();
        open_input(temp.path())
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "centroid,genus\nSEQ1,Vibrio\n");
    }

    #[test]
    fn test_open_missing_input() {
        assert!(open_input(Path::new("/nonexistent/hits.tsv")).is_err());
    }

    #[test]
    fn test_create_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut out = create_output(&path).unwrap();
        out.write_all(b"sseqid,pident,genus,species\n").unwrap();
        out.flush().unwrap();
        drop(out);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "sseqid,pident,genus,species\n");
    }
}
