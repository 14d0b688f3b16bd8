//! Field delimiter handling for the output and annotation files.

use std::ffi::OsStr;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DelimiterError {
    #[error("Delimiter must not be empty")]
    Empty,

    #[error("Annotation delimiter must be a single ASCII character, got '{0}'")]
    NotSingleByte(String),
}

/// Guess the output delimiter from a file name.
///
/// A name whose extension is exactly `csv` gives a comma; anything else,
/// including no extension, gives a tab. Only the string is inspected.
///
/// ```
/// use blastomatic::utils::delimiter::guess_delimiter;
///
/// assert_eq!(guess_delimiter("out.csv"), ",");
/// assert_eq!(guess_delimiter("out.tsv"), "\t");
/// assert_eq!(guess_delimiter("out"), "\t");
/// ```
pub fn guess_delimiter(filename: &str) -> &'static str {
    match Path::new(filename).extension().and_then(OsStr::to_str) {
        Some("csv") => ",",
        _ => "\t",
    }
}

/// Interpret a delimiter given on the command line.
///
/// The escape `\t` and the word `tab` both mean a horizontal tab, since a
/// literal tab is awkward to type in a shell. Anything else is used as is.
///
/// # Errors
///
/// Returns `DelimiterError::Empty` for an empty string.
pub fn parse_delimiter(arg: &str) -> Result<String, DelimiterError> {
    match arg {
        "" => Err(DelimiterError::Empty),
        "\\t" | "tab" => Ok("\t".to_string()),
        other => Ok(other.to_string()),
    }
}

/// The delimiter to write with: the explicit one if given, else a guess from
/// the output file name. An explicit empty string also falls back to the guess.
pub fn resolve_output_delimiter(explicit: Option<&str>, outfile: &str) -> String {
    explicit
        .and_then(|arg| parse_delimiter(arg).ok())
        .unwrap_or_else(|| guess_delimiter(outfile).to_string())
}

/// Interpret the annotation table delimiter, which must be one ASCII byte.
///
/// # Errors
///
/// Returns `DelimiterError::NotSingleByte` for multi-character or non-ASCII
/// input.
pub fn parse_annotation_delimiter(arg: &str) -> Result<u8, DelimiterError> {
    let delimiter = parse_delimiter(arg)?;
    match delimiter.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(DelimiterError::NotSingleByte(arg.to_string())),
    }
}
