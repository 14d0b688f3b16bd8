//! Command-line interface for blastomatic.
//!
//! A single command: annotate a BLAST tabular file with genus and species
//! from a centroid annotation table.
//!
//! ## Usage
//!
//! ```text
//! # Annotate hits with at least 90% identity, CSV output
//! blastomatic -b hits.tsv -a centroids.csv -o annotated.csv -p 90
//!
//! # Tab-separated output (inferred from the extension)
//! blastomatic -b hits.tsv -a centroids.csv -o annotated.tsv
//!
//! # Pipe from BLAST, write to stdout with an explicit delimiter
//! blastn ... -outfmt 6 | blastomatic -b - -a centroids.csv -o - -d ','
//!
//! # Machine-readable completion report
//! blastomatic -b hits.tsv -a centroids.csv --format json
//! ```

use clap::Parser;

pub mod annotate;

#[derive(Parser)]
#[command(name = "blastomatic")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Annotate BLAST output")]
#[command(
    long_about = "blastomatic joins BLAST tabular hits (-outfmt 6) with a centroid annotation table.\n\nHits below the minimum percent identity, and hits whose subject has no annotation, are dropped. Each remaining hit is written as: sseqid, pident, genus, species."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: annotate::AnnotateArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the completion report
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["blastomatic", "-b", "hits.tsv", "-a", "ann.csv"]).unwrap();
        assert_eq!(cli.args.outfile.to_str(), Some("out.csv"));
        assert!(cli.args.delimiter.is_none());
        assert!(cli.args.pctid.abs() < f64::EPSILON);
        assert_eq!(cli.args.annotation_delimiter, ",");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_negative_pctid() {
        let cli = Cli::try_parse_from([
            "blastomatic", "-b", "hits.tsv", "-a", "ann.csv", "-p", "-1.5",
        ])
        .unwrap();
        assert!((cli.args.pctid + 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_required_inputs() {
        assert!(Cli::try_parse_from(["blastomatic", "-a", "ann.csv"]).is_err());
        assert!(Cli::try_parse_from(["blastomatic", "-b", "hits.tsv"]).is_err());
    }

    #[test]
    fn test_invalid_pctid() {
        assert!(Cli::try_parse_from([
            "blastomatic", "-b", "hits.tsv", "-a", "ann.csv", "-p", "high",
        ])
        .is_err());
    }
}
