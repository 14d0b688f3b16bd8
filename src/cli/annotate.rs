use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::matching::{HitAnnotator, RunSummary};
use crate::parsing::{AnnotationIndex, HitReader};
use crate::utils::delimiter::{parse_annotation_delimiter, resolve_output_delimiter};
use crate::utils::format_count;
use crate::utils::io::{create_output, is_stdio};

#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// BLAST output (-outfmt 6), '-' for stdin
    #[arg(short = 'b', long = "blasthits", value_name = "FILE", required = true)]
    pub hits: PathBuf,

    /// Annotation file with a 'centroid' column
    #[arg(short, long, value_name = "FILE", required = true)]
    pub annotations: PathBuf,

    /// Output file, '-' for stdout
    #[arg(short, long, value_name = "FILE", default_value = "out.csv")]
    pub outfile: PathBuf,

    /// Output field delimiter (default: ',' for .csv output, tab otherwise)
    #[arg(short, long, value_name = "DELIM")]
    pub delimiter: Option<String>,

    /// Minimum percent identity
    #[arg(
        short,
        long,
        value_name = "PCTID",
        default_value = "0.0",
        allow_negative_numbers = true
    )]
    pub pctid: f64,

    /// Field delimiter of the annotation file
    #[arg(long, value_name = "CHAR", default_value = ",")]
    pub annotation_delimiter: String,
}

pub fn run(args: AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let annotation_delimiter = parse_annotation_delimiter(&args.annotation_delimiter)?;
    let outfile_name = args.outfile.to_string_lossy().into_owned();
    let delimiter = resolve_output_delimiter(args.delimiter.as_deref(), &outfile_name);

    // Open both inputs before touching the output so a bad path leaves no file behind
    let hits = HitReader::from_path(&args.hits)
        .with_context(|| format!("Failed to open hits file '{}'", args.hits.display()))?;
    let index = AnnotationIndex::from_path(&args.annotations, annotation_delimiter)
        .with_context(|| {
            format!(
                "Failed to load annotations from '{}'",
                args.annotations.display()
            )
        })?;

    if verbose {
        eprintln!(
            "Annotations: {} centroids from {}",
            index.len(),
            args.annotations.display()
        );
    }

    debug!("Output delimiter {delimiter:?}, minimum identity {}%", args.pctid);

    let mut out = create_output(&args.outfile)
        .with_context(|| format!("Failed to create output file '{outfile_name}'"))?;

    let annotator = HitAnnotator::new(&index, args.pctid, delimiter);
    let summary = annotator
        .run(hits, &mut out)
        .with_context(|| format!("Failed to annotate '{}'", args.hits.display()))?;
    drop(out);

    let report = match format {
        OutputFormat::Text => text_summary(&summary, &outfile_name),
        OutputFormat::Json => json_summary(&summary, &outfile_name, &index)?,
    };

    // Keep the report out of annotated rows streamed to stdout
    if is_stdio(&args.outfile) {
        eprintln!("{report}");
    } else {
        println!("{report}");
    }

    Ok(())
}

fn text_summary(summary: &RunSummary, outfile: &str) -> String {
    format!("Exported {} to \"{outfile}\".", format_count(summary.written))
}

fn json_summary(
    summary: &RunSummary,
    outfile: &str,
    index: &AnnotationIndex,
) -> anyhow::Result<String> {
    let mut output = serde_json::to_value(summary)?;
    if let Some(fields) = output.as_object_mut() {
        fields.insert("outfile".to_string(), outfile.into());
        fields.insert("annotations".to_string(), index.len().into());
        fields.insert(
            "annotation_rows".to_string(),
            serde_json::to_value(index.stats())?,
        );
    }

    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_summary() {
        let summary = RunSummary {
            hits_read: 5000,
            below_threshold: 10,
            unmatched: 2,
            written: 4988,
        };
        assert_eq!(
            text_summary(&summary, "out.csv"),
            "Exported 4,988 to \"out.csv\"."
        );
    }

    #[test]
    fn test_json_summary() {
        let index = AnnotationIndex::default();
        let summary = RunSummary {
            written: 3,
            ..RunSummary::default()
        };

        let json: serde_json::Value =
            serde_json::from_str(&json_summary(&summary, "out.tsv", &index).unwrap()).unwrap();
        assert_eq!(json["written"], 3);
        assert_eq!(json["outfile"], "out.tsv");
        assert_eq!(json["hits_read"], 0);
        assert_eq!(json["annotations"], 0);
        assert_eq!(json["annotation_rows"]["skipped"], 0);
    }
}
