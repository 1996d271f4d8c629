use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum, error::ErrorKind};

use crate::config::{PairCap, PairGenerationConfig};
use crate::constants::config::DEFAULT_SEED;
use crate::io::{PairFormat, read_observations, write_pairs};
use crate::metrics::{pair_skew, pairs_per_group};
use crate::pairing::PairGenerator;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Tsv,
    Jsonl,
}

impl From<FormatArg> for PairFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Tsv => PairFormat::Tsv,
            FormatArg::Jsonl => PairFormat::JsonLines,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "generate_pairs",
    disable_help_subcommand = true,
    about = "Generate winner/loser training pairs from grouped, labeled observations",
    long_about = "Read `group_id label` rows, split them into contiguous groups, and emit every differing-label pair per group (or a seeded, capped subset).",
    after_help = "Rows must already be ordered so each group's observations are contiguous; the same id in two separate runs forms two groups."
)]
/// CLI for `generate_pairs`.
///
/// Common usage:
/// - All pairs as TSV on stdout: `--input observations.tsv`
/// - Cap pairs per group: `--max-pairs 100 --seed 7`
/// - JSON lines into a file: `--format jsonl --output pairs.jsonl`
struct GeneratePairsCli {
    #[arg(
        long,
        value_name = "PATH",
        help = "Observation file with `group_id label` rows (defaults to stdin)"
    )]
    input: Option<PathBuf>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Destination for generated pairs (defaults to stdout)"
    )]
    output: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = DEFAULT_SEED,
        help = "Deterministic seed for downsampling and rejection sampling"
    )]
    seed: u64,
    #[arg(
        long = "max-pairs",
        value_name = "N|unbounded",
        default_value = "unbounded",
        value_parser = parse_pair_cap_arg,
        help = "Per-group cap on emitted pairs"
    )]
    max_pairs: PairCap,
    #[arg(long, value_enum, default_value = "tsv", help = "Output format")]
    format: FormatArg,
    #[arg(long, help = "Print a JSON generation summary to stderr")]
    summary: bool,
}

/// Runs the `generate_pairs` command line over `args_iter` (without the program name).
pub fn run_generate_pairs<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let Some(cli) = parse_cli::<GeneratePairsCli, _>(
        std::iter::once("generate_pairs".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let observations = match &cli.input {
        Some(path) => read_observations(BufReader::new(File::open(path)?))?,
        None => read_observations(io::stdin().lock())?,
    };

    let generator = PairGenerator::new(PairGenerationConfig {
        seed: cli.seed,
        max_pairs_per_group: cli.max_pairs,
    });
    let (pairs, summary) =
        generator.generate_with_summary(&observations.group_ids, &observations.labels)?;

    let format = PairFormat::from(cli.format);
    match &cli.output {
        Some(path) => write_pairs(BufWriter::new(File::create(path)?), &pairs, format)?,
        None => write_pairs(io::stdout().lock(), &pairs, format)?,
    }

    if cli.summary {
        let skew = pair_skew(&pairs_per_group(&observations.group_ids, &pairs));
        let report = serde_json::json!({
            "config": generator.config(),
            "summary": summary,
            "skew": skew,
        });
        let mut stderr = io::stderr().lock();
        serde_json::to_writer_pretty(&mut stderr, &report)?;
        writeln!(stderr)?;
    }
    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

fn parse_pair_cap_arg(raw: &str) -> Result<PairCap, String> {
    raw.parse::<PairCap>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_caps_and_formats() {
        let cli = GeneratePairsCli::try_parse_from([
            "generate_pairs",
            "--max-pairs",
            "12",
            "--format",
            "jsonl",
            "--seed",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.max_pairs, PairCap::Limit(12));
        assert_eq!(PairFormat::from(cli.format), PairFormat::JsonLines);
        assert_eq!(cli.seed, 5);

        let defaults = GeneratePairsCli::try_parse_from(["generate_pairs"]).unwrap();
        assert_eq!(defaults.max_pairs, PairCap::Unbounded);
        assert_eq!(defaults.seed, DEFAULT_SEED);
        assert!(defaults.input.is_none());
    }

    #[test]
    fn cli_rejects_bad_caps() {
        let err = GeneratePairsCli::try_parse_from(["generate_pairs", "--max-pairs", "lots"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn help_is_not_an_error() {
        let result = parse_cli::<GeneratePairsCli, _>(["generate_pairs", "--help"]);
        assert!(matches!(result, Ok(None)));
    }
}
