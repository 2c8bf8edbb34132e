//! Command-line record sorter.
//!
//! Reads `id,string,int,float` CSV records from the input file, sorts them
//! by the selected field with the selected algorithm, and writes the result
//! to the output file.

use anyhow::{Context, bail};
use clap::Parser;
use polysort::core::Algorithm;
use polysort::records::{SortField, sort_records};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Sorts fixed-schema CSV records by a chosen field.")]
struct Cli {
    /// Input CSV file, one `id,string,int,float` record per line.
    input: PathBuf,

    /// Output CSV file, overwritten with the sorted records.
    output: PathBuf,

    /// Field to sort by: STRING, INTEGER, FLOAT or an id in 1..=3.
    field: SortField,

    /// Algorithm: MERGESORT, QUICKSORT, BININSSORT, MERGEBININSSORT or an id
    /// in 1..=4.
    algorithm: Algorithm,

    /// Switchover threshold for MERGEBININSSORT; required for that algorithm
    /// and must be greater than one.
    threshold: Option<usize>,
}

fn run(cli: &Cli) -> anyhow::Result<usize> {
    let algorithm = match (cli.algorithm, cli.threshold) {
        (Algorithm::MergeBinaryInsertion { .. }, Some(threshold)) => {
            Algorithm::MergeBinaryInsertion { threshold }
        }
        (Algorithm::MergeBinaryInsertion { .. }, None) => {
            bail!("MERGEBININSSORT requires a threshold argument greater than one");
        }
        (algorithm, _) => algorithm,
    };

    let input = BufReader::new(
        File::open(&cli.input)
            .with_context(|| format!("unable to open input file {}", cli.input.display()))?,
    );
    let output = BufWriter::new(
        File::create(&cli.output)
            .with_context(|| format!("unable to create output file {}", cli.output.display()))?,
    );

    let count = sort_records(input, output, cli.field, algorithm)?;
    Ok(count)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(count) => {
            log::info!("sorted {count} records");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
