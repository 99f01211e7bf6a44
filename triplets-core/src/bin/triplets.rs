//! Prints the most frequent letter triplets of a text file.
//!
//! ## Usage
//!
//! ```bash
//! # Top 10 triplets with their counts, 32 workers
//! triplets book.txt
//!
//! # Top 5, counted on 8 workers, letters only
//! triplets book.txt --top 5 --partitions 8 --letters-only
//!
//! # Show run statistics and per-partition logging
//! triplets book.txt -vv
//! ```
//!
//! ## Output
//!
//! ```text
//! the - 1520
//! and - 734
//! ing - 690
//! Elapsed: 12.408ms
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use triplets_core::{CountConfig, TripletCounter};
use triplets_types::{DEFAULT_PARTITIONS, DEFAULT_TOP_N};

/// Count the most frequent three-letter sequences in a text file.
#[derive(Debug, Parser)]
#[command(name = "triplets", version, about)]
struct Cli {
    /// Text file to analyze
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Number of triplets to report
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Number of partitions counted in parallel (one worker each)
    #[arg(short, long, default_value_t = DEFAULT_PARTITIONS)]
    partitions: usize,

    /// Print the letters only, without their frequency
    #[arg(long)]
    letters_only: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_text(&cli.input)?;
    info!("read {} bytes from {}", text.len(), cli.input.display());

    let config = CountConfig {
        top_n: cli.top,
        partitions: cli.partitions,
    };
    let counter = TripletCounter::new(config).context("cannot set up the counter")?;

    let start = Instant::now();
    let tally = counter.tally(&text);
    let ranked = tally.top(config.top_n);
    let elapsed = start.elapsed();

    info!("{}", tally.stats);

    for record in &ranked {
        if cli.letters_only {
            println!("{}", record.triplet);
        } else {
            println!("{record}");
        }
    }
    println!("Elapsed: {elapsed:?}");

    Ok(())
}

/// Reads `path` as text, replacing invalid UTF-8 instead of failing.
fn read_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("cannot read input file {}", path.display()))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                "{} is not valid UTF-8 (first error at byte {}); decoding lossily",
                path.display(),
                err.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
