//! Triplet Counting Benchmark Tool
//!
//! Measures each stage of the counting pipeline on a large text file, so
//! that partition counts can be compared on real input.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: Dropping non-letters and lowercasing
//! 2. **Extraction**: Collecting triplets from normalized text
//! 3. **Tally**: The full pipeline, including parallel counting and merge
//!
//! ## Usage
//!
//! ```bash
//! # Default partition count (32)
//! ./target/release/triplet_bench /path/to/book.txt
//!
//! # Compare against a specific partition count
//! ./target/release/triplet_bench /path/to/book.txt 8
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Tally (8 partitions) ===
//! --------------------------------
//! Mode        : Tally
//! Elapsed     : 0.052 s
//! Throughput  : 0.412 GiB/s
//! Triplets    : 21_843_117
//! Triplets/sec: 420_059_942
//! --------------------------------
//! ```
//!
//! Build in release mode and use inputs of a few hundred MiB for stable numbers.

use std::fs;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;
use triplets_core::analyzer::normalizer::LetterNormalizer;
use triplets_core::analyzer::triplet::collect_triplets;
use triplets_core::{CountConfig, TripletCounter};
use triplets_types::DEFAULT_PARTITIONS;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: triplet_bench <path> [partitions]");
        std::process::exit(1);
    };

    let partitions = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("invalid partition count {raw:?}"))?,
        None => DEFAULT_PARTITIONS,
    };

    println!("Loading file...");
    let bytes = fs::read(&path).with_context(|| format!("cannot read {path}"))?;
    let input = String::from_utf8_lossy(&bytes);

    println!("File size:  {}", fmt_bytes(input.len() as u64));
    println!("Partitions: {}\n", partitions);

    let counter = TripletCounter::new(CountConfig::default().with_partitions(partitions))?;

    bench_normalize(&input);
    bench_extract(&input);
    bench_tally(&input, &counter);

    Ok(())
}

fn bench_normalize(input: &str) {
    let normalizer = LetterNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| normalizer.normalize_into(input, &mut out));
    let elapsed = measure(|| normalizer.normalize_into(input, &mut out));

    print_perf("Normalize", input.len(), elapsed, 0);
}

fn bench_extract(input: &str) {
    let normalized = LetterNormalizer::new().normalize(input);

    println!("=== Extract ===");

    warmup(|| {
        std::hint::black_box(collect_triplets(&normalized));
    });

    let mut triplets = 0u64;
    let elapsed = measure(|| {
        let out = collect_triplets(&normalized);
        triplets = out.len() as u64;
        std::hint::black_box(out);
    });

    print_perf("Extract", input.len(), elapsed, triplets);
}

fn bench_tally(input: &str, counter: &TripletCounter) {
    println!("=== Tally ({} partitions) ===", counter.config().partitions);

    warmup(|| {
        std::hint::black_box(counter.tally(input));
    });

    let mut triplets = 0u64;
    let elapsed = measure(|| {
        let tally = counter.tally(input);
        triplets = tally.stats.triplets as u64;
        std::hint::black_box(tally);
    });

    info!("{}", counter.tally(input).stats);
    print_perf("Tally", input.len(), elapsed, triplets);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, triplets: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if triplets > 0 {
        println!("Triplets    : {}", fmt_count(triplets));
        println!("Triplets/sec: {}", fmt_count((triplets as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
