//! The parallel counting pipeline.
//!
//! normalize -> extract -> partition -> aggregate (per worker) -> merge -> rank
//!
//! Threading:
//! - Each [`TripletCounter`] owns a fixed-size rayon pool with one thread per
//!   partition. Workers only read their own chunk and return an owned table;
//!   the merge runs on the calling thread after every worker has returned.
//! - A panicking worker propagates out of [`TripletCounter::tally`], so a run
//!   never completes with a partition missing.
//! - The counter holds no per-run state and is `Send + Sync`; independent
//!   runs may share one counter.

use log::{debug, trace};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use triplets_types::{CountConfig, Triplet, TripletCount};

use crate::analyzer::normalizer::LetterNormalizer;
use crate::analyzer::triplet::{SlidingWindowExtractor, TripletExtractor};
use crate::count::{aggregate_chunk, merge_tables, partition, rank_top, FrequencyTable};
use crate::error::Result;
use crate::stats::CountStats;

/// Output of a counting run before ranking.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    /// Global frequency table.
    pub table: FrequencyTable,
    /// What the run processed.
    pub stats: CountStats,
}

impl Tally {
    /// Returns the `n` most frequent triplets.
    pub fn top(&self, n: usize) -> Vec<TripletCount> {
        rank_top(&self.table, n)
    }
}

/// Counts letter triplets using a fixed pool of workers.
///
/// Triplets are cut by `E`, the standard overlapping window unless another
/// [`TripletExtractor`] is supplied through [`TripletCounter::with_extractor`].
///
/// # Example
///
/// ```
/// use triplets_core::TripletCounter;
/// use triplets_types::CountConfig;
///
/// let counter = TripletCounter::new(CountConfig::default().with_partitions(4)).unwrap();
/// let top = counter.rank("abcabcabc");
///
/// assert_eq!(top[0].triplet.to_string(), "abc");
/// assert_eq!(top[0].count, 3);
/// ```
#[derive(Debug)]
pub struct TripletCounter<E = SlidingWindowExtractor> {
    config: CountConfig,
    normalizer: LetterNormalizer,
    extractor: E,
    pool: ThreadPool,
}

impl TripletCounter {
    /// Validates `config` and starts the worker pool.
    ///
    /// # Errors
    ///
    /// Returns `CountError::Config` if the partition count is 0 or too large.
    /// Returns `CountError::WorkerPool` if the worker threads cannot be spawned.
    pub fn new(config: CountConfig) -> Result<Self> {
        Self::with_extractor(config, SlidingWindowExtractor)
    }
}

impl<E: TripletExtractor + Sync> TripletCounter<E> {
    /// Like [`TripletCounter::new`], with a custom triplet extractor.
    ///
    /// # Errors
    ///
    /// Same as [`TripletCounter::new`].
    pub fn with_extractor(config: CountConfig, extractor: E) -> Result<Self> {
        config.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.partitions)
            .thread_name(|i| format!("triplets-worker-{i}"))
            .build()?;

        debug!(
            "started triplet counter: {} workers, top {}",
            config.partitions, config.top_n
        );

        Ok(Self {
            config,
            normalizer: LetterNormalizer::new(),
            extractor,
            pool,
        })
    }

    /// Returns the configuration this counter was built with.
    #[inline]
    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// Builds the global frequency table for `text`.
    pub fn tally(&self, text: &str) -> Tally {
        let normalized = self.normalizer.normalize(text);
        let triplets = self.extractor.collect(&normalized);
        let chunks = partition(&triplets, self.config.partitions);

        debug!(
            "split {} triplets into {} partitions",
            triplets.len(),
            chunks.len()
        );

        let locals = self.count_partitions(&chunks, aggregate_chunk);
        let table = merge_tables(locals);
        let stats = CountStats {
            letters: normalized.chars().count(),
            triplets: triplets.len(),
            distinct: table.len(),
            partitions: chunks.len(),
        };

        debug!("tally complete: {stats}");

        Tally { table, stats }
    }

    /// Returns the configured top-N triplets of `text`.
    pub fn rank(&self, text: &str) -> Vec<TripletCount> {
        self.tally(text).top(self.config.top_n)
    }

    /// Runs `count` on every chunk in the pool, one table per chunk, in order.
    ///
    /// Returns only after every chunk is counted. A panic in any chunk is
    /// resumed on the caller and no table is returned.
    fn count_partitions<F>(&self, chunks: &[&[Triplet]], count: F) -> Vec<FrequencyTable>
    where
        F: Fn(&[Triplet]) -> FrequencyTable + Sync,
    {
        self.pool.install(|| {
            chunks
                .par_iter()
                .enumerate()
                .map(|(i, &chunk)| {
                    let local = count(chunk);
                    trace!(
                        "partition {i}: {} triplets, {} distinct",
                        chunk.len(),
                        local.len()
                    );
                    local
                })
                .collect()
        })
    }
}

/// Ranks the `top_n` most frequent letter triplets of `text`, counting with
/// `partitions` parallel workers.
///
/// Short or letterless input yields an empty vector.
///
/// Each call starts and tears down a pool of `partitions` OS threads. Callers
/// counting many texts should build one [`TripletCounter`] and reuse it.
///
/// # Errors
///
/// Returns `CountError::Config` if `partitions` is 0 or exceeds the maximum.
/// Returns `CountError::WorkerPool` if the worker threads cannot be spawned.
pub fn rank_top_triplets(text: &str, top_n: usize, partitions: usize) -> Result<Vec<TripletCount>> {
    let config = CountConfig { top_n, partitions };
    Ok(TripletCounter::new(config)?.rank(text))
}
