//! Frequency counting over a triplet sequence.
//!
//! The stages, in data-flow order:
//! - [`partition`]: splits the ordered triplets into K contiguous chunks
//! - [`aggregate`]: counts each chunk independently (the parallel stage)
//! - [`merge`]: sums the chunk tables once every chunk is done
//! - [`rank`]: picks the N most frequent triplets
//!
//! Every stage is a plain function over owned or borrowed data. Scheduling
//! lives in [`crate::counter`].

pub mod aggregate;
pub mod merge;
pub mod partition;
pub mod rank;

use rustc_hash::FxHashMap;
use triplets_types::Triplet;

/// Mapping from triplet to its number of occurrences.
pub type FrequencyTable = FxHashMap<Triplet, usize>;

pub use aggregate::aggregate_chunk;
pub use merge::merge_tables;
pub use partition::{partition, partition_bounds};
pub use rank::rank_top;
