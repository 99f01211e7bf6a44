//! Parallel letter-triplet frequency counter.
//!
//! Text is reduced to its lowercase letters, cut into overlapping
//! 3-character windows, counted in contiguous partitions on a worker pool,
//! merged once and ranked by frequency.
//!
//! ```
//! let top = triplets_core::rank_top_triplets("abcabcabc", 3, 2).unwrap();
//! let rendered: Vec<String> = top.iter().map(ToString::to_string).collect();
//!
//! assert_eq!(rendered, ["abc - 3", "bca - 2", "cab - 2"]);
//! ```

pub mod analyzer;
pub mod count;
pub mod counter;
pub mod error;
pub mod stats;

pub use counter::{rank_top_triplets, Tally, TripletCounter};
pub use error::{CountError, Result};
pub use stats::CountStats;
pub use triplets_types::{CountConfig, Triplet, TripletCount};
