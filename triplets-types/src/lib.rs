//! Core types for the triplet frequency counter.
//!
//! This crate holds the value types shared by the counting core and the
//! command-line tools:
//!
//! - **[`Triplet`]**: three consecutive letters, `Copy` and hashable
//! - **[`TripletCount`]**: a triplet with its occurrence count
//! - **[`CountConfig`]**: run configuration, validated before any work starts

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Default number of ranked triplets returned by a run.
pub const DEFAULT_TOP_N: usize = 10;

/// Default number of partitions (and worker threads) per run.
pub const DEFAULT_PARTITIONS: usize = 32;

/// Upper bound on the partition count. Each partition gets its own worker
/// thread, so this also caps the pool size.
pub const MAX_PARTITIONS: usize = 1024;

/// Three consecutive characters of normalized text.
///
/// Stored as a `[char; 3]` so that non-ASCII letters stay intact and the
/// value works as a hash map key without allocation.
///
/// Ordering is lexicographic by Unicode scalar value, which is the
/// tie-break used when ranking triplets with equal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Triplet([char; 3]);

impl Triplet {
    /// Creates a triplet from three characters.
    #[inline(always)]
    pub const fn new(c0: char, c1: char, c2: char) -> Self {
        Self([c0, c1, c2])
    }

    /// Returns the three characters of this triplet.
    #[inline(always)]
    pub const fn chars(self) -> [char; 3] {
        self.0
    }
}

impl From<[char; 3]> for Triplet {
    #[inline(always)]
    fn from(chars: [char; 3]) -> Self {
        Self(chars)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}{}{}", a, b, c)
    }
}

/// Error returned when parsing a [`Triplet`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a triplet needs exactly 3 characters, got {len}")]
pub struct ParseTripletError {
    /// Number of characters in the rejected input.
    pub len: usize,
}

impl FromStr for Triplet {
    type Err = ParseTripletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), Some(c), None) => Ok(Self::new(a, b, c)),
            _ => Err(ParseTripletError {
                len: s.chars().count(),
            }),
        }
    }
}

/// A triplet together with the number of times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripletCount {
    /// The triplet.
    pub triplet: Triplet,
    /// Occurrences across the whole input.
    pub count: usize,
}

impl TripletCount {
    /// Creates a new frequency record.
    #[inline(always)]
    pub const fn new(triplet: Triplet, count: usize) -> Self {
        Self { triplet, count }
    }

    /// Ranking order: higher count first, then ascending triplet.
    ///
    /// `Ordering::Less` means `self` ranks ahead of `other`. Triplets are
    /// unique within a frequency table, so this is a total order over any
    /// ranked output and sorting by it is deterministic.
    #[inline]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match other.count.cmp(&self.count) {
            Ordering::Equal => self.triplet.cmp(&other.triplet),
            ord => ord,
        }
    }
}

impl fmt::Display for TripletCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.triplet, self.count)
    }
}

/// Errors raised by [`CountConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// At least one partition is required.
    #[error("partition count must be at least 1")]
    ZeroPartitions,
    /// Partition count exceeds [`MAX_PARTITIONS`].
    #[error("partition count {requested} exceeds the maximum of {max}")]
    TooManyPartitions {
        /// The requested partition count.
        requested: usize,
        /// The largest accepted partition count.
        max: usize,
    },
}

/// Configuration of a counting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountConfig {
    /// How many ranked triplets to return.
    /// Default: 10
    pub top_n: usize,
    /// Number of contiguous partitions, each counted by its own worker.
    /// Default: 32
    pub partitions: usize,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            partitions: DEFAULT_PARTITIONS,
        }
    }
}

impl CountConfig {
    /// Creates a configuration that counts everything on a single worker.
    pub const fn sequential() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            partitions: 1,
        }
    }

    /// Returns a copy with a different `top_n`.
    pub const fn with_top_n(self, top_n: usize) -> Self {
        Self { top_n, ..self }
    }

    /// Returns a copy with a different partition count.
    pub const fn with_partitions(self, partitions: usize) -> Self {
        Self { partitions, ..self }
    }

    /// Checks that the configuration can be run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroPartitions` if `partitions` is 0.
    /// Returns `ConfigError::TooManyPartitions` if `partitions` exceeds [`MAX_PARTITIONS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.partitions {
            0 => Err(ConfigError::ZeroPartitions),
            n if n > MAX_PARTITIONS => Err(ConfigError::TooManyPartitions {
                requested: n,
                max: MAX_PARTITIONS,
            }),
            _ => Ok(()),
        }
    }
}
