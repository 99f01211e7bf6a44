//! Per-chunk frequency counting.

use rustc_hash::FxHashMap;
use triplets_types::Triplet;

use crate::count::FrequencyTable;

/// Capacity hint cap for a chunk table. 26^3 covers every ASCII triplet;
/// larger alphabets grow the table on demand.
const MAX_PRESIZE: usize = 26 * 26 * 26;

/// Counts every distinct triplet in one chunk.
///
/// A single hashed grouping pass, O(n) expected. The function touches no
/// state besides its input and the table it returns, so chunks can be
/// counted concurrently without coordination.
///
/// An empty chunk yields an empty table.
pub fn aggregate_chunk(chunk: &[Triplet]) -> FrequencyTable {
    let mut table: FrequencyTable =
        FxHashMap::with_capacity_and_hasher(chunk.len().min(MAX_PRESIZE), Default::default());

    for &triplet in chunk {
        *table.entry(triplet).or_insert(0) += 1;
    }

    table
}
