//! Contiguous partitioning of the triplet sequence.

use core::ops::Range;

use smallvec::SmallVec;

/// Inline capacity for partition lists; matches the default partition count.
pub const INLINE_PARTITIONS: usize = 32;

/// Computes `k` contiguous ranges covering `0..len`.
///
/// Every partition gets `len / k` items except the last, which also takes
/// the remainder `len % k`. Ranges are in order, never overlap and cover
/// the whole input, so concatenating the partitions reproduces it.
///
/// With `len < k` all partitions but the last are empty.
///
/// # Example
///
/// ```
/// use triplets_core::count::partition::partition_bounds;
///
/// let bounds = partition_bounds(10, 3);
/// assert_eq!(bounds.as_slice(), &[0..3, 3..6, 6..10]);
/// ```
pub fn partition_bounds(len: usize, k: usize) -> SmallVec<[Range<usize>; INLINE_PARTITIONS]> {
    debug_assert!(k > 0, "partition count must be validated before partitioning");

    let mut bounds = SmallVec::with_capacity(k);
    if k == 0 {
        return bounds;
    }

    let base = len / k;
    let mut start = 0usize;
    for _ in 0..k - 1 {
        bounds.push(start..start + base);
        start += base;
    }
    bounds.push(start..len);

    bounds
}

/// Splits `items` into `k` contiguous sub-slices using [`partition_bounds`].
#[inline]
pub fn partition<T>(items: &[T], k: usize) -> SmallVec<[&[T]; INLINE_PARTITIONS]> {
    partition_bounds(items.len(), k)
        .into_iter()
        .map(|range| &items[range])
        .collect()
}
