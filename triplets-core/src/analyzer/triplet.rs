//! Triplet extraction module.
//!
//! Provides extraction of 3-character sequences from normalized text.
//! Windows are taken over `char`s, not bytes, so non-ASCII letters form
//! triplets the same way ASCII letters do.

use triplets_types::Triplet;

/// Extracts triplets from text using a sliding window.
///
/// For text shorter than 3 characters, no triplets are emitted.
/// For text of N characters, exactly N-2 triplets are emitted, in text order.
///
/// # Example
///
/// ```
/// use triplets_core::analyzer::triplet::extract_triplets;
///
/// let mut triplets = Vec::new();
/// extract_triplets("hello", |t| triplets.push(t));
///
/// assert_eq!(triplets.len(), 3); // "hel", "ell", "llo"
/// ```
#[inline(always)]
pub fn extract_triplets<F>(text: &str, mut callback: F)
where
    F: FnMut(Triplet),
{
    extract_triplets_with_pos(text, |t, _| callback(t));
}

/// Extracts triplets from text with position information.
///
/// The callback receives (triplet, char_position) for each triplet.
/// Position is the index of the triplet's first character, counted in chars.
#[inline(always)]
pub fn extract_triplets_with_pos<F>(text: &str, mut callback: F)
where
    F: FnMut(Triplet, usize),
{
    let mut chars = text.chars();
    let (Some(mut c0), Some(mut c1)) = (chars.next(), chars.next()) else {
        return;
    };

    for (pos, c2) in chars.enumerate() {
        callback(Triplet::new(c0, c1, c2), pos);
        c0 = c1;
        c1 = c2;
    }
}

/// Extracts all triplets into a vector, in text order.
#[inline]
pub fn collect_triplets(text: &str) -> Vec<Triplet> {
    SlidingWindowExtractor.collect(text)
}

/// Counts triplets without extracting them.
///
/// Returns 0 for text shorter than 3 characters.
#[inline(always)]
pub fn count_triplets(text: &str) -> usize {
    text.chars().count().saturating_sub(2)
}

/// Trait for types that can extract triplets.
///
/// This allows custom windowing strategies while reusing
/// the same counting infrastructure. [`crate::TripletCounter`] is generic
/// over it.
pub trait TripletExtractor {
    /// Extracts all triplets from text.
    fn extract<F>(&self, text: &str, callback: F)
    where
        F: FnMut(Triplet);

    /// Extracts all triplets into a vector, in extraction order.
    fn collect(&self, text: &str) -> Vec<Triplet> {
        let mut out = Vec::with_capacity(count_triplets(text));
        self.extract(text, |t| out.push(t));
        out
    }
}

/// Standard sliding-window extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlidingWindowExtractor;

impl TripletExtractor for SlidingWindowExtractor {
    #[inline(always)]
    fn extract<F>(&self, text: &str, callback: F)
    where
        F: FnMut(Triplet),
    {
        extract_triplets(text, callback);
    }
}
