//! Run statistics.

/// A snapshot of what one counting run processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountStats {
    /// Letters left after normalization.
    pub letters: usize,
    /// Triplet occurrences extracted; `letters - 2` or 0 for the sliding window.
    pub triplets: usize,
    /// Distinct triplets in the global table.
    pub distinct: usize,
    /// Partitions the triplets were split into.
    pub partitions: usize,
}

impl CountStats {
    /// Average occurrences per distinct triplet, 0.0 for an empty run.
    pub fn mean_frequency(&self) -> f64 {
        if self.distinct == 0 {
            0.0
        } else {
            self.triplets as f64 / self.distinct as f64
        }
    }
}

impl core::fmt::Display for CountStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} letters, {} triplets, {} distinct, {} partitions",
            self.letters, self.triplets, self.distinct, self.partitions
        )?;

        if self.distinct > 0 {
            write!(f, ", {:.2} per triplet", self.mean_frequency())?;
        }

        Ok(())
    }
}
