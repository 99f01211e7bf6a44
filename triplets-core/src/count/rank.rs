//! Top-N selection over the global frequency table.

use triplets_types::TripletCount;

use crate::count::FrequencyTable;

/// Returns up to `n` triplets ordered by descending count.
///
/// Ties are broken by ascending triplet order (see
/// [`TripletCount::rank_cmp`]), so the output is fully deterministic.
/// Tables with fewer than `n` entries are returned whole; `n == 0` yields
/// an empty vector.
///
/// When `n` is smaller than the table only the top `n` are sorted; the rest
/// is partitioned away with `select_nth_unstable_by`.
pub fn rank_top(table: &FrequencyTable, n: usize) -> Vec<TripletCount> {
    if n == 0 || table.is_empty() {
        return Vec::new();
    }

    let mut records: Vec<TripletCount> = table
        .iter()
        .map(|(&triplet, &count)| TripletCount::new(triplet, count))
        .collect();

    if n < records.len() {
        records.select_nth_unstable_by(n - 1, TripletCount::rank_cmp);
        records.truncate(n);
    }

    // Keys are unique, so rank_cmp never reports Equal for distinct records
    records.sort_unstable_by(TripletCount::rank_cmp);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use triplets_types::Triplet;

    fn t(s: &str) -> Triplet {
        s.parse().expect("valid triplet")
    }

    fn table(entries: &[(&str, usize)]) -> FrequencyTable {
        entries.iter().map(|&(s, c)| (t(s), c)).collect()
    }

    fn pairs(ranked: &[TripletCount]) -> Vec<(String, usize)> {
        ranked
            .iter()
            .map(|r| (r.triplet.to_string(), r.count))
            .collect()
    }

    #[test]
    fn empty_table() {
        assert!(rank_top(&FrequencyTable::default(), 10).is_empty());
    }

    #[test]
    fn zero_requested() {
        assert!(rank_top(&table(&[("abc", 1)]), 0).is_empty());
    }

    #[test]
    fn descending_with_lexicographic_ties() {
        let ranked = rank_top(&table(&[("cab", 2), ("abc", 3), ("bca", 2)]), 3);
        assert_eq!(
            pairs(&ranked),
            vec![
                ("abc".to_string(), 3),
                ("bca".to_string(), 2),
                ("cab".to_string(), 2)
            ]
        );
    }

    #[test]
    fn fewer_entries_than_requested() {
        let ranked = rank_top(&table(&[("aaa", 1), ("bbb", 4)]), 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], TripletCount::new(t("bbb"), 4));
        assert_eq!(ranked[1], TripletCount::new(t("aaa"), 1));
    }

    #[test]
    fn truncates_to_n() {
        let ranked = rank_top(
            &table(&[("aaa", 1), ("bbb", 5), ("ccc", 3), ("ddd", 5), ("eee", 2)]),
            3,
        );
        assert_eq!(
            pairs(&ranked),
            vec![
                ("bbb".to_string(), 5),
                ("ddd".to_string(), 5),
                ("ccc".to_string(), 3)
            ]
        );
    }

    #[test]
    fn tie_at_cutoff_resolved_lexicographically() {
        let ranked = rank_top(&table(&[("zzz", 1), ("mmm", 1), ("aaa", 1)]), 2);
        assert_eq!(
            pairs(&ranked),
            vec![("aaa".to_string(), 1), ("mmm".to_string(), 1)]
        );
    }

    #[test]
    fn output_is_sorted_for_large_tables() {
        let table: FrequencyTable = (0..500u32)
            .map(|i| {
                let c = char::from_u32('a' as u32 + i % 26).unwrap_or('a');
                let d = char::from_u32('a' as u32 + (i / 26) % 26).unwrap_or('a');
                (Triplet::new(c, d, 'x'), (i as usize * 7919) % 37)
            })
            .collect();

        let ranked = rank_top(&table, 50);
        assert_eq!(ranked.len(), 50);
        for pair in ranked.windows(2) {
            assert!(pair[0].rank_cmp(&pair[1]).is_lt());
        }

        let full = rank_top(&table, table.len());
        assert_eq!(&full[..50], ranked.as_slice());
    }
}
