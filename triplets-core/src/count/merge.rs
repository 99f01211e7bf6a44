//! Reduction of chunk-local tables into the global frequency table.

use crate::count::FrequencyTable;

/// Sums chunk tables key by key into one table.
///
/// A key missing from a chunk contributes nothing. Addition is commutative
/// and associative, so the result does not depend on the order of `tables`.
///
/// The largest table becomes the accumulator and the others are folded into
/// it, which keeps rehashing to a minimum. Callers pass owned tables after
/// every worker has returned; nothing here is shared across threads.
pub fn merge_tables<I>(tables: I) -> FrequencyTable
where
    I: IntoIterator<Item = FrequencyTable>,
{
    let mut tables: Vec<FrequencyTable> = tables.into_iter().collect();

    let Some(largest) = tables
        .iter()
        .enumerate()
        .max_by_key(|(_, table)| table.len())
        .map(|(i, _)| i)
    else {
        return FrequencyTable::default();
    };

    let mut merged = tables.swap_remove(largest);
    for table in tables {
        for (triplet, count) in table {
            *merged.entry(triplet).or_insert(0) += count;
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::triplet::collect_triplets;
    use crate::count::aggregate::aggregate_chunk;
    use crate::count::partition::partition;
    use triplets_types::Triplet;

    fn t(s: &str) -> Triplet {
        s.parse().expect("valid triplet")
    }

    fn table(entries: &[(&str, usize)]) -> FrequencyTable {
        entries.iter().map(|&(s, c)| (t(s), c)).collect()
    }

    #[test]
    fn no_tables() {
        assert!(merge_tables(Vec::new()).is_empty());
    }

    #[test]
    fn all_empty_tables() {
        let merged = merge_tables(vec![FrequencyTable::default(); 4]);
        assert!(merged.is_empty());
    }

    #[test]
    fn sums_shared_keys() {
        let merged = merge_tables(vec![
            table(&[("abc", 2), ("bca", 1)]),
            table(&[("abc", 1), ("cab", 4)]),
            table(&[("bca", 3)]),
        ]);

        assert_eq!(merged, table(&[("abc", 3), ("bca", 4), ("cab", 4)]));
    }

    #[test]
    fn order_independent() {
        let a = table(&[("abc", 2), ("xyz", 1)]);
        let b = table(&[("abc", 5)]);
        let c = table(&[("qqq", 7), ("xyz", 2)]);

        let forward = merge_tables(vec![a.clone(), b.clone(), c.clone()]);
        let backward = merge_tables(vec![c, b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn merged_partitions_equal_single_pass() {
        let triplets = collect_triplets("abracadabraabracadabra");
        let whole = aggregate_chunk(&triplets);

        for k in 1..=8 {
            let merged = merge_tables(partition(&triplets, k).iter().map(|c| aggregate_chunk(c)));
            assert_eq!(merged, whole, "k = {k}");
        }
    }
}
