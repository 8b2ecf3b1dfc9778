//! Keyed accumulation shared by the rate and income aggregates
//!
//! Rows are folded into one accumulator per group key. Large inputs are
//! folded on the rayon pool: every worker builds its own map of partial
//! accumulators and the maps are merged pairwise at the end, so no
//! accumulator is ever shared between threads.

use std::collections::hash_map::Entry;
use std::hash::Hash;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Partial aggregate that can absorb another partial aggregate of the same group
pub trait Merge {
    fn merge(&mut self, other: Self);
}

/// Fold `items` into one accumulator per key
///
/// Items for which `key_of` returns `None` are skipped.
pub fn accumulate_groups<T, K, A, KF, AF>(
    items: &[T],
    parallel: bool,
    key_of: KF,
    add: AF,
) -> FxHashMap<K, A>
where
    T: Sync,
    K: Eq + Hash + Send,
    A: Default + Merge + Send,
    KF: Fn(&T) -> Option<K> + Sync,
    AF: Fn(&mut A, &T) + Sync,
{
    let fold = |mut groups: FxHashMap<K, A>, item: &T| {
        if let Some(key) = key_of(item) {
            add(groups.entry(key).or_default(), item);
        }
        groups
    };

    if parallel {
        items
            .par_iter()
            .fold(FxHashMap::default, fold)
            .reduce(FxHashMap::default, merge_groups)
    } else {
        items.iter().fold(FxHashMap::default(), fold)
    }
}

fn merge_groups<K: Eq + Hash, A: Merge>(
    mut left: FxHashMap<K, A>,
    right: FxHashMap<K, A>,
) -> FxHashMap<K, A> {
    for (key, partial) in right {
        match left.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().merge(partial),
            Entry::Vacant(entry) => {
                entry.insert(partial);
            }
        }
    }
    left
}
