use std::cmp::Ordering;
use std::ops::Bound;

use compare::Compare;

pub enum SearchResult {
    Found(usize),
    GoDown(usize),
}

pub fn search_linear<K, Q: ?Sized, C>(keys: &[K], key: &Q, cmp: &C) -> SearchResult
where
    C: Compare<Q, K>,
{
    for (i, k) in keys.iter().enumerate() {
        match cmp.compare(key, k) {
            Ordering::Greater => {}
            Ordering::Equal => return SearchResult::Found(i),
            Ordering::Less => return SearchResult::GoDown(i),
        }
    }
    SearchResult::GoDown(keys.len())
}

/// Index of the first key not less than `key`.
pub fn lower_bound_linear<K, Q: ?Sized, C>(keys: &[K], key: &Q, cmp: &C) -> usize
where
    C: Compare<Q, K>,
{
    for (i, k) in keys.iter().enumerate() {
        if cmp.compare(key, k) != Ordering::Greater {
            return i;
        }
    }
    keys.len()
}

/// Index of the first key greater than `key`.
pub fn upper_bound_linear<K, Q: ?Sized, C>(keys: &[K], key: &Q, cmp: &C) -> usize
where
    C: Compare<Q, K>,
{
    for (i, k) in keys.iter().enumerate() {
        if cmp.compare(key, k) == Ordering::Less {
            return i;
        }
    }
    keys.len()
}

/// Index of the first key inside a range that starts at `bound`.
pub fn start_partition<K, C>(keys: &[K], bound: Bound<&K>, cmp: &C) -> usize
where
    C: Compare<K>,
{
    match bound {
        Bound::Included(key) => lower_bound_linear(keys, key, cmp),
        Bound::Excluded(key) => upper_bound_linear(keys, key, cmp),
        Bound::Unbounded => 0,
    }
}

/// Index of the first key past a range that ends at `bound`.
pub fn end_partition<K, C>(keys: &[K], bound: Bound<&K>, cmp: &C) -> usize
where
    C: Compare<K>,
{
    match bound {
        Bound::Included(key) => upper_bound_linear(keys, key, cmp),
        Bound::Excluded(key) => lower_bound_linear(keys, key, cmp),
        Bound::Unbounded => keys.len(),
    }
}

/// Whether `key` still falls inside a range that ends at `bound`.
pub fn below_end<K, C>(key: &K, bound: Bound<&K>, cmp: &C) -> bool
where
    C: Compare<K>,
{
    match bound {
        Bound::Included(end) => cmp.compare(key, end) != Ordering::Greater,
        Bound::Excluded(end) => cmp.compare(key, end) == Ordering::Less,
        Bound::Unbounded => true,
    }
}
