use std::fmt::{self, Debug};
use std::ops::{Bound, RangeBounds};

use compare::{natural, Compare, Natural};

use crate::iter::{Iter, Keys, Range, Values};
use crate::node::{OnEqual, Root};
use crate::search;

/// An ordered map permitting duplicate keys, backed by a B-tree.
///
/// Insertion always succeeds; entries whose keys compare equal form a
/// contiguous run, and within a run entries keep the order they were
/// inserted in. There is no single-value lookup (ambiguous under
/// duplicates): use [`equal_range`](OrderedMultiMap::equal_range) to walk
/// the run for a key.
pub struct OrderedMultiMap<K, V, C = Natural<K>>
where
    C: Compare<K>,
{
    root: Root<K, V>,
    length: usize,
    cmp: C,
}

impl<K: Ord, V> OrderedMultiMap<K, V> {
    /// Makes a new empty multimap ordered by the natural order of its keys.
    pub fn new() -> OrderedMultiMap<K, V> {
        OrderedMultiMap::with_cmp(natural())
    }
}

impl<K, V, C> OrderedMultiMap<K, V, C>
where
    C: Compare<K>,
{
    /// Makes a new empty multimap ordered by the given comparator.
    pub fn with_cmp(cmp: C) -> OrderedMultiMap<K, V, C> {
        OrderedMultiMap {
            root: Root::new(),
            length: 0,
            cmp,
        }
    }

    /// Returns a reference to the multimap's comparator.
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of entries in the multimap.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the multimap contains no entries.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Clears the multimap, removing all entries.
    pub fn clear(&mut self) {
        self.root = Root::new();
        self.length = 0;
    }

    /// Inserts a key-value pair. Always succeeds; an entry with a key equal
    /// to existing ones lands after them.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMultiMap;
    ///
    /// let mut mm = OrderedMultiMap::new();
    /// mm.insert('b', 20);
    /// mm.insert('b', 30);
    /// mm.insert('b', 40);
    ///
    /// let run: Vec<_> = mm.equal_range(&'b').map(|(_, &v)| v).collect();
    /// assert_eq!(run, [20, 30, 40]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        self.root.insert(key, value, &self.cmp, OnEqual::After);
        self.length += 1;
    }

    /// Returns true if at least one entry has a key equal to `key`.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
    {
        self.root.get(key, &self.cmp).is_some()
    }

    /// Returns the number of entries whose key compares equal to `key`.
    pub fn count(&self, key: &K) -> usize {
        self.equal_range(key).count()
    }

    /// Gets an iterator over the contiguous run of entries whose key
    /// compares equal to `key`, in insertion order.
    pub fn equal_range(&self, key: &K) -> Range<'_, K, V> {
        Range::new(
            &self.root,
            Bound::Included(key),
            Bound::Included(key),
            &self.cmp,
        )
    }

    /// Returns the first entry whose key is not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Option<(&K, &V)> {
        self.root.first_from(Bound::Included(key), &self.cmp)
    }

    /// Returns the first entry whose key is greater than `key`.
    pub fn upper_bound(&self, key: &K) -> Option<(&K, &V)> {
        self.root.first_from(Bound::Excluded(key), &self.cmp)
    }

    // Removes a single entry among those whose key compares equal to
    // `key`. Which entry of an equal run goes is unspecified.
    pub(crate) fn remove_one_entry<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
    {
        let removed = self.root.remove(key, &self.cmp);
        if removed.is_some() {
            self.length -= 1;
        }
        removed
    }

    /// Removes every entry whose key compares equal to `key`, returning how
    /// many were removed.
    pub fn remove_all<Q: ?Sized>(&mut self, key: &Q) -> usize
    where
        C: Compare<Q, K>,
    {
        let mut removed = 0;
        while self.remove_one_entry(key).is_some() {
            removed += 1;
        }
        removed
    }

    /// Removes every entry whose key falls inside the given range,
    /// returning how many were removed.
    pub fn remove_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<K>,
    {
        let mut removed = 0;
        loop {
            let in_range = match self.root.first_from(range.start_bound(), &self.cmp) {
                Some((key, _)) => search::below_end(key, range.end_bound(), &self.cmp),
                None => false,
            };
            if !in_range {
                break;
            }
            if self
                .root
                .remove_first_from(range.start_bound(), &self.cmp)
                .is_some()
            {
                self.length -= 1;
                removed += 1;
            }
        }
        removed
    }

    /// Gets an iterator over the entries of the multimap, sorted by key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.length)
    }

    /// Gets an iterator over the keys of the multimap, in sorted order
    /// (duplicates included).
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Gets an iterator over the values of the multimap, in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Gets an iterator over the entries whose keys fall inside the given
    /// range, sorted by key.
    pub fn range<R>(&self, range: R) -> Range<'_, K, V>
    where
        R: RangeBounds<K>,
    {
        Range::new(&self.root, range.start_bound(), range.end_bound(), &self.cmp)
    }
}

impl<K: Ord, V> Default for OrderedMultiMap<K, V> {
    fn default() -> OrderedMultiMap<K, V> {
        OrderedMultiMap::new()
    }
}

impl<K, V, C> Clone for OrderedMultiMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Compare<K> + Clone,
{
    fn clone(&self) -> Self {
        OrderedMultiMap {
            root: self.root.clone(),
            length: self.length,
            cmp: self.cmp.clone(),
        }
    }
}

impl<K: Debug, V: Debug, C: Compare<K>> Debug for OrderedMultiMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C: Compare<K>> IntoIterator for &'a OrderedMultiMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OrderedMultiMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> OrderedMultiMap<K, V> {
        let mut mm = OrderedMultiMap::new();
        mm.extend(iter);
        mm
    }
}
