use std::fmt::{self, Debug};
use std::ops::RangeBounds;

use compare::{natural, Compare, Natural};

use crate::multimap::OrderedMultiMap;
use crate::set::{Iter, Range};

/// An ordered collection of keys permitting duplicates, backed by the same
/// B-tree index as [`OrderedMultiMap`].
///
/// # Examples
///
/// ```
/// use ordered_collections::OrderedMultiSet;
///
/// let mut bag = OrderedMultiSet::new();
/// for key in [30, 20, 30, 10, 30] {
///     bag.insert(key);
/// }
/// assert_eq!(bag.count(&30), 3);
/// assert_eq!(bag.remove_all(&30), 3);
/// assert_eq!(bag.len(), 2);
/// ```
pub struct OrderedMultiSet<K, C = Natural<K>>
where
    C: Compare<K>,
{
    map: OrderedMultiMap<K, (), C>,
}

impl<K: Ord> OrderedMultiSet<K> {
    /// Makes a new empty multiset ordered by the natural order of its keys.
    pub fn new() -> OrderedMultiSet<K> {
        OrderedMultiSet::with_cmp(natural())
    }
}

impl<K, C> OrderedMultiSet<K, C>
where
    C: Compare<K>,
{
    /// Makes a new empty multiset ordered by the given comparator.
    pub fn with_cmp(cmp: C) -> OrderedMultiSet<K, C> {
        OrderedMultiSet {
            map: OrderedMultiMap::with_cmp(cmp),
        }
    }

    /// Returns a reference to the multiset's comparator.
    pub fn cmp(&self) -> &C {
        self.map.cmp()
    }

    /// Returns the number of keys in the multiset, duplicates included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the multiset contains no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the multiset, removing all keys.
    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Adds a key to the multiset. Always succeeds.
    pub fn insert(&mut self, key: K) {
        self.map.insert(key, ())
    }

    /// Returns true if the multiset contains a key equal to `key`.
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of keys comparing equal to `key`.
    pub fn count(&self, key: &K) -> usize {
        self.map.count(key)
    }

    /// Gets an iterator over the contiguous run of keys comparing equal to
    /// `key`.
    pub fn equal_range(&self, key: &K) -> Range<'_, K> {
        Range(self.map.equal_range(key))
    }

    /// Returns the first key that is not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Option<&K> {
        self.map.lower_bound(key).map(|(k, _)| k)
    }

    /// Returns the first key that is greater than `key`.
    pub fn upper_bound(&self, key: &K) -> Option<&K> {
        self.map.upper_bound(key).map(|(k, _)| k)
    }

    /// Removes one key comparing equal to `key`. Returns whether one was
    /// present.
    pub fn remove_one<Q: ?Sized>(&mut self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
    {
        self.map.remove_one_entry(key).is_some()
    }

    /// Removes every key comparing equal to `key`, returning how many were
    /// removed.
    pub fn remove_all<Q: ?Sized>(&mut self, key: &Q) -> usize
    where
        C: Compare<Q, K>,
    {
        self.map.remove_all(key)
    }

    /// Removes every key inside the given range, returning how many were
    /// removed.
    pub fn remove_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<K>,
    {
        self.map.remove_range(range)
    }

    /// Gets an iterator over the keys of the multiset, in non-decreasing
    /// order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter(self.map.iter())
    }

    /// Gets an iterator over the keys inside the given range, in
    /// non-decreasing order.
    pub fn range<R>(&self, range: R) -> Range<'_, K>
    where
        R: RangeBounds<K>,
    {
        Range(self.map.range(range))
    }
}

impl<K: Ord> Default for OrderedMultiSet<K> {
    fn default() -> OrderedMultiSet<K> {
        OrderedMultiSet::new()
    }
}

impl<K, C> Clone for OrderedMultiSet<K, C>
where
    K: Clone,
    C: Compare<K> + Clone,
{
    fn clone(&self) -> Self {
        OrderedMultiSet {
            map: self.map.clone(),
        }
    }
}

impl<K: Debug, C: Compare<K>> Debug for OrderedMultiSet<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K, C: Compare<K>> IntoIterator for &'a OrderedMultiSet<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K, C: Compare<K>> Extend<K> for OrderedMultiSet<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for OrderedMultiSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> OrderedMultiSet<K> {
        let mut bag = OrderedMultiSet::new();
        bag.extend(iter);
        bag
    }
}
