use std::fmt::{self, Debug};
use std::ops::RangeBounds;

use compare::{natural, Compare, Natural};

use crate::iter;
use crate::map::OrderedMap;

/// An ordered set with unique keys, backed by the same B-tree index as
/// [`OrderedMap`].
///
/// The stored key is the stored value. Keys are immutable while in the
/// set: they are handed out by shared reference only, and changing a key
/// means removing it and inserting the new one.
///
/// # Examples
///
/// ```
/// use ordered_collections::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// for key in [10, 20, 30, 40, 50] {
///     set.insert(key);
/// }
/// set.remove(&30);
///
/// let keys: Vec<_> = set.iter().copied().collect();
/// assert_eq!(keys, [10, 20, 40, 50]);
/// ```
pub struct OrderedSet<K, C = Natural<K>>
where
    C: Compare<K>,
{
    map: OrderedMap<K, (), C>,
}

impl<K: Ord> OrderedSet<K> {
    /// Makes a new empty set ordered by the natural order of its keys.
    pub fn new() -> OrderedSet<K> {
        OrderedSet::with_cmp(natural())
    }
}

impl<K, C> OrderedSet<K, C>
where
    C: Compare<K>,
{
    /// Makes a new empty set ordered by the given comparator.
    pub fn with_cmp(cmp: C) -> OrderedSet<K, C> {
        OrderedSet {
            map: OrderedMap::with_cmp(cmp),
        }
    }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C {
        self.map.cmp()
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all keys.
    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Adds a key to the set. Returns false if an equal key was already
    /// present; the set is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.insert(20));
    /// assert!(!set.insert(20));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        self.map.insert(key, ()).is_none()
    }

    /// Returns true if the set contains a key equal to `key`.
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
    {
        self.map.contains_key(key)
    }

    /// Returns a reference to the stored key equal to `key`, if any.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&K>
    where
        C: Compare<Q, K>,
    {
        self.map.get_key_value(key).map(|(k, _)| k)
    }

    /// Returns the number of keys comparing equal to `key` (0 or 1).
    pub fn count<Q: ?Sized>(&self, key: &Q) -> usize
    where
        C: Compare<Q, K>,
    {
        self.map.count(key)
    }

    /// Removes the key equal to `key` from the set. Returns whether such a
    /// key was present.
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
    {
        self.map.remove(key).is_some()
    }

    /// Removes and returns the stored key equal to `key`, if any.
    pub fn take<Q: ?Sized>(&mut self, key: &Q) -> Option<K>
    where
        C: Compare<Q, K>,
    {
        self.map.remove_entry(key).map(|(k, ())| k)
    }

    /// Removes every key inside the given range, returning how many were
    /// removed.
    pub fn remove_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<K>,
    {
        self.map.remove_range(range)
    }

    /// Gets an iterator over the keys of the set, in sorted order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter(self.map.iter())
    }

    /// Gets an iterator over the keys inside the given range, in sorted
    /// order.
    pub fn range<R>(&self, range: R) -> Range<'_, K>
    where
        R: RangeBounds<K>,
    {
        Range(self.map.range(range))
    }
}

impl<K: Ord> Default for OrderedSet<K> {
    fn default() -> OrderedSet<K> {
        OrderedSet::new()
    }
}

impl<K, C> Clone for OrderedSet<K, C>
where
    K: Clone,
    C: Compare<K> + Clone,
{
    fn clone(&self) -> Self {
        OrderedSet {
            map: self.map.clone(),
        }
    }
}

impl<K: Debug, C: Compare<K>> Debug for OrderedSet<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K, C: Compare<K>> IntoIterator for &'a OrderedSet<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K, C: Compare<K>> Extend<K> for OrderedSet<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for OrderedSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> OrderedSet<K> {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

/// A double-ended iterator over the keys of a set, in sorted order.
#[derive(Clone)]
pub struct Iter<'a, K>(pub(crate) iter::Iter<'a, K, ()>);

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|(k, ())| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.0.next_back().map(|(k, ())| k)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

/// An iterator over the keys of a set that fall inside a key range, in
/// sorted order.
#[derive(Clone)]
pub struct Range<'a, K>(pub(crate) iter::Range<'a, K, ()>);

impl<'a, K> Iterator for Range<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|(k, ())| k)
    }
}
