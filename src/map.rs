use std::fmt::{self, Debug};
use std::mem;
use std::ops::{Index, RangeBounds};

use compare::{natural, Compare, Natural};

use crate::error::Error;
use crate::iter::{Iter, Keys, Range, Values};
use crate::node::{OnEqual, Placement, Root};
use crate::search;

/// An ordered map with unique keys, backed by a B-tree.
///
/// Entries are kept sorted under a comparator supplied at construction,
/// which defaults to the natural order of the keys. The comparator is
/// stored once and used for the whole lifetime of the map; it is a logic
/// error for a key to be modified in such a way that its ordering relative
/// to any other key, as determined by the comparator, changes while it is
/// in the map. This is normally only possible through `Cell`, `RefCell`,
/// global state, I/O, or unsafe code.
///
/// `insert` never overwrites: inserting an already-present key leaves the
/// map unchanged and hands the rejected pair back. Use
/// [`insert_or_assign`](OrderedMap::insert_or_assign) for overwriting
/// semantics and [`get_or_insert_default`](OrderedMap::get_or_insert_default)
/// for vivifying access.
pub struct OrderedMap<K, V, C = Natural<K>>
where
    C: Compare<K>,
{
    root: Root<K, V>,
    length: usize,
    cmp: C,
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Makes a new empty map ordered by the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn new() -> OrderedMap<K, V> {
        OrderedMap::with_cmp(natural())
    }
}

impl<K, V, C> OrderedMap<K, V, C>
where
    C: Compare<K>,
{
    /// Makes a new empty map ordered by the given comparator.
    ///
    /// Any total order works: a comparator struct, a reversed natural
    /// order, a closure, or a function pointer.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{natural, Compare};
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::with_cmp(natural().rev());
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// map.insert(3, "c");
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [3, 2, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> OrderedMap<K, V, C> {
        OrderedMap {
            root: Root::new(),
            length: 0,
            cmp,
        }
    }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Clears the map, removing all entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = Root::new();
        self.length = 0;
    }

    /// Returns a reference to the value corresponding to the key, or `None`
    /// if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        C: Compare<Q, K>,
    {
        self.root.get(key, &self.cmp).map(|(_, v)| v)
    }

    /// Returns the entry corresponding to the key.
    pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
    where
        C: Compare<Q, K>,
    {
        self.root.get(key, &self.cmp)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        C: Compare<Q, K>,
    {
        self.root.get_mut(key, &self.cmp)
    }

    /// Returns true if the map contains a value for the specified key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
    {
        self.get(key).is_some()
    }

    /// Returns the number of entries whose key compares equal to `key`
    /// (0 or 1).
    pub fn count<Q: ?Sized>(&self, key: &Q) -> usize
    where
        C: Compare<Q, K>,
    {
        usize::from(self.contains_key(key))
    }

    /// Returns a reference to the value for `key`, or
    /// [`Error::KeyNotFound`] if the key is absent. Never inserts.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert('z', 200);
    /// assert_eq!(map.at(&'z'), Ok(&200));
    /// assert_eq!(map.at(&'q'), Err(Error::KeyNotFound));
    /// ```
    pub fn at<Q: ?Sized>(&self, key: &Q) -> Result<&V, Error>
    where
        C: Compare<Q, K>,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Mutable variant of [`at`](OrderedMap::at).
    pub fn at_mut<Q: ?Sized>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        C: Compare<Q, K>,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Inserts a key-value pair, refusing to overwrite. Returns `None` on
    /// success; if the key is already present the map is left unchanged and
    /// the rejected pair is handed back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert('z', 200), None);
    /// assert_eq!(map.insert('z', 500), Some(('z', 500)));
    /// assert_eq!(map.get(&'z'), Some(&200));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        match self.root.insert(key, value, &self.cmp, OnEqual::Reject) {
            Placement::Inserted(_) => {
                self.length += 1;
                None
            }
            Placement::Occupied { key, value, .. } => Some((key, value)),
        }
    }

    /// Inserts a key-value pair, overwriting the value if the key is
    /// already present. Returns the previous value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert_or_assign(37, "a"), None);
    /// assert_eq!(map.insert_or_assign(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Option<V> {
        match self.root.insert(key, value, &self.cmp, OnEqual::Reject) {
            Placement::Inserted(_) => {
                self.length += 1;
                None
            }
            Placement::Occupied { slot, value, .. } => Some(mem::replace(slot, value)),
        }
    }

    /// Returns a mutable reference to the value for `key`, first inserting
    /// a default value if the key is absent.
    ///
    /// This is the vivifying indexed access: a lookup through it is a
    /// mutation when the key is missing. Callers that want a read-only
    /// lookup must use [`get`](OrderedMap::get) or [`at`](OrderedMap::at).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map: OrderedMap<char, i32> = OrderedMap::new();
    /// *map.get_or_insert_default('a') += 10;
    /// assert_eq!(map.get(&'a'), Some(&10));
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        match self.root.insert(key, V::default(), &self.cmp, OnEqual::Reject) {
            Placement::Inserted(slot) => {
                self.length += 1;
                slot
            }
            Placement::Occupied { slot, .. } => slot,
        }
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        C: Compare<Q, K>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry for `key`, returning the stored key and value.
    pub fn remove_entry<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
    {
        let removed = self.root.remove(key, &self.cmp);
        if removed.is_some() {
            self.length -= 1;
        }
        removed
    }

    /// Removes every entry whose key falls inside the given range,
    /// returning how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, i32> = (0..10).map(|i| (i, i)).collect();
    /// assert_eq!(map.remove_range(3..7), 4);
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [0, 1, 2, 7, 8, 9]);
    /// ```
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

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(3, "c");
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let entries: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.length)
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Gets an iterator over the values of the map, in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Gets an iterator over the entries whose keys fall inside the given
    /// range, sorted by key.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than the range end, or if both
    /// are exclusive bounds on the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = (0..10).map(|i| (i, i * 10)).collect();
    /// let picked: Vec<_> = map.range(4..7).map(|(&k, _)| k).collect();
    /// assert_eq!(picked, [4, 5, 6]);
    /// ```
    pub fn range<R>(&self, range: R) -> Range<'_, K, V>
    where
        R: RangeBounds<K>,
    {
        Range::new(&self.root, range.start_bound(), range.end_bound(), &self.cmp)
    }
}

impl<K, V, Q: ?Sized, C> Index<&Q> for OrderedMap<K, V, C>
where
    C: Compare<K> + Compare<Q, K>,
{
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map. Indexing never inserts;
    /// use [`get_or_insert_default`](OrderedMap::get_or_insert_default) for
    /// vivifying access.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V> {
    fn default() -> OrderedMap<K, V> {
        OrderedMap::new()
    }
}

impl<K, V, C> Clone for OrderedMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Compare<K> + Clone,
{
    fn clone(&self) -> Self {
        OrderedMap {
            root: self.root.clone(),
            length: self.length,
            cmp: self.cmp.clone(),
        }
    }
}

impl<K: Debug, V: Debug, C: Compare<K>> Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C: Compare<K>> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_or_assign(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> OrderedMap<K, V> {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}
