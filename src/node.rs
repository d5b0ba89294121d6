// The shared ordered index behind all four containers. Nodes own their
// children outright:
//
// ```
// struct Node<K, V> {
//     keys: [K; 2 * B - 1],
//     vals: [V; 2 * B - 1],
//     edges: if internal { [Box<Node<K, V>>; 2 * B] } else { [] },
// }
// ```
//
// Insertion makes a single pass down the tree, preemptively splitting any
// full child before descending into it, so the final leaf insert always
// fits and the placement can hand back a live reference to the stored
// value. Removal is the usual rotate-or-merge rebalancing on the way back
// up, with an internal separator replaced by its in-subtree predecessor.

use std::cmp::Ordering;
use std::mem;
use std::ops::Bound;

use compare::Compare;

use crate::search::{self, SearchResult};

const B: usize = 6;
const CAPACITY: usize = 2 * B - 1;
const MIN_LEN: usize = B - 1;

#[derive(Clone)]
pub struct Node<K, V> {
    pub keys: Vec<K>,
    pub vals: Vec<V>,
    pub edges: Vec<Box<Node<K, V>>>,
}

/// What an insertion should do when it meets a key that compares equal.
#[derive(Clone, Copy)]
pub enum OnEqual {
    /// Leave the tree untouched and hand the pair back (unique containers).
    Reject,
    /// Place the new entry after the existing equal run (multi containers).
    After,
}

pub enum Placement<'a, K, V> {
    Inserted(&'a mut V),
    Occupied { slot: &'a mut V, key: K, value: V },
}

impl<K, V> Node<K, V> {
    fn new() -> Self {
        Node {
            keys: Vec::new(),
            vals: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    fn is_full(&self) -> bool {
        self.keys.len() == CAPACITY
    }

    fn entry(&self, idx: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(idx)?, self.vals.get(idx)?))
    }

    /// Splits a full node in half, returning the middle entry and the new
    /// right node.
    fn split(&mut self) -> (K, V, Box<Node<K, V>>) {
        let mid = self.keys.len() / 2;
        let key = self.keys.remove(mid);
        let val = self.vals.remove(mid);

        let mut right = Node::new();
        right.keys = self.keys.split_off(mid);
        right.vals = self.vals.split_off(mid);
        if !self.is_leaf() {
            right.edges = self.edges.split_off(mid + 1);
        }

        (key, val, Box::new(right))
    }

    fn split_edge(&mut self, idx: usize) {
        let (key, val, right) = self.edges[idx].split();
        self.keys.insert(idx, key);
        self.vals.insert(idx, val);
        self.edges.insert(idx + 1, right);
    }

    // Precondition: self is not full.
    fn insert_nonfull<'a, C>(
        &'a mut self,
        key: K,
        value: V,
        cmp: &C,
        on_equal: OnEqual,
    ) -> Placement<'a, K, V>
    where
        C: Compare<K>,
    {
        let mut idx = match on_equal {
            OnEqual::Reject => match search::search_linear(&self.keys, &key, cmp) {
                SearchResult::Found(idx) => {
                    return Placement::Occupied {
                        slot: &mut self.vals[idx],
                        key,
                        value,
                    }
                }
                SearchResult::GoDown(idx) => idx,
            },
            OnEqual::After => search::upper_bound_linear(&self.keys, &key, cmp),
        };

        if self.is_leaf() {
            self.keys.insert(idx, key);
            self.vals.insert(idx, value);
            return Placement::Inserted(&mut self.vals[idx]);
        }

        if self.edges[idx].is_full() {
            self.split_edge(idx);
            // The separator that moved up may change where the key belongs.
            match cmp.compare(&key, &self.keys[idx]) {
                Ordering::Less => {}
                Ordering::Equal => match on_equal {
                    OnEqual::Reject => {
                        return Placement::Occupied {
                            slot: &mut self.vals[idx],
                            key,
                            value,
                        }
                    }
                    OnEqual::After => idx += 1,
                },
                Ordering::Greater => idx += 1,
            }
        }

        self.edges[idx].insert_nonfull(key, value, cmp, on_equal)
    }

    pub fn get<Q: ?Sized, C>(&self, key: &Q, cmp: &C) -> Option<(&K, &V)>
    where
        C: Compare<Q, K>,
    {
        match search::search_linear(&self.keys, key, cmp) {
            SearchResult::Found(idx) => Some((&self.keys[idx], &self.vals[idx])),
            SearchResult::GoDown(idx) => {
                if self.is_leaf() {
                    None
                } else {
                    self.edges[idx].get(key, cmp)
                }
            }
        }
    }

    pub fn get_mut<Q: ?Sized, C>(&mut self, key: &Q, cmp: &C) -> Option<&mut V>
    where
        C: Compare<Q, K>,
    {
        match search::search_linear(&self.keys, key, cmp) {
            SearchResult::Found(idx) => Some(&mut self.vals[idx]),
            SearchResult::GoDown(idx) => {
                if self.is_leaf() {
                    None
                } else {
                    self.edges[idx].get_mut(key, cmp)
                }
            }
        }
    }

    /// First entry inside a range starting at `start`.
    pub fn first_from<C>(&self, start: Bound<&K>, cmp: &C) -> Option<(&K, &V)>
    where
        C: Compare<K>,
    {
        let idx = search::start_partition(&self.keys, start, cmp);
        if self.is_leaf() {
            self.entry(idx)
        } else {
            self.edges[idx]
                .first_from(start, cmp)
                .or_else(|| self.entry(idx))
        }
    }

    /// First key past a range ending at `end`.
    pub fn first_past<C>(&self, end: Bound<&K>, cmp: &C) -> Option<&K>
    where
        C: Compare<K>,
    {
        let idx = search::end_partition(&self.keys, end, cmp);
        if self.is_leaf() {
            self.keys.get(idx)
        } else {
            self.edges[idx]
                .first_past(end, cmp)
                .or_else(|| self.keys.get(idx))
        }
    }

    fn remove<Q: ?Sized, C>(&mut self, key: &Q, cmp: &C) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
    {
        match search::search_linear(&self.keys, key, cmp) {
            SearchResult::Found(idx) => Some(self.remove_kv(idx)),
            SearchResult::GoDown(idx) => {
                if self.is_leaf() {
                    return None;
                }
                let removed = self.edges[idx].remove(key, cmp);
                if removed.is_some() {
                    self.fix_edge(idx);
                }
                removed
            }
        }
    }

    /// Removes the first entry inside a range starting at `start`, if any.
    fn remove_first_from<C>(&mut self, start: Bound<&K>, cmp: &C) -> Option<(K, V)>
    where
        C: Compare<K>,
    {
        let idx = search::start_partition(&self.keys, start, cmp);
        if self.is_leaf() {
            if idx < self.keys.len() {
                Some((self.keys.remove(idx), self.vals.remove(idx)))
            } else {
                None
            }
        } else {
            match self.edges[idx].remove_first_from(start, cmp) {
                Some(removed) => {
                    self.fix_edge(idx);
                    Some(removed)
                }
                // Nothing qualified below the separator; the separator itself
                // is the first entry in range, if it exists.
                None if idx < self.keys.len() => Some(self.remove_kv(idx)),
                None => None,
            }
        }
    }

    fn remove_kv(&mut self, idx: usize) -> (K, V) {
        if self.is_leaf() {
            (self.keys.remove(idx), self.vals.remove(idx))
        } else {
            // Replace the separator with its predecessor from the left
            // subtree, then rebalance that subtree if it ran dry.
            let (key, val) = self.edges[idx].remove_last();
            let key = mem::replace(&mut self.keys[idx], key);
            let val = mem::replace(&mut self.vals[idx], val);
            self.fix_edge(idx);
            (key, val)
        }
    }

    fn remove_last(&mut self) -> (K, V) {
        if self.is_leaf() {
            let idx = self.keys.len() - 1;
            (self.keys.remove(idx), self.vals.remove(idx))
        } else {
            let idx = self.edges.len() - 1;
            let removed = self.edges[idx].remove_last();
            self.fix_edge(idx);
            removed
        }
    }

    /// Restores the minimum-fill invariant of `edges[idx]` after a removal
    /// below it.
    fn fix_edge(&mut self, idx: usize) {
        if self.edges[idx].keys.len() >= MIN_LEN {
            return;
        }
        if idx > 0 && self.edges[idx - 1].keys.len() > MIN_LEN {
            self.rotate_right(idx - 1);
        } else if idx + 1 < self.edges.len() && self.edges[idx + 1].keys.len() > MIN_LEN {
            self.rotate_left(idx);
        } else if idx > 0 {
            self.merge(idx - 1);
        } else {
            self.merge(idx);
        }
    }

    // Moves the last entry of edges[sep] up to the separator and the old
    // separator down into edges[sep + 1].
    fn rotate_right(&mut self, sep: usize) {
        let last = self.edges[sep].keys.len() - 1;
        let key = self.edges[sep].keys.remove(last);
        let val = self.edges[sep].vals.remove(last);
        let key = mem::replace(&mut self.keys[sep], key);
        let val = mem::replace(&mut self.vals[sep], val);
        let moved_edge = if self.edges[sep].is_leaf() {
            None
        } else {
            Some(self.edges[sep].edges.remove(last + 1))
        };

        let right = &mut self.edges[sep + 1];
        right.keys.insert(0, key);
        right.vals.insert(0, val);
        if let Some(edge) = moved_edge {
            right.edges.insert(0, edge);
        }
    }

    fn rotate_left(&mut self, sep: usize) {
        let key = self.edges[sep + 1].keys.remove(0);
        let val = self.edges[sep + 1].vals.remove(0);
        let moved_edge = if self.edges[sep + 1].is_leaf() {
            None
        } else {
            Some(self.edges[sep + 1].edges.remove(0))
        };
        let key = mem::replace(&mut self.keys[sep], key);
        let val = mem::replace(&mut self.vals[sep], val);

        let left = &mut self.edges[sep];
        left.keys.push(key);
        left.vals.push(val);
        if let Some(edge) = moved_edge {
            left.edges.push(edge);
        }
    }

    // Folds the separator and edges[sep + 1] into edges[sep]. Only called
    // when the combined length fits in one node.
    fn merge(&mut self, sep: usize) {
        let key = self.keys.remove(sep);
        let val = self.vals.remove(sep);
        let mut right = self.edges.remove(sep + 1);

        let left = &mut self.edges[sep];
        left.keys.push(key);
        left.vals.push(val);
        left.keys.append(&mut right.keys);
        left.vals.append(&mut right.vals);
        left.edges.append(&mut right.edges);
    }
}

#[derive(Clone)]
pub struct Root<K, V> {
    pub node: Box<Node<K, V>>,
}

impl<K, V> Root<K, V> {
    pub fn new() -> Self {
        Root {
            node: Box::new(Node::new()),
        }
    }

    pub fn insert<'a, C>(
        &'a mut self,
        key: K,
        value: V,
        cmp: &C,
        on_equal: OnEqual,
    ) -> Placement<'a, K, V>
    where
        C: Compare<K>,
    {
        if self.node.is_full() {
            // Grow a new root above the old one, then split the old root as
            // its only edge.
            let old = mem::replace(&mut self.node, Box::new(Node::new()));
            self.node.edges.push(old);
            self.node.split_edge(0);
        }
        self.node.insert_nonfull(key, value, cmp, on_equal)
    }

    pub fn remove<Q: ?Sized, C>(&mut self, key: &Q, cmp: &C) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
    {
        let removed = self.node.remove(key, cmp);
        if removed.is_some() {
            self.shrink();
        }
        removed
    }

    pub fn remove_first_from<C>(&mut self, start: Bound<&K>, cmp: &C) -> Option<(K, V)>
    where
        C: Compare<K>,
    {
        let removed = self.node.remove_first_from(start, cmp);
        if removed.is_some() {
            self.shrink();
        }
        removed
    }

    fn shrink(&mut self) {
        if self.node.keys.is_empty() && !self.node.is_leaf() {
            let child = self.node.edges.remove(0);
            self.node = child;
        }
    }

    pub fn get<Q: ?Sized, C>(&self, key: &Q, cmp: &C) -> Option<(&K, &V)>
    where
        C: Compare<Q, K>,
    {
        self.node.get(key, cmp)
    }

    pub fn get_mut<Q: ?Sized, C>(&mut self, key: &Q, cmp: &C) -> Option<&mut V>
    where
        C: Compare<Q, K>,
    {
        self.node.get_mut(key, cmp)
    }

    pub fn first_from<C>(&self, start: Bound<&K>, cmp: &C) -> Option<(&K, &V)>
    where
        C: Compare<K>,
    {
        self.node.first_from(start, cmp)
    }
}
