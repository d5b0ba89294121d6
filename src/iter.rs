//! In-order traversal over the shared tree index.
//!
//! Iterators borrow the container they come from, so the borrow checker
//! rules out every use-after-erase that the position-handle model would
//! otherwise have to police at runtime.

use std::cmp::Ordering;
use std::ops::Bound;
use std::ptr;

use compare::Compare;

use crate::node::{Node, Root};
use crate::search;

// A stack of (node, index) frames encoding an in-order position. When a
// frame surfaces, everything left of `index` in that node (and every edge
// up to and including `index`) has already been visited.
#[derive(Clone)]
struct Frames<'a, K, V> {
    stack: Vec<(&'a Node<K, V>, usize)>,
}

impl<'a, K, V> Frames<'a, K, V> {
    fn new() -> Self {
        Frames { stack: Vec::new() }
    }

    fn push_leftmost(&mut self, mut node: &'a Node<K, V>) {
        loop {
            self.stack.push((node, 0));
            if node.is_leaf() {
                break;
            }
            node = &node.edges[0];
        }
    }

    fn push_rightmost(&mut self, mut node: &'a Node<K, V>) {
        loop {
            self.stack.push((node, node.keys.len()));
            if node.is_leaf() {
                break;
            }
            node = &node.edges[node.edges.len() - 1];
        }
    }

    fn push_from<C>(&mut self, mut node: &'a Node<K, V>, start: Bound<&K>, cmp: &C)
    where
        C: Compare<K>,
    {
        loop {
            let idx = search::start_partition(&node.keys, start, cmp);
            self.stack.push((node, idx));
            if node.is_leaf() {
                break;
            }
            node = &node.edges[idx];
        }
    }

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        while let Some((node, idx)) = self.stack.pop() {
            if idx < node.keys.len() {
                self.stack.push((node, idx + 1));
                if !node.is_leaf() {
                    self.push_leftmost(&node.edges[idx + 1]);
                }
                return Some((&node.keys[idx], &node.vals[idx]));
            }
        }
        None
    }

    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        while let Some((node, idx)) = self.stack.pop() {
            if idx > 0 {
                self.stack.push((node, idx - 1));
                if !node.is_leaf() {
                    self.push_rightmost(&node.edges[idx - 1]);
                }
                return Some((&node.keys[idx - 1], &node.vals[idx - 1]));
            }
        }
        None
    }
}

/// A double-ended iterator over all entries of a container, in ascending
/// key order.
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    front: Frames<'a, K, V>,
    back: Frames<'a, K, V>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: &'a Root<K, V>, len: usize) -> Self {
        let mut front = Frames::new();
        let mut back = Frames::new();
        front.push_leftmost(&root.node);
        back.push_rightmost(&root.node);
        Iter {
            front,
            back,
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.front.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.back.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// An iterator over the entries of a container that fall inside a key
/// range, in ascending key order.
///
/// The end of the range is resolved to a concrete tree position up front,
/// so iteration itself performs no comparisons.
#[derive(Clone)]
pub struct Range<'a, K, V> {
    frames: Frames<'a, K, V>,
    end: Option<&'a K>,
    done: bool,
}

impl<'a, K, V> Range<'a, K, V> {
    /// # Panics
    ///
    /// Panics if the start of the range is greater than the end, or if both
    /// are exclusive bounds on the same key.
    pub(crate) fn new<C>(root: &'a Root<K, V>, start: Bound<&K>, end: Bound<&K>, cmp: &C) -> Self
    where
        C: Compare<K>,
    {
        if let (
            Bound::Included(s) | Bound::Excluded(s),
            Bound::Included(e) | Bound::Excluded(e),
        ) = (start, end)
        {
            match cmp.compare(s, e) {
                Ordering::Greater => panic!("range start is greater than range end"),
                Ordering::Equal => {
                    if matches!(start, Bound::Excluded(_)) && matches!(end, Bound::Excluded(_)) {
                        panic!("range start and end are equal and sides are excluded");
                    }
                }
                Ordering::Less => {}
            }
        }

        let mut frames = Frames::new();
        frames.push_from(&root.node, start, cmp);
        Range {
            frames,
            end: root.node.first_past(end, cmp),
            done: false,
        }
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.done {
            return None;
        }
        match self.frames.next() {
            Some((key, val)) => {
                if let Some(end) = self.end {
                    if ptr::eq(key, end) {
                        self.done = true;
                        return None;
                    }
                }
                Some((key, val))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// A double-ended iterator over the keys of a map.
#[derive(Clone)]
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.0.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// A double-ended iterator over the values of a map.
#[derive(Clone)]
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a V> {
        self.0.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
