//! Ordered associative containers over one shared B-tree index.
//!
//! Four containers, all sitting on the same sorted index:
//!
//! * [`OrderedMap`] — unique keys, each with a value.
//! * [`OrderedMultiMap`] — duplicate keys allowed, equal-key runs keep
//!   insertion order.
//! * [`OrderedSet`] — unique keys, the key is the value.
//! * [`OrderedMultiSet`] — duplicate keys allowed.
//!
//! Every container is parameterized by a comparator from the [`compare`]
//! crate, defaulting to the natural order of the keys. The comparator is
//! fixed at construction and never swapped:
//!
//! ```
//! use compare::{natural, Compare};
//! use ordered_collections::OrderedSet;
//!
//! let mut descending = OrderedSet::with_cmp(natural().rev());
//! descending.extend([10, 30, 20]);
//! let keys: Vec<_> = descending.iter().copied().collect();
//! assert_eq!(keys, [30, 20, 10]);
//! ```
//!
//! Positions into a container are borrowing iterators, not stored handles,
//! so every "iterator used after its entry was erased" scenario is ruled
//! out at compile time. Checked single-key access reports
//! [`Error::KeyNotFound`] instead of vivifying an entry.
//!
//! The containers do no internal locking; share one across threads behind
//! a lock of your choosing.

mod node;
mod search;

pub mod error;
pub mod iter;
pub mod map;
pub mod multimap;
pub mod multiset;
pub mod set;

pub use error::Error;
pub use map::OrderedMap;
pub use multimap::OrderedMultiMap;
pub use multiset::OrderedMultiSet;
pub use set::OrderedSet;
