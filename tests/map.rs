use compare::{natural, Compare};
use ordered_collections::{Error, OrderedMap};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn test_basic_small() {
    let mut map = OrderedMap::new();
    assert_eq!(map.get(&1), None);
    assert_eq!(map.insert_or_assign(1, 1), None);
    assert_eq!(map.get(&1), Some(&1));
    assert_eq!(map.insert_or_assign(1, 2), Some(1));
    assert_eq!(map.get(&1), Some(&2));
    assert_eq!(map.insert_or_assign(2, 4), None);
    assert_eq!(map.get(&2), Some(&4));
}

#[test]
fn test_basic_large() {
    let mut map = OrderedMap::new();
    let size = 10000;
    assert_eq!(map.len(), 0);

    for i in 0..size {
        assert_eq!(map.insert(i, 10 * i), None);
        assert_eq!(map.len(), i + 1);
    }

    for i in 0..size {
        assert_eq!(map.get(&i), Some(&(i * 10)));
    }

    for i in size..size * 2 {
        assert_eq!(map.get(&i), None);
    }

    for i in 0..size {
        assert_eq!(map.insert_or_assign(i, 100 * i), Some(10 * i));
        assert_eq!(map.len(), size);
    }

    for i in 0..size {
        assert_eq!(map.get(&i), Some(&(i * 100)));
    }

    for i in 0..size {
        assert_eq!(map.remove(&i), Some(100 * i));
        assert_eq!(map.len(), size - i - 1);
    }
    assert!(map.is_empty());
}

#[test]
fn test_rand_large() {
    let n: usize = 500;
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut map = OrderedMap::new();
    let mut log = Vec::new();

    for _ in 0..n {
        let i = rng.random_range(0..2 * n);
        if !map.contains_key(&i) {
            log.push(i);
        }
        map.insert_or_assign(i, i);
    }

    for i in log {
        assert_eq!(map.get(&i).copied(), Some(i));
    }
}

#[test]
fn test_iter_sorted() {
    let size = 10000;
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let mut map = OrderedMap::new();
    let mut log = Vec::new();
    for _ in 0..size {
        let key: u64 = rng.random();
        let val: u64 = rng.random();
        if !map.contains_key(&key) {
            log.push((key, val));
        }
        map.insert(key, val);
    }
    log.sort();

    let forward: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(forward, log);

    let mut backward: Vec<_> = map.iter().rev().map(|(&k, &v)| (k, v)).collect();
    backward.reverse();
    assert_eq!(backward, log);
}

#[test]
fn test_iter_strictly_increasing() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut map = OrderedMap::new();
    for _ in 0..2000 {
        let key = rng.random_range(0..500u32);
        map.insert(key, key);
    }
    let keys: Vec<_> = map.keys().copied().collect();
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_unique_insert_keeps_first_value() {
    let mut map = OrderedMap::new();
    assert_eq!(map.insert('a', 100), None);
    assert_eq!(map.insert('z', 200), None);

    let rejected = map.insert('z', 500);
    assert_eq!(rejected, Some(('z', 500)));
    assert_eq!(map.at(&'z'), Ok(&200));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_at_reports_missing_key() {
    let mut map = OrderedMap::new();
    map.insert('a', 1);
    assert_eq!(map.at(&'b'), Err(Error::KeyNotFound));
    assert_eq!(map.at_mut(&'b'), Err(Error::KeyNotFound));
    // the failed lookups must not have vivified anything
    assert_eq!(map.len(), 1);
}

#[test]
fn test_get_or_insert_default_vivifies() {
    let mut map: OrderedMap<&str, i64> = OrderedMap::new();
    *map.get_or_insert_default("alex") = 18800000000;
    *map.get_or_insert_default("john") = 18811111111;
    assert_eq!(map.len(), 2);

    // present key: no new entry, same slot
    *map.get_or_insert_default("alex") += 1;
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"alex"), Some(&18800000001));

    // absent key vivifies a default
    assert_eq!(*map.get_or_insert_default("tom"), 0);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_remove_then_find_misses() {
    let mut map = OrderedMap::new();
    for i in 0..100 {
        map.insert(i, i * 2);
    }
    assert_eq!(map.remove(&40), Some(80));
    assert_eq!(map.get(&40), None);
    assert_eq!(map.count(&40), 0);
    assert_eq!(map.remove(&40), None);
    assert_eq!(map.len(), 99);
}

#[test]
fn test_remove_entry_returns_stored_key() {
    let mut map = OrderedMap::new();
    map.insert("luke".to_string(), 3);
    assert_eq!(
        map.remove_entry(&"luke".to_string()),
        Some(("luke".to_string(), 3))
    );
}

#[test]
fn test_remove_range() {
    let mut map: OrderedMap<i32, i32> = (0..100).map(|i| (i, i)).collect();
    assert_eq!(map.remove_range(20..40), 20);
    assert_eq!(map.len(), 80);
    assert!(!map.contains_key(&20));
    assert!(!map.contains_key(&39));
    assert!(map.contains_key(&19));
    assert!(map.contains_key(&40));

    // unbounded tail, like erasing from a position to end()
    assert_eq!(map.remove_range(90..), 10);
    assert_eq!(map.len(), 70);
    let keys: Vec<_> = map.keys().copied().collect();
    let expected: Vec<_> = (0..20).chain(40..90).collect();
    assert_eq!(keys, expected);

    // empty span removes nothing
    assert_eq!(map.remove_range(25..30), 0);
}

#[test]
fn test_range_query() {
    let map: OrderedMap<i32, i32> = (0..100).map(|i| (i, i * 10)).collect();
    let picked: Vec<_> = map.range(10..=12).map(|(&k, &v)| (k, v)).collect();
    assert_eq!(picked, [(10, 100), (11, 110), (12, 120)]);

    let none: Vec<_> = map.range(200..300).collect();
    assert!(none.is_empty());
}

#[test]
#[should_panic(expected = "range start is greater than range end")]
fn test_inverted_range_panics() {
    let map: OrderedMap<i32, i32> = (0..10).map(|i| (i, i)).collect();
    let _ = map.range(7..3);
}

#[test]
fn test_reversed_comparator() {
    let mut map = OrderedMap::with_cmp(natural().rev());
    for i in [5, 1, 4, 2, 3] {
        map.insert(i, i * 10);
    }
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [5, 4, 3, 2, 1]);
}

#[test]
fn test_fn_comparator() {
    // even keys before odd ones, ascending within each class
    let mut map = OrderedMap::with_cmp(|a: &u32, b: &u32| (a % 2, a).cmp(&(b % 2, b)));
    for i in 0..7 {
        map.insert(i, ());
    }
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [0, 2, 4, 6, 1, 3, 5]);
}

#[test]
fn test_clone_is_independent() {
    let mut first = OrderedMap::new();
    for i in 0..50 {
        first.insert(i, i);
    }
    let second = first.clone();
    first.clear();
    assert!(first.is_empty());
    assert_eq!(second.len(), 50);
    assert_eq!(second.get(&25), Some(&25));
}

#[test]
fn test_clear() {
    let mut map = OrderedMap::new();
    for i in 0..1000 {
        map.insert(i, i);
    }
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);
    map.insert(1, 1);
    assert_eq!(map.len(), 1);
}
