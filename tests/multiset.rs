use ordered_collections::OrderedMultiSet;

fn sample() -> OrderedMultiSet<i32> {
    let mut bag = OrderedMultiSet::new();
    for key in [10, 30, 20, 30, 40, 30, 50] {
        bag.insert(key);
    }
    bag
}

#[test]
fn test_duplicates_counted() {
    let bag = sample();
    assert_eq!(bag.len(), 7);
    assert_eq!(bag.count(&30), 3);
    assert_eq!(bag.count(&10), 1);
    assert_eq!(bag.count(&25), 0);
    assert!(bag.contains(&30));
    assert!(!bag.contains(&25));
}

#[test]
fn test_iter_non_decreasing() {
    let bag = sample();
    let keys: Vec<_> = bag.iter().copied().collect();
    assert_eq!(keys, [10, 20, 30, 30, 30, 40, 50]);
}

#[test]
fn test_equal_range() {
    let bag = sample();
    let run: Vec<_> = bag.equal_range(&30).copied().collect();
    assert_eq!(run, [30, 30, 30]);

    let empty: Vec<_> = bag.equal_range(&35).collect();
    assert!(empty.is_empty());
}

#[test]
fn test_lower_and_upper_bound() {
    let bag = sample();
    assert_eq!(bag.lower_bound(&30), Some(&30));
    assert_eq!(bag.upper_bound(&30), Some(&40));
    assert_eq!(bag.lower_bound(&35), Some(&40));
    assert_eq!(bag.upper_bound(&50), None);
}

#[test]
fn test_remove_one() {
    let mut bag = sample();
    assert!(bag.remove_one(&30));
    assert_eq!(bag.count(&30), 2);
    assert!(bag.remove_one(&30));
    assert!(bag.remove_one(&30));
    assert!(!bag.remove_one(&30));
    assert_eq!(bag.count(&30), 0);
    assert_eq!(bag.len(), 4);
}

#[test]
fn test_remove_all() {
    let mut bag = sample();
    assert_eq!(bag.remove_all(&30), 3);
    assert_eq!(bag.remove_all(&30), 0);
    let keys: Vec<_> = bag.iter().copied().collect();
    assert_eq!(keys, [10, 20, 40, 50]);
}

#[test]
fn test_remove_range() {
    let mut bag = sample();
    assert_eq!(bag.remove_range(20..=30), 4);
    let keys: Vec<_> = bag.iter().copied().collect();
    assert_eq!(keys, [10, 40, 50]);
}

#[test]
fn test_range() {
    let bag = sample();
    let mid: Vec<_> = bag.range(20..40).copied().collect();
    assert_eq!(mid, [20, 30, 30, 30]);
}

#[test]
fn test_reverse_iteration() {
    let bag = sample();
    let backward: Vec<_> = bag.iter().rev().copied().collect();
    assert_eq!(backward, [50, 40, 30, 30, 30, 20, 10]);
}
