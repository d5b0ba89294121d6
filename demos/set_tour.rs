//! A tour of `OrderedSet` and `OrderedMultiSet`.
//!
//! Run with `cargo run --example set_tour`.

use std::mem;

use ordered_collections::{OrderedMultiSet, OrderedSet};

fn show_set(name: &str, set: &OrderedSet<i32>) {
    print!("{name}: ");
    for key in set {
        print!("{key} ");
    }
    println!();
}

fn unique_keys() {
    let mut set = OrderedSet::new();
    for key in [10, 20, 30, 40, 50] {
        set.insert(key);
    }
    show_set("fresh", &set);

    if !set.insert(20) {
        println!("20 already present, insert refused");
    }

    if !set.remove(&25) {
        println!("25 not present, nothing erased");
    }
    set.remove(&30);
    show_set("after erasing 30", &set);

    let mut other: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    mem::swap(&mut set, &mut other);
    show_set("after swap", &set);

    print!("descending: ");
    for key in set.iter().rev() {
        print!("{key} ");
    }
    println!();
}

fn duplicate_keys() {
    let mut bag = OrderedMultiSet::new();
    for key in [10, 30, 20, 30, 40, 30, 50] {
        bag.insert(key);
    }

    println!("30 appears {} time(s)", bag.count(&30));

    print!("equal range of 30:");
    for key in bag.equal_range(&30) {
        print!(" {key}");
    }
    println!();

    match (bag.lower_bound(&30), bag.upper_bound(&30)) {
        (Some(lo), Some(hi)) => println!("bounds around 30: [{lo}, {hi})"),
        _ => println!("30 is past the end"),
    }

    bag.remove_all(&30);
    print!("after erasing all 30s:");
    for key in &bag {
        print!(" {key}");
    }
    println!();
}

fn main() {
    unique_keys();
    println!("---");
    duplicate_keys();
}
