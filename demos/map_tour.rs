//! A tour of `OrderedMap` and `OrderedMultiMap`.
//!
//! Run with `cargo run --example map_tour`.

use ordered_collections::{OrderedMap, OrderedMultiMap};

fn show_map(name: &str, map: &OrderedMap<char, i32>) {
    print!("{name}: ");
    for (k, v) in map {
        print!("({k}, {v}) ");
    }
    println!();
}

fn unique_keys() {
    let mut map = OrderedMap::new();
    map.insert('a', 100);
    map.insert('z', 200);
    show_map("fresh", &map);

    // a second insert under an equal key is rejected, first value wins
    if let Some((key, value)) = map.insert('z', 500) {
        println!("insert of ({key}, {value}) failed, kept {}", map[&'z']);
    }
    show_map("after rejected insert", &map);
    println!("entries: {}", map.len());
}

fn phone_directory() {
    let mut directory: OrderedMap<&str, i64> = OrderedMap::new();

    // vivifying access: absent names spring into existence
    *directory.get_or_insert_default("alex") = 18_858_882_300;
    *directory.get_or_insert_default("john") = 18_911_112_345;
    *directory.get_or_insert_default("luke") = 13_333_567_890;

    for (name, number) in &directory {
        println!("{name}: {number}");
    }

    directory.remove(&"john");
    println!("after erasing john, {} entries remain", directory.len());

    match directory.at(&"john") {
        Ok(number) => println!("john: {number}"),
        Err(err) => println!("looking up john: {err}"),
    }
}

fn duplicate_keys() {
    let mut scores = OrderedMultiMap::new();
    for (subject, score) in [
        ('a', 10),
        ('b', 20),
        ('b', 30),
        ('b', 40),
        ('c', 50),
        ('c', 60),
        ('d', 60),
    ] {
        scores.insert(subject, score);
    }

    for subject in ['a', 'b', 'c', 'd', 'e'] {
        print!("{subject} appears {} time(s):", scores.count(&subject));
        for (_, score) in scores.equal_range(&subject) {
            print!(" {score}");
        }
        println!();
    }

    scores.remove_all(&'b');
    println!("after erasing all of b: {} entries", scores.len());
}

fn main() {
    unique_keys();
    println!("---");
    phone_directory();
    println!("---");
    duplicate_keys();
}
