//! Compare two ordered-map insertion idioms: plain `insert` against
//! `entry().or_insert()`.
//!
//! The key order is shuffled once, outside the measured closures, so both
//! subjects see the same access pattern and no RNG cost lands inside the
//! measured region.
//!
//! Run with `cargo run --release --bin map-insert`.

use std::collections::BTreeMap;

use colored::Colorize;
use rand::seq::SliceRandom;
use timeit::{Comparator, Reporter};

fn main() {
    let mut keys: Vec<u32> = (0..50).collect();
    keys.shuffle(&mut rand::rng());

    let mut map = BTreeMap::new();
    println!("{}", "BTreeMap::insert:".bold());
    Reporter::new().run(|| {
        map.clear();
        for &k in &keys {
            map.insert(k, k);
        }
    });

    println!("{}", "BTreeMap::entry().or_insert():".bold());
    Reporter::new().run(|| {
        map.clear();
        for &k in &keys {
            map.entry(k).or_insert(k);
        }
    });

    println!("{}", "insert vs entry:".bold());
    let mut m1 = BTreeMap::new();
    let mut m2 = BTreeMap::new();
    Comparator::new().run(
        || {
            m1.clear();
            for &k in &keys {
                m1.insert(k, k);
            }
        },
        || {
            m2.clear();
            for &k in &keys {
                m2.entry(k).or_insert(k);
            }
        },
    );
}
