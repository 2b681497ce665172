//! Standalone demo: time repeated ordered-map insertion.
//!
//! Run with `cargo run --release --bin timeit-demo`.

use std::collections::BTreeMap;

fn main() {
    let mut map = BTreeMap::new();
    timeit::timeit(|| {
        map.clear();
        for i in 0..50 {
            map.insert(i, i);
        }
    });
}
