//! Compare integer-to-string idioms: fresh `to_string` allocations against
//! `write!` into a reused buffer.
//!
//! Run with `cargo run --release --bin string-format`.

use std::fmt::Write;

use colored::Colorize;
use timeit::{black_box, Reporter};

fn main() {
    println!("{}", "i32::to_string():".bold());
    Reporter::new().run(|| {
        for i in 0..50 {
            black_box(i.to_string());
        }
    });

    println!("{}", "write! into a reused String:".bold());
    let mut buf = String::new();
    Reporter::new().run(|| {
        for i in 0..50 {
            buf.clear();
            let _ = write!(buf, "{}", i);
            black_box(buf.len());
        }
    });
}
