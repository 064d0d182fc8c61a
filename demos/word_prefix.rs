//! Word-preserving prefixes and the first non-repeating character.
//!
//! Run with: cargo run --example word_prefix

use seq_drills::{first_unique_char, word_preserving_prefix};

fn main() {
    let quote = "I believe that people are really good at heart";

    for index in [5, 20, 200, -1] {
        match word_preserving_prefix(index, quote) {
            Ok(prefix) => println!("index {index:>4}: {prefix:?}"),
            Err(err) => println!("index {index:>4}: {err}"),
        }
    }

    for text in ["SimpleSam", "swiss", "aabb"] {
        match first_unique_char(text) {
            Some(c) => println!("first unique character of {text:?} is {c:?}"),
            None => println!("every character of {text:?} repeats"),
        }
    }
}
