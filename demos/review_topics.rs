//! Counting topic mentions, word frequencies and rating bands.
//!
//! Run with: cargo run --example review_topics

use seq_drills::{
    rating_buckets, topic_occurrences, topics, word_frequency, CaseMatching, MatchOptions,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let table = topics! {
        "battery life" => ["charge", "power"],
        "screen" => ["display"],
        "price" => ["cost", "cheap"],
    };
    let reviews = [
        "Battery Life is amazing and the display is sharp",
        "did not hold a charge, and the cost was high",
        "SCREEN cracked in a week",
        "cheap and cheerful",
    ];

    let narrow = topic_occurrences(&table, &reviews, &MatchOptions::default());
    println!("exact or capitalized: {}", serde_json::to_string(&narrow)?);

    let folded = MatchOptions::new().with_case_matching(CaseMatching::Insensitive);
    let wide = topic_occurrences(&table, &reviews, &folded);
    println!("case insensitive:     {}", serde_json::to_string(&wide)?);

    let words = word_frequency(reviews.iter().flat_map(|r| r.split_whitespace()));
    for (word, count) in words.into_sorted().into_iter().take(3) {
        println!("{word}: {count}");
    }

    let ratings = [4.0, 8.5, 9.5, 2.0, 6.0, 3.0, 5.5, 7.0, 2.8, 9.8, 5.9, 1.5];
    for (bucket, count) in &rating_buckets(&ratings) {
        println!("{bucket}: {count}");
    }

    Ok(())
}
