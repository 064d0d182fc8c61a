//! # seq_drills
//!
//! Small, pure algorithms over integer sequences and strings.
//!
//! ## What's Inside
//!
//! - **Integer sequences**: smallest missing positive, longest run of ones, maximum
//!   subarray sum (Kadane), second-largest distinct value
//! - **Strings**: word-preserving prefix, first non-repeating character
//! - **Counting**: word frequency, topic mentions across reviews, rating bands, all
//!   returned as an ordered [`FrequencyMap`]
//! - **Generic helpers**: index lookup, lowest element, first/last pair, manual reverse
//!   and insertion sort, a [`Countdown`] sequence
//!
//! ## Quick Start
//!
//! ```rust
//! use seq_drills::{max_subarray_sum, smallest_missing_positive, word_preserving_prefix};
//!
//! assert_eq!(smallest_missing_positive(&[1, 3, 6, 4, 1, 2]), 5);
//! assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]).unwrap(), 6);
//!
//! let text = "I believe that people are really good at heart";
//! assert_eq!(word_preserving_prefix(5, text).unwrap(), "I believe");
//! ```
//!
//! ### Counting Mentions
//!
//! ```rust
//! use seq_drills::{topic_occurrences, topics, MatchOptions};
//!
//! let table = topics! {
//!     "delivery" => ["shipping", "arrived"],
//!     "quality" => ["broke", "sturdy"],
//! };
//! let reviews = ["Shipping was slow", "Sturdy and well made", "it broke after it arrived"];
//!
//! let counts = topic_occurrences(&table, &reviews, &MatchOptions::default());
//! assert_eq!(counts.count("delivery"), 2);
//! assert_eq!(counts.count("quality"), 2);
//! ```
//!
//! ## Failure Reporting
//!
//! - Invalid arguments and unmet preconditions return [`Error`] through [`Result`]
//! - "Nothing qualifies" outcomes return `None`, never a sentinel such as `0`
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Inputs are borrowed and never modified
//! - No shared state: every function is safe to call from any thread
//!
//! ## Logging
//!
//! Rejected inputs and counter summaries are reported through the [`log`] facade at
//! `debug` level, per-topic detail at `trace`. The crate never installs a logger.

pub mod collections;
pub mod counting;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod sequence;
pub mod text;

pub use collections::{
    find_index, first_last, insertion_sorted, lowest, reversed, Countdown, CountdownIter,
};
pub use counting::{rating_buckets, topic_occurrences, word_frequency, RatingBucket, Topics};
pub use error::{Error, Result};
pub use map::FrequencyMap;
pub use options::{CaseMatching, MatchMode, MatchOptions};
pub use sequence::{
    max_consecutive_ones, max_subarray_sum, second_largest, smallest_missing_positive,
};
pub use text::{first_unique_char, word_preserving_prefix};
