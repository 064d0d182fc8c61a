//! Algorithms over integer sequences.
//!
//! Every function borrows its input and leaves it untouched. Functions that need a
//! reordered view (such as [`smallest_missing_positive`]) work on a private copy.

use crate::error::{Error, Result};

/// Returns the smallest integer greater than zero that does not occur in `values`.
///
/// Non-positive values are ignored and duplicates are harmless. An empty or
/// all-negative input yields `1`. Runs in O(n log n).
///
/// # Examples
///
/// ```rust
/// use seq_drills::smallest_missing_positive;
///
/// assert_eq!(smallest_missing_positive(&[1, 3, 6, 4, 1, 2]), 5);
/// assert_eq!(smallest_missing_positive(&[1, 2, 3]), 4);
/// assert_eq!(smallest_missing_positive(&[-1, -3]), 1);
/// ```
#[must_use]
pub fn smallest_missing_positive(values: &[i64]) -> i64 {
    let mut positives: Vec<i64> = values.iter().copied().filter(|&v| v > 0).collect();
    positives.sort_unstable();

    let mut candidate = 1;
    for value in positives {
        if value > candidate {
            return candidate;
        }
        // value <= candidate here, so a repeated value maps to the same candidate.
        candidate = value.saturating_add(1);
    }
    candidate
}

/// Returns the length of the longest run of consecutive `1`s.
///
/// Any value other than `1`, not only `0`, ends a run.
///
/// # Examples
///
/// ```rust
/// use seq_drills::max_consecutive_ones;
///
/// assert_eq!(max_consecutive_ones(&[0, 1, 3, 1, 1, 1, 0, 1, 1, 1, 1, 0]), 4);
/// assert_eq!(max_consecutive_ones(&[]), 0);
/// ```
#[must_use]
pub fn max_consecutive_ones(values: &[i64]) -> usize {
    let mut streak = 0;
    let mut longest = 0;
    for &value in values {
        if value == 1 {
            streak += 1;
            longest = longest.max(streak);
        } else {
            streak = 0;
        }
    }
    longest
}

/// Returns the largest sum of any contiguous, non-empty run of `values` (Kadane's algorithm).
///
/// An all-negative input yields its least negative element.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice and [`Error::Overflow`] when a running
/// sum leaves the range of `i64`.
///
/// # Examples
///
/// ```rust
/// use seq_drills::max_subarray_sum;
///
/// assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Ok(6));
/// assert_eq!(max_subarray_sum(&[5]), Ok(5));
/// assert_eq!(max_subarray_sum(&[-8, -3, -6]), Ok(-3));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn max_subarray_sum(values: &[i64]) -> Result<i64> {
    const OPERATION: &str = "max_subarray_sum";

    if values.is_empty() {
        log::debug!("{OPERATION}: rejected empty input");
        return Err(Error::empty_input(OPERATION));
    }

    let mut best = i64::MIN;
    let mut current = 0i64;
    for &value in values {
        // max(value, value + current) only extends the run while it is positive.
        current = if current > 0 {
            value
                .checked_add(current)
                .ok_or_else(|| Error::overflow(OPERATION))?
        } else {
            value
        };
        best = best.max(current);
    }
    Ok(best)
}

/// Returns the largest value strictly smaller than the maximum of `values`.
///
/// Duplicates of the maximum are ignored. Returns `None` when the input holds fewer
/// than two distinct values, so an answer of zero is always a real element.
///
/// # Examples
///
/// ```rust
/// use seq_drills::second_largest;
///
/// assert_eq!(second_largest(&[12, 35, 1, 10, 34, 1]), Some(34));
/// assert_eq!(second_largest(&[10, 10, 10]), None);
/// assert_eq!(second_largest(&[-4, -9]), Some(-9));
/// ```
#[must_use]
pub fn second_largest<T>(values: &[T]) -> Option<T>
where
    T: Ord + Copy,
{
    let mut largest: Option<T> = None;
    let mut second: Option<T> = None;

    for &value in values {
        match largest {
            None => largest = Some(value),
            Some(top) if value > top => {
                second = largest;
                largest = Some(value);
            }
            Some(top) if value < top && second.map_or(true, |s| value > s) => {
                second = Some(value);
            }
            Some(_) => {}
        }
    }
    second
}
