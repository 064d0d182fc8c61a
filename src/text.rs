//! Algorithms over strings.
//!
//! Positions are counted in `char`s (Unicode scalar values), not bytes, so multi-byte
//! text behaves the same as ASCII.

use crate::error::{Error, Result};
use crate::map::FrequencyMap;

/// Returns the prefix of `input` that reaches `index` without cutting a word in half.
///
/// Everything before `index` is kept verbatim, then the prefix is extended past `index`
/// up to (not including) the next space. An `index` at or beyond the end returns the
/// whole input.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`] when `index` is negative.
///
/// # Examples
///
/// ```rust
/// use seq_drills::word_preserving_prefix;
///
/// let text = "I believe that people are really good at heart";
///
/// assert_eq!(word_preserving_prefix(5, text).unwrap(), "I believe");
/// assert_eq!(word_preserving_prefix(200, text).unwrap(), text);
/// assert!(word_preserving_prefix(-1, text).is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn word_preserving_prefix(index: isize, input: &str) -> Result<String> {
    let Ok(start) = usize::try_from(index) else {
        log::debug!("word_preserving_prefix: rejected index {index}");
        return Err(Error::invalid_index(index));
    };

    // Byte offset of the char at `start`; past the end means the whole input.
    let Some((offset, at)) = input.char_indices().nth(start) else {
        return Ok(input.to_string());
    };

    let after = offset + at.len_utf8();
    let end = input[after..]
        .find(' ')
        .map_or(input.len(), |gap| after + gap);

    Ok(input[..end].to_string())
}

/// Returns the first character, in reading order, that occurs exactly once in `input`.
///
/// Comparison is case-sensitive. Returns `None` for an empty string or when every
/// character repeats.
///
/// # Examples
///
/// ```rust
/// use seq_drills::first_unique_char;
///
/// assert_eq!(first_unique_char("SimpleSam"), Some('i'));
/// assert_eq!(first_unique_char("abab"), None);
/// ```
#[must_use]
pub fn first_unique_char(input: &str) -> Option<char> {
    let counts: FrequencyMap<char> = input.chars().collect();
    input.chars().find(|c| counts.count(c) == 1)
}
