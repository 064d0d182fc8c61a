//! Occurrence counters.
//!
//! - [`word_frequency`]: how often each distinct word appears
//! - [`topic_occurrences`]: how many reviews mention each topic
//! - [`rating_buckets`]: how many ratings fall in each quality band
//!
//! All of them return a [`FrequencyMap`].

use crate::map::FrequencyMap;
use crate::options::{CaseMatching, MatchMode, MatchOptions};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Topic names mapped to the keywords that also count as a mention of the topic.
///
/// Build one with the [`topics!`](crate::topics) macro or by collecting pairs.
pub type Topics = IndexMap<String, Vec<String>>;

/// Counts how many times each distinct word occurs. Comparison is exact and case-sensitive.
///
/// # Examples
///
/// ```rust
/// use seq_drills::word_frequency;
///
/// let counts = word_frequency("the cat and the hat".split_whitespace());
/// assert_eq!(counts.count("the"), 2);
/// assert_eq!(counts.count("cat"), 1);
/// assert_eq!(counts.total(), 5);
/// ```
#[must_use]
pub fn word_frequency<I, S>(words: I) -> FrequencyMap<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().to_string())
        .collect()
}

/// Counts, for every topic, how many reviews mention the topic name or one of its keywords.
///
/// Each review adds at most one to a given topic no matter how many of the topic's terms
/// it contains. Every topic appears in the result, in table order, even with a zero
/// count. Empty terms never match. See [`MatchOptions`] for case and word-boundary
/// handling.
///
/// # Examples
///
/// ```rust
/// use seq_drills::{topic_occurrences, topics, MatchOptions};
///
/// let table = topics! {
///     "price" => ["cost", "cheap"],
///     "battery" => ["charge"],
///     "screen" => [],
/// };
/// let reviews = [
///     "Price is fair and it was cheap",
///     "Battery lasts all day",
///     "does not hold a charge, cost too much",
/// ];
///
/// let counts = topic_occurrences(&table, &reviews, &MatchOptions::default());
/// assert_eq!(counts.count("price"), 2);
/// assert_eq!(counts.count("battery"), 2);
/// assert_eq!(counts.get("screen"), Some(0));
/// ```
#[must_use]
pub fn topic_occurrences<S>(
    topics: &Topics,
    reviews: &[S],
    options: &MatchOptions,
) -> FrequencyMap<String>
where
    S: AsRef<str>,
{
    let texts: Vec<Cow<'_, str>> = reviews
        .iter()
        .map(|review| match options.case_matching {
            CaseMatching::ExactOrCapitalized => Cow::Borrowed(review.as_ref()),
            CaseMatching::Insensitive => Cow::Owned(review.as_ref().to_lowercase()),
        })
        .collect();

    let mut counts = FrequencyMap::with_capacity(topics.len());
    for (topic, keywords) in topics {
        let spellings: Vec<String> = std::iter::once(topic)
            .chain(keywords)
            .filter(|term| !term.is_empty())
            .flat_map(|term| spellings_of(term, options.case_matching))
            .collect();

        let hits = texts
            .iter()
            .filter(|text| {
                spellings
                    .iter()
                    .any(|spelling| contains_term(text, spelling, options.mode))
            })
            .count();

        log::trace!("topic {topic:?}: {hits} of {} reviews", texts.len());
        counts.add(topic.clone(), hits);
    }

    log::debug!(
        "counted {} topics across {} reviews, {} mentions",
        counts.len(),
        texts.len(),
        counts.total()
    );
    counts
}

/// The forms of `term` that count as a match under `case_matching`.
fn spellings_of(term: &str, case_matching: CaseMatching) -> Vec<String> {
    match case_matching {
        CaseMatching::ExactOrCapitalized => {
            let capitalized = capitalize_words(term);
            if capitalized == term {
                vec![capitalized]
            } else {
                vec![term.to_string(), capitalized]
            }
        }
        CaseMatching::Insensitive => vec![term.to_lowercase()],
    }
}

/// Upper-cases the first letter of each word and lower-cases the rest.
///
/// A word starts after any non-alphanumeric character, so "wi-fi" becomes "Wi-Fi".
fn capitalize_words(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut word_start = true;
    for c in term.chars() {
        if !c.is_alphanumeric() {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn contains_term(text: &str, term: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => text.contains(term),
        MatchMode::WholeWord => {
            let bounded = |c: Option<char>| !c.is_some_and(char::is_alphanumeric);

            // Every start position is tried, since a rejected match may overlap an accepted one.
            let mut from = 0;
            while let Some(found) = text[from..].find(term) {
                let start = from + found;
                let before = text[..start].chars().next_back();
                let after = text[start + term.len()..].chars().next();
                if bounded(before) && bounded(after) {
                    return true;
                }
                match text[start..].chars().next() {
                    Some(c) => from = start + c.len_utf8(),
                    None => return false,
                }
            }
            false
        }
    }
}

/// Quality band of a numeric rating.
///
/// | band        | ratings       |
/// |-------------|---------------|
/// | `VeryBad`   | `1 <= r < 4`  |
/// | `Ok`        | `4 <= r < 6`  |
/// | `Good`      | `6 <= r < 8`  |
/// | `Excellent` | `8 <= r < 11` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingBucket {
    #[serde(rename = "Very bad")]
    VeryBad,
    Ok,
    Good,
    Excellent,
}

impl RatingBucket {
    /// Returns the band `rating` falls in, or `None` outside `[1, 11)` (including NaN).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seq_drills::RatingBucket;
    ///
    /// assert_eq!(RatingBucket::classify(8.5), Some(RatingBucket::Excellent));
    /// assert_eq!(RatingBucket::classify(0.5), None);
    /// ```
    #[must_use]
    pub fn classify(rating: f64) -> Option<Self> {
        match rating {
            r if (1.0..4.0).contains(&r) => Some(RatingBucket::VeryBad),
            r if (4.0..6.0).contains(&r) => Some(RatingBucket::Ok),
            r if (6.0..8.0).contains(&r) => Some(RatingBucket::Good),
            r if (8.0..11.0).contains(&r) => Some(RatingBucket::Excellent),
            _ => None,
        }
    }

    /// Returns the display label of this band.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            RatingBucket::VeryBad => "Very bad",
            RatingBucket::Ok => "Ok",
            RatingBucket::Good => "Good",
            RatingBucket::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for RatingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts how many ratings fall in each [`RatingBucket`]; out-of-range ratings are skipped.
///
/// # Examples
///
/// ```rust
/// use seq_drills::{rating_buckets, RatingBucket};
///
/// let ratings = [4.0, 8.5, 9.5, 2.0, 6.0, 3.0, 5.5, 7.0, 2.8, 9.8, 5.9, 1.5];
/// let counts = rating_buckets(&ratings);
///
/// assert_eq!(counts.count(&RatingBucket::VeryBad), 4);
/// assert_eq!(counts.count(&RatingBucket::Ok), 3);
/// assert_eq!(counts.count(&RatingBucket::Good), 2);
/// assert_eq!(counts.count(&RatingBucket::Excellent), 3);
/// ```
#[must_use]
pub fn rating_buckets(ratings: &[f64]) -> FrequencyMap<RatingBucket> {
    ratings
        .iter()
        .copied()
        .filter_map(RatingBucket::classify)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("battery life"), "Battery Life");
        assert_eq!(capitalize_words("sCREEN"), "Screen");
        assert_eq!(capitalize_words("wi-fi"), "Wi-Fi");
        assert_eq!(capitalize_words("usb-c port's"), "Usb-C Port'S");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_whole_word_boundaries() {
        assert!(contains_term(
            "too costly, cost matters",
            "cost",
            MatchMode::WholeWord
        ));
        assert!(!contains_term("too costly", "cost", MatchMode::WholeWord));
        assert!(contains_term("cost", "cost", MatchMode::WholeWord));
        assert!(contains_term("too costly", "cost", MatchMode::Substring));
    }

    #[test]
    fn test_whole_word_overlapping_occurrences() {
        // The match at 1 sits inside "yx.x"; the overlapping one at 3 is bounded.
        assert!(contains_term("yx.x.x", "x.x", MatchMode::WholeWord));
        assert!(!contains_term("yx.xz", "x.x", MatchMode::WholeWord));
        assert!(contains_term("é-é-é", "é-é", MatchMode::WholeWord));
        assert!(!contains_term("", "a", MatchMode::WholeWord));

        let table: Topics = [("x.x".to_string(), vec![])].into_iter().collect();
        let options = MatchOptions::new().with_mode(MatchMode::WholeWord);
        let counts = topic_occurrences(&table, &["yx.x.x"], &options);
        assert_eq!(counts.count("x.x"), 1);
    }

    #[test]
    fn test_capitalized_hyphenated_keyword_matches() {
        let table: Topics = [("wi-fi".to_string(), vec![])].into_iter().collect();
        let reviews = ["Wi-Fi drops often", "wi-fi is fine", "Wi-fi?"];
        let counts = topic_occurrences(&table, &reviews, &MatchOptions::default());
        assert_eq!(counts.count("wi-fi"), 2);
    }

    #[test]
    fn test_exact_or_capitalized_misses_other_casings() {
        let table: Topics = [("screen".to_string(), vec![])].into_iter().collect();
        let reviews = ["SCREEN broke", "Screen broke", "screen broke", "sCreen broke"];
        let counts = topic_occurrences(&table, &reviews, &MatchOptions::default());
        assert_eq!(counts.count("screen"), 2);

        let options = MatchOptions::new().with_case_matching(CaseMatching::Insensitive);
        let counts = topic_occurrences(&table, &reviews, &options);
        assert_eq!(counts.count("screen"), 4);
    }

    #[test]
    fn test_empty_terms_never_match() {
        let table: Topics = [(String::new(), vec![String::new()])].into_iter().collect();
        let counts = topic_occurrences(&table, &["anything"], &MatchOptions::default());
        assert_eq!(counts.get(""), Some(0));
    }

    #[test]
    fn test_rating_bucket_edges() {
        assert_eq!(RatingBucket::classify(1.0), Some(RatingBucket::VeryBad));
        assert_eq!(RatingBucket::classify(4.0), Some(RatingBucket::Ok));
        assert_eq!(RatingBucket::classify(10.99), Some(RatingBucket::Excellent));
        assert_eq!(RatingBucket::classify(11.0), None);
        assert_eq!(RatingBucket::classify(f64::NAN), None);
        assert_eq!(RatingBucket::VeryBad.to_string(), "Very bad");
    }
}
