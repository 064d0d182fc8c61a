//! Matching options for the topic occurrence counter.
//!
//! This module provides types to customize how review text is matched against topic terms:
//!
//! - [`MatchOptions`]: Main configuration struct
//! - [`CaseMatching`]: How letter case is compared
//! - [`MatchMode`]: Whether a term may match inside a longer word
//!
//! ## Examples
//!
//! ```rust
//! use seq_drills::{topic_occurrences, topics, CaseMatching, MatchMode, MatchOptions};
//!
//! let table = topics! { "price" => ["cost"] };
//! let reviews = ["COST was fine", "the price is right"];
//!
//! // Default: exact or capitalized spelling, substring containment
//! let counts = topic_occurrences(&table, &reviews, &MatchOptions::default());
//! assert_eq!(counts.count("price"), 1);
//!
//! // Full case folding
//! let options = MatchOptions::new().with_case_matching(CaseMatching::Insensitive);
//! let counts = topic_occurrences(&table, &reviews, &options);
//! assert_eq!(counts.count("price"), 2);
//! ```

/// Letter case handling when comparing a term with review text.
///
/// # Examples
///
/// ```rust
/// use seq_drills::CaseMatching;
///
/// assert_eq!(CaseMatching::default(), CaseMatching::ExactOrCapitalized);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CaseMatching {
    /// The term as written, or with each word capitalized ("battery life" or "Battery Life").
    ///
    /// Words are split on any non-alphanumeric character, so "wi-fi" also matches "Wi-Fi".
    #[default]
    ExactOrCapitalized,
    /// Both sides are lower-cased before comparing
    Insensitive,
}

/// Where in the review a term is allowed to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Anywhere, including inside longer words ("cost" matches "costly")
    #[default]
    Substring,
    /// Only when bounded by non-alphanumeric characters or the text edges
    WholeWord,
}

/// Configuration options for [`topic_occurrences`](crate::topic_occurrences).
///
/// # Examples
///
/// ```rust
/// use seq_drills::{CaseMatching, MatchMode, MatchOptions};
///
/// // Default matching
/// let options = MatchOptions::new();
///
/// // Custom configuration
/// let options = MatchOptions::new()
///     .with_case_matching(CaseMatching::Insensitive)
///     .with_mode(MatchMode::WholeWord);
/// assert_eq!(options.mode, MatchMode::WholeWord);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchOptions {
    pub case_matching: CaseMatching,
    pub mode: MatchMode,
}

impl MatchOptions {
    /// Creates default options (exact-or-capitalized case, substring matching).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seq_drills::{CaseMatching, MatchMode, MatchOptions};
    ///
    /// let options = MatchOptions::new();
    /// assert_eq!(options.case_matching, CaseMatching::ExactOrCapitalized);
    /// assert_eq!(options.mode, MatchMode::Substring);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with full case folding and whole-word matching.
    #[must_use]
    pub fn strict_words() -> Self {
        MatchOptions {
            case_matching: CaseMatching::Insensitive,
            mode: MatchMode::WholeWord,
        }
    }

    /// Sets the case handling.
    #[must_use]
    pub fn with_case_matching(mut self, case_matching: CaseMatching) -> Self {
        self.case_matching = case_matching;
        self
    }

    /// Sets where a term may match.
    #[must_use]
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }
}
