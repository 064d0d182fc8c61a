//! Error types for the sequence and string algorithms.
//!
//! Only conditions the caller can act on are errors:
//!
//! - **Invalid input**: an argument outside the accepted domain (a negative index)
//! - **Precondition violations**: input the algorithm cannot work on (an empty sequence)
//! - **Overflow**: an intermediate sum that does not fit in `i64`
//!
//! "Nothing qualifies" outcomes, such as a string where every character repeats,
//! are reported as `None` by the functions themselves and never show up here.
//!
//! ## Examples
//!
//! ```rust
//! use seq_drills::{max_subarray_sum, Error};
//!
//! let result = max_subarray_sum(&[]);
//! assert_eq!(result, Err(Error::empty_input("max_subarray_sum")));
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("at least one element"));
//! }
//! ```

use thiserror::Error;

/// Represents every failure an operation in this crate can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character index below zero
    #[error("Invalid index {index}: index must be zero or greater")]
    InvalidIndex { index: isize },

    /// The operation requires at least one element
    #[error("Empty input to {operation}: at least one element is required")]
    EmptyInput { operation: &'static str },

    /// An intermediate value left the range of `i64`
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl Error {
    /// Creates an invalid index error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seq_drills::Error;
    ///
    /// let err = Error::invalid_index(-1);
    /// assert!(err.to_string().contains("-1"));
    /// ```
    pub fn invalid_index(index: isize) -> Self {
        Error::InvalidIndex { index }
    }

    /// Creates an empty input error naming the operation that rejected it.
    pub fn empty_input(operation: &'static str) -> Self {
        Error::EmptyInput { operation }
    }

    /// Creates an overflow error naming the operation that overflowed.
    pub fn overflow(operation: &'static str) -> Self {
        Error::Overflow { operation }
    }

    /// Returns `true` for errors caused by the shape of the caller's input
    /// rather than by its magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seq_drills::Error;
    ///
    /// assert!(Error::invalid_index(-3).is_input_error());
    /// assert!(!Error::overflow("max_subarray_sum").is_input_error());
    /// ```
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidIndex { .. } | Error::EmptyInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
