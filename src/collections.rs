//! Generic helpers over slices, plus a countdown sequence.

use std::iter::FusedIterator;

/// Returns the position of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use seq_drills::find_index;
///
/// let movies = ["Batman", "Spiderman", "Superman"];
/// assert_eq!(find_index(&movies, &"Spiderman"), Some(1));
/// assert_eq!(find_index(&movies, &"Hulk"), None);
/// ```
#[must_use]
pub fn find_index<T>(items: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    items.iter().position(|item| item == target)
}

/// Returns the smallest element, or `None` for an empty slice.
///
/// When several elements compare equal the first of them is returned.
///
/// # Examples
///
/// ```rust
/// use seq_drills::lowest;
///
/// assert_eq!(lowest(&[4, 5, 6, 1, 200, -100, 999]), Some(&-100));
/// assert_eq!(lowest(&["b", "c", "a", "z"]), Some(&"a"));
/// assert_eq!(lowest::<u8>(&[]), None);
/// ```
#[must_use]
pub fn lowest<T>(items: &[T]) -> Option<&T>
where
    T: Ord,
{
    items.iter().reduce(|low, item| if item < low { item } else { low })
}

/// Returns the first and last elements, which are the same element for a one-item slice.
#[must_use]
pub fn first_last<T>(items: &[T]) -> Option<(&T, &T)> {
    Some((items.first()?, items.last()?))
}

/// Returns a reversed copy of `items`, built by swapping from both ends toward the middle.
///
/// # Examples
///
/// ```rust
/// use seq_drills::reversed;
///
/// assert_eq!(reversed(&[1, 2, 3, 4, 5]), vec![5, 4, 3, 2, 1]);
/// ```
#[must_use]
pub fn reversed<T>(items: &[T]) -> Vec<T>
where
    T: Clone,
{
    let mut out = items.to_vec();
    if out.is_empty() {
        return out;
    }

    let (mut left, mut right) = (0, out.len() - 1);
    while left < right {
        out.swap(left, right);
        left += 1;
        right -= 1;
    }
    out
}

/// Returns an ascending copy of `items` using insertion sort.
///
/// The sort is stable: equal elements keep their relative order. Quadratic in the worst
/// case, so meant for short inputs.
///
/// # Examples
///
/// ```rust
/// use seq_drills::insertion_sorted;
///
/// assert_eq!(insertion_sorted(&[3, -1, 2, 2, 0]), vec![-1, 0, 2, 2, 3]);
/// ```
#[must_use]
pub fn insertion_sorted<T>(items: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut out = items.to_vec();
    for i in 1..out.len() {
        let mut j = i;
        while j > 0 && out[j - 1] > out[j] {
            out.swap(j - 1, j);
            j -= 1;
        }
    }
    out
}

/// A sequence counting down from `start` to `1`.
///
/// # Examples
///
/// ```rust
/// use seq_drills::Countdown;
///
/// let values: Vec<usize> = Countdown::new(3).into_iter().collect();
/// assert_eq!(values, vec![3, 2, 1]);
///
/// assert_eq!(Countdown::new(0).into_iter().count(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    start: usize,
}

impl Countdown {
    #[must_use]
    pub const fn new(start: usize) -> Self {
        Countdown { start }
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }
}

impl IntoIterator for Countdown {
    type Item = usize;
    type IntoIter = CountdownIter;

    fn into_iter(self) -> Self::IntoIter {
        CountdownIter {
            current: self.start,
        }
    }
}

/// Iterator returned by [`Countdown::into_iter`].
#[derive(Clone, Debug)]
pub struct CountdownIter {
    current: usize,
}

impl Iterator for CountdownIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == 0 {
            return None;
        }
        let value = self.current;
        self.current -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current, Some(self.current))
    }
}

impl ExactSizeIterator for CountdownIter {}

impl FusedIterator for CountdownIter {}
