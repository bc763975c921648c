//! The sorting algorithms.
//!
//! Each submodule exposes the same pair of entry points:
//! - `sort(&[T]) -> Vec<T>` orders by [`default_ordering`](crate::core::default_ordering).
//! - `sort_by(&[T], compare) -> Vec<T>` orders by a caller supplied comparator.
//!
//! Neither touches the input slice. [`Algorithm`] picks one of them at run time.
//!
//! | Algorithm                   | Best        | Worst  | Stable |
//! | :-------------------------- | :---------- | :----- | :----- |
//! | [`bubble`]                  | O(n)        | O(n²)  | Yes    |
//! | [`insertion`]               | O(n)        | O(n²)  | Yes    |
//! | [`selection`]               | O(n²)       | O(n²)  | No     |
//! | [`shell`] (halving gaps)    | O(n log n)  | O(n²)  | No     |

pub mod bubble;
pub mod insertion;
pub mod selection;
pub mod shell;

use crate::algo::shell::GapSequence;
use crate::core::{default_ordering, validate};
use crate::error::SortError;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One of the available sorting algorithms.
///
/// # Examples
///
/// ```
/// use sortable::algo::Algorithm;
///
/// let algorithm: Algorithm = "insertion".parse().unwrap();
/// assert!(algorithm.is_stable());
/// assert_eq!(algorithm.sort(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Shell,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Shell,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Shell => "shell",
        }
    }

    /// Whether elements that compare equal keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion)
    }

    /// Returns a sorted copy of `v` using the natural order of its elements.
    pub fn sort<T: PartialOrd + Clone>(self, v: &[T]) -> Vec<T> {
        self.sort_by(v, default_ordering)
    }

    /// Returns a copy of `v` sorted with `compare`.
    pub fn sort_by<T, F>(self, v: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Self::Bubble => bubble::sort_by(v, compare),
            Self::Insertion => insertion::sort_by(v, compare),
            Self::Selection => selection::sort_by(v, compare),
            Self::Shell => shell::sort_by(v, compare),
        }
    }

    /// Collects `sequence` and returns its elements in natural order.
    ///
    /// See [`Algorithm::try_sort_by`].
    pub fn try_sort<I>(self, sequence: I) -> Result<Vec<I::Item>, SortError>
    where
        I: IntoIterator,
        I::Item: PartialOrd,
    {
        self.try_sort_by(sequence, default_ordering)
    }

    /// Collects `sequence` and returns its elements sorted with `compare`.
    ///
    /// Elements are moved, not cloned. Fails with
    /// [`SortError::InvalidArgument`] when `sequence` has no known upper
    /// length bound; nothing is pulled from it or compared in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortable::algo::Algorithm;
    ///
    /// let words = "kiwi fig apple".split(' ').map(String::from).collect::<Vec<_>>();
    /// let sorted = Algorithm::Shell.try_sort_by(words, |a, b| a.len().cmp(&b.len())).unwrap();
    /// assert_eq!(sorted, vec!["fig", "kiwi", "apple"]);
    ///
    /// assert!(Algorithm::Shell.try_sort(std::iter::repeat(1)).is_err());
    /// ```
    pub fn try_sort_by<I, F>(self, sequence: I, mut compare: F) -> Result<Vec<I::Item>, SortError>
    where
        I: IntoIterator,
        F: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        let mut sorted = validate(sequence)?;
        match self {
            Self::Bubble => bubble::bubble_sort(&mut sorted, &mut compare),
            Self::Insertion => insertion::insertion_sort(&mut sorted, &mut compare),
            Self::Selection => selection::selection_sort(&mut sorted, &mut compare),
            Self::Shell => shell::shell_sort(&mut sorted, GapSequence::default(), &mut compare),
        }
        Ok(sorted)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                SortError::invalid_argument(
                    "algorithm",
                    format!("unknown algorithm '{s}', expected one of bubble, insertion, selection, shell"),
                )
            })
    }
}
