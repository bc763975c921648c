//! Shell sort: insertion sort over a shrinking sequence of gaps.
//!
//! | Best        | Average              | Worst            | Extra space | Stable |
//! | :---------- | :------------------- | :--------------- | :---------- | :----- |
//! | O(n log n)  | depends on the gaps  | O(n²) (halving)  | O(1)        | No     |
//!
//! Early passes move elements across long distances so the final gap-1 pass,
//! a plain insertion sort, has little left to do. Comparing across a gap can
//! move an element over an equal one, so the sort is not stable.
//!
//! The gap sequence only affects speed, never the result. [`GapSequence::Halving`]
//! is the default; [`GapSequence::Hibbard`] and [`GapSequence::Sedgewick`]
//! have better worst-case bounds.

use crate::core::{copy_then_sort, default_ordering};
use std::cmp::Ordering;

/// Strides used by successive passes of shell sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GapSequence {
    /// Shell's original sequence: `n/2, n/4, ..., 1`.
    #[default]
    Halving,
    /// `2^k - 1`: `..., 15, 7, 3, 1`. O(n^1.5) worst case.
    Hibbard,
    /// Sedgewick (1986): `..., 109, 41, 19, 5, 1`. O(n^4/3) worst case.
    Sedgewick,
}

impl GapSequence {
    /// Gaps for a sequence of `len` elements, largest first.
    ///
    /// Every gap is in `1..len`, the list is strictly decreasing and ends in
    /// `1`. It is empty when `len < 2`, as there is nothing to sort.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortable::algo::shell::GapSequence;
    ///
    /// assert_eq!(GapSequence::Halving.gaps(10), vec![5, 2, 1]);
    /// assert_eq!(GapSequence::Hibbard.gaps(10), vec![7, 3, 1]);
    /// assert_eq!(GapSequence::Sedgewick.gaps(50), vec![41, 19, 5, 1]);
    /// ```
    pub fn gaps(self, len: usize) -> Vec<usize> {
        match self {
            Self::Halving => {
                let mut gaps = Vec::new();
                let mut gap = len / 2;
                while gap > 0 {
                    gaps.push(gap);
                    gap /= 2;
                }
                gaps
            }
            Self::Hibbard => {
                let mut gaps: Vec<usize> = (1..usize::BITS)
                    .map(|k| (1usize << k) - 1)
                    .take_while(|&gap| gap < len)
                    .collect();
                gaps.reverse();
                gaps
            }
            Self::Sedgewick => {
                let mut gaps = Vec::new();
                for k in 0..usize::BITS / 2 {
                    let even = sedgewick_even(k).filter(|&gap| gap < len);
                    let odd = sedgewick_odd(k).filter(|&gap| gap < len);
                    if even.is_none() && odd.is_none() {
                        break;
                    }
                    gaps.extend(even);
                    gaps.extend(odd);
                }
                gaps.sort_unstable_by(|a, b| b.cmp(a));
                gaps
            }
        }
    }
}

// 9 * (4^k - 2^k) + 1
fn sedgewick_even(k: u32) -> Option<usize> {
    let pow2 = 1usize.checked_shl(k)?;
    let pow4 = pow2.checked_mul(pow2)?;
    (pow4 - pow2).checked_mul(9)?.checked_add(1)
}

// 2^(k+2) * (2^(k+2) - 3) + 1
fn sedgewick_odd(k: u32) -> Option<usize> {
    let pow2 = 1usize.checked_shl(k + 2)?;
    pow2.checked_mul(pow2 - 3)?.checked_add(1)
}

/// Returns a sorted copy of `v` using the natural order of its elements.
///
/// # Examples
///
/// ```
/// use sortable::algo::shell;
///
/// assert_eq!(shell::sort(&[5, 1, 4, 2, 8]), vec![1, 2, 4, 5, 8]);
/// ```
pub fn sort<T: PartialOrd + Clone>(v: &[T]) -> Vec<T> {
    sort_by(v, default_ordering)
}

/// Returns a copy of `v` sorted with `compare` using [`GapSequence::Halving`].
pub fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_with_gaps(v, GapSequence::default(), compare)
}

/// Returns a copy of `v` sorted with `compare`, passing over it with the given `gaps`.
pub fn sort_with_gaps<T, F>(v: &[T], gaps: GapSequence, mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    copy_then_sort(v, |sorted| shell_sort(sorted, gaps, &mut compare))
}

pub(crate) fn shell_sort<T, F>(v: &mut [T], gaps: GapSequence, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    for gap in gaps.gaps(len) {
        // Gapped insertion sort, the candidate travels left by `gap` per swap.
        for i in gap..len {
            let mut j = i;
            while j >= gap && compare(&v[j - gap], &v[j]) == Ordering::Greater {
                v.swap(j - gap, j);
                j -= gap;
            }
        }
    }
}
