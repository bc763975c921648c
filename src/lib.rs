//! # Sortable
//!
//! `sortable` offers four classical comparison sorts behind one contract:
//! given a slice and an optional comparator, return a **new** vector with the
//! same elements in order. The input is never mutated.
//!
//! ## Algorithms
//!
//! - [`bubble`]: stable, O(n) on ordered input, stops early once a pass makes no swaps.
//! - [`insertion`]: stable, O(n) on ordered input, the usual choice for small inputs.
//! - [`selection`]: unstable, always O(n²) comparisons but at most `n - 1` swaps.
//! - [`shell`]: unstable, gapped insertion sort with a configurable [`GapSequence`].
//!
//! Stability is part of each algorithm's contract: pick bubble or insertion
//! when equal elements must keep their input order.
//!
//! ## Usage
//!
//! ### Natural order
//!
//! ```rust
//! use sortable::prelude::*;
//!
//! let input = vec![5, 1, 4, 2, 8];
//! let sorted = insertion::sort(&input);
//!
//! assert_eq!(sorted, vec![1, 2, 4, 5, 8]);
//! assert_eq!(input, vec![5, 1, 4, 2, 8]);
//! ```
//!
//! ### Custom comparator
//!
//! Comparators return [`std::cmp::Ordering`]. Use [`by_sign`] for one that
//! returns a negative, zero or positive integer instead.
//!
//! ```rust
//! use sortable::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let people = vec![
//!     Person { name: "John", age: 5 },
//!     Person { name: "Cersei", age: 1 },
//!     Person { name: "Ned", age: 4 },
//! ];
//!
//! let oldest_first = bubble::sort_by(&people, |a, b| b.age.cmp(&a.age));
//! let names: Vec<_> = oldest_first.iter().map(|p| p.name).collect();
//! assert_eq!(names, vec!["John", "Ned", "Cersei"]);
//! ```
//!
//! ### Choosing at run time
//!
//! ```rust
//! use sortable::prelude::*;
//!
//! let algorithm: Algorithm = "shell".parse().unwrap();
//! assert_eq!(algorithm.sort(&[3.5, -1.0, 2.25]), vec![-1.0, 2.25, 3.5]);
//!
//! let err = "quick".parse::<Algorithm>().unwrap_err();
//! assert!(matches!(err, SortError::InvalidArgument { .. }));
//! ```
//!
//! ## Copy semantics
//!
//! The result holds clones of the input elements. Sorting a slice of
//! references or `Rc`s therefore copies only the handles, and the result
//! points at the caller's original elements.

pub mod algo;
pub mod core;
pub mod error;

pub use algo::shell::GapSequence;
pub use algo::{Algorithm, bubble, insertion, selection, shell};
pub use crate::core::{by_sign, default_ordering, validate};
pub use error::SortError;

pub mod prelude {
    pub use crate::algo::shell::GapSequence;
    pub use crate::algo::{Algorithm, bubble, insertion, selection, shell};
    pub use crate::core::{by_sign, default_ordering};
    pub use crate::error::SortError;
}
