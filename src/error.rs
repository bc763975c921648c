//! Error type for the fallible sorting entry points.
//!
//! Only the run-time surface can fail: [`validate`](crate::core::validate) on
//! sequences without a known length bound, and parsing an [`Algorithm`](crate::algo::Algorithm)
//! from a name. Everything reachable through `&[T]` and a closure is checked
//! by the type system instead.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error returned when a sort is requested with arguments it cannot accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// An argument was rejected before any element was copied or compared.
    InvalidArgument {
        /// Name of the offending argument (e.g. `"sequence"`).
        argument: &'static str,
        /// Human readable reason.
        reason: String,
    },
}

impl SortError {
    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument { argument, reason } => {
                write!(f, "Invalid argument '{argument}': {reason}")
            }
        }
    }
}

impl Error for SortError {}
