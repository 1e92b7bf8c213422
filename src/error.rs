//! Guard failure types
//!
//! Every guard in this crate fails in exactly one of two ways: the argument
//! violated a condition (`InvalidArgument`), or the argument was a `None`
//! where a value was required (`NullArgument`). Nothing is retried, logged,
//! or partially recovered; the error either propagates with `?` or a
//! caller-supplied handler runs instead (see [`crate::guard::GuardExt`]).
//!
//! # Examples
//!
//! ```
//! use breakwater::prelude::*;
//!
//! let err = 5.must(greater_than(10)).unwrap_err();
//! assert_eq!(err.to_string(), "Value must be greater than 10.");
//!
//! let err = None::<i32>.cannot_be_null().unwrap_err();
//! assert_eq!(err, GuardError::NullArgument);
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Which guard form raised the error.
///
/// Guards come in two polarities: `must` fails when the predicate does *not*
/// hold, `cannot` fails when it *does*. Predicates use the polarity to phrase
/// their canned message ("Value must be empty." vs. "Value cannot be empty.").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// The `must` family: the predicate was required to hold.
    Must,
    /// The `cannot` family: the predicate was required not to hold.
    Cannot,
}

impl Polarity {
    /// The verb used when phrasing the canned message.
    pub fn verb(self) -> &'static str {
        match self {
            Polarity::Must => "must",
            Polarity::Cannot => "cannot",
        }
    }

    /// The opposite polarity.
    ///
    /// Used by the [`Not`](crate::predicate::Not) combinator: `must(not(p))`
    /// reports the same failure as `cannot(p)`.
    pub fn flip(self) -> Self {
        match self {
            Polarity::Must => Polarity::Cannot,
            Polarity::Cannot => Polarity::Must,
        }
    }
}

/// An error raised by a violated guard.
///
/// Messages are deterministic, human-readable strings embedding the offending
/// values; sequences longer than ten elements are truncated with a trailing
/// `...` marker.
///
/// # Examples
///
/// ```
/// use breakwater::GuardError;
///
/// let err = GuardError::invalid_argument("Value must be empty.");
/// assert_eq!(err.message(), "Value must be empty.");
/// assert_eq!(GuardError::NullArgument.message(), "Value cannot be null.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuardError {
    /// A guard condition was violated, or a predicate received a structurally
    /// invalid input (inverted range bounds, invalid path syntax passed to an
    /// existence check).
    InvalidArgument {
        /// The canned, human-readable message.
        message: String,
    },
    /// A value was `None` where a value was required.
    NullArgument,
}

impl GuardError {
    /// Create an `InvalidArgument` error with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        GuardError::InvalidArgument {
            message: message.into(),
        }
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            GuardError::InvalidArgument { message } => message,
            GuardError::NullArgument => "Value cannot be null.",
        }
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl StdError for GuardError {}
