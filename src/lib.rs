//! # Breakwater
//!
//! > *A breakwater shelters the harbor*
//!
//! Defensive-programming guards for Rust: composable predicates for
//! validating values, collections, and file-system paths at API boundaries.
//!
//! ## Philosophy
//!
//! Guard clauses usually come in matched families - `is_empty`,
//! `is_not_empty`, `must_be_empty`, `cannot_be_empty`, and so on - which is
//! combinatorial boilerplate. Breakwater defines each predicate **once** and
//! derives the rest generically:
//!
//! - negation via [`predicate::not`],
//! - failing guards via [`GuardExt::must`] and [`GuardExt::cannot`],
//! - substituting guards via [`GuardExt::when`] and [`GuardExt::when_not`],
//! - handler delegation via the `*_or_else` forms.
//!
//! ## Quick Example
//!
//! ```rust
//! use breakwater::prelude::*;
//!
//! fn register(name: Option<String>, age: i32) -> Result<(String, i32), GuardError> {
//!     let name = name.cannot_be_null()?.cannot(empty())?;
//!     let age = age.must(between(0, 150)?)?;
//!     Ok((name, age))
//! }
//!
//! assert!(register(Some("alice".to_string()), 30).is_ok());
//!
//! let err = register(Some("alice".to_string()), 200).unwrap_err();
//! assert_eq!(err.to_string(), "Value must be between 0 and 150.");
//!
//! assert_eq!(register(None, 30), Err(GuardError::NullArgument));
//! ```
//!
//! ## Substitution instead of failure
//!
//! ```rust
//! use breakwater::prelude::*;
//!
//! let greeting = String::new().when(empty(), "hello".to_string());
//! assert_eq!(greeting, "hello");
//! ```
//!
//! Guards never mutate the checked value and hold no state across calls;
//! the two filesystem predicates in [`fs`] are the only operations that
//! consult anything outside the arguments.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod fs;
pub mod guard;
pub mod predicate;
pub mod testing;

mod format;

// Re-exports
pub use error::{GuardError, Polarity};
pub use guard::{GuardExt, OptionGuardExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{GuardError, Polarity};
    pub use crate::fs::{directory_exists, empty_directory, file_exists};
    pub use crate::guard::{GuardExt, OptionGuardExt};
    pub use crate::predicate::{
        absolute_directory_path, absolute_file_path, between, between_exclusive,
        contains_duplicates, contains_null, contains_only_null, contains_where, default_value,
        empty, equal_to, greater_or_equal, greater_than, less_or_equal, less_than, matches, not,
        null, null_or_empty, one_of, one_of_nullable, sequence_equal_to, sub_type_of, type_of,
        valid_directory_path, valid_file_name, valid_file_path, Predicate, PredicateExt,
        TryPredicate,
    };
}
