//! Composable predicates for guard clauses
//!
//! A predicate answers a yes/no question about a value: equality, ordering,
//! emptiness, membership, pattern match, type, path validity. Predicates
//! combine with logical operators (`and`, `or`, `not`) and plug into the
//! guard layer ([`crate::guard::GuardExt`]), which turns any of them into a
//! `must`, `cannot`, `when`, or `when_not` call.
//!
//! # Example
//!
//! ```rust
//! use breakwater::predicate::*;
//!
//! let port_ok = greater_than(0u32).and(less_than(65536));
//! assert!(port_ok.test(&8080));
//! assert!(!port_ok.test(&0));
//! ```
//!
//! # Integration with guards
//!
//! ```rust
//! use breakwater::prelude::*;
//!
//! let name = "alice".must(not(empty())).unwrap();
//! assert_eq!(name, "alice");
//! ```

mod collection;
mod combinators;
mod compare;
mod pattern;
pub(crate) mod path;
mod typed;

// Core traits
pub use combinators::{Predicate, PredicateExt, TryPredicate};

// Logical combinators
pub use combinators::{not, And, Not, Or};

// Equality & ordering predicates
pub use compare::{
    between, between_exclusive, default_value, equal_to, greater_or_equal, greater_than,
    less_or_equal, less_than, null, Between, DefaultValue, EqualTo, GreaterOrEqual, GreaterThan,
    LessOrEqual, LessThan, Null,
};

// Collection predicates
pub use collection::{
    contains_duplicates, contains_null, contains_only_null, contains_where, empty, null_or_empty,
    one_of, one_of_nullable, sequence_equal_to, ContainsDuplicates, ContainsNull,
    ContainsOnlyNull, ContainsWhere, Empty, NullOrEmpty, OneOf, SequenceEqualTo,
};

// Pattern predicates
pub use pattern::{matches, Matches};

// Runtime type predicates
pub use typed::{sub_type_of, type_of, SubTypeOf, TypeOf};

// Path predicates
pub use path::{
    absolute_directory_path, absolute_file_path, valid_directory_path, valid_file_name,
    valid_file_path, AbsoluteDirectoryPath, AbsoluteFilePath, ValidDirectoryPath, ValidFileName,
    ValidFilePath,
};
