//! Testing utilities
//!
//! Assertion macros for code under guard:
//!
//! ```rust
//! use breakwater::prelude::*;
//! use breakwater::{assert_passes, assert_violates};
//!
//! let v = assert_passes!(5.must(greater_than(0)));
//! assert_eq!(v, 5);
//!
//! assert_violates!(5.must(greater_than(10)));
//! assert_violates!(5.must(greater_than(10)), "Value must be greater than 10.");
//! ```

/// Assert that a guard expression passed, yielding the guarded value.
///
/// Panics with the guard's message otherwise.
#[macro_export]
macro_rules! assert_passes {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => panic!("guard failed: {}", err),
        }
    };
}

/// Assert that a guard expression failed, yielding the [`GuardError`].
///
/// With a second argument, also asserts the error's exact message.
///
/// [`GuardError`]: crate::GuardError
#[macro_export]
macro_rules! assert_violates {
    ($expr:expr) => {
        match $expr {
            Ok(_) => panic!("guard unexpectedly passed"),
            Err(err) => err,
        }
    };
    ($expr:expr, $message:expr) => {{
        let err = $crate::assert_violates!($expr);
        assert_eq!(err.to_string(), $message);
        err
    }};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_assert_passes_yields_value() {
        let v = assert_passes!(5.must(greater_than(0)));
        assert_eq!(v, 5);
    }

    #[test]
    fn test_assert_violates_yields_error() {
        let err = assert_violates!(5.must(greater_than(10)));
        assert_eq!(err.to_string(), "Value must be greater than 10.");
    }

    #[test]
    fn test_assert_violates_checks_message() {
        assert_violates!(
            Vec::<i32>::new().cannot(empty()),
            "Value cannot be empty."
        );
    }

    #[test]
    #[should_panic(expected = "guard unexpectedly passed")]
    fn test_assert_violates_panics_on_pass() {
        assert_violates!(5.must(greater_than(0)));
    }

    #[test]
    #[should_panic(expected = "guard failed")]
    fn test_assert_passes_panics_on_violation() {
        assert_passes!(5.must(greater_than(10)));
    }
}
