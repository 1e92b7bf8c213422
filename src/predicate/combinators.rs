//! Core predicate traits and logical combinators
//!
//! This module provides the foundational [`Predicate`] and [`TryPredicate`]
//! traits plus the logical combinators (`and`, `or`, `not`) for composing
//! predicates before handing them to a guard.

use crate::error::{GuardError, Polarity};

/// A composable yes/no question about values of type `T`.
///
/// Every predicate also knows how to phrase itself inside a guard message,
/// so `5.must(greater_than(10))` can report
/// `"Value must be greater than 10."` without the guard knowing anything
/// about the check.
///
/// Closures implement `Predicate` via a blanket impl, so any
/// `Fn(&T) -> bool` works where a predicate is expected. Closure guards use
/// the generic message `"Expression must be true."`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// let in_range = greater_or_equal(0).and(less_or_equal(150));
/// assert!(in_range.test(&25));
/// assert!(!in_range.test(&-5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check whether the value satisfies this predicate.
    fn test(&self, value: &T) -> bool;

    /// Phrase describing the condition, completing `"Value must ..."`.
    fn phrase(&self) -> String;

    /// The error a guard reports when this predicate is violated.
    fn error(&self, polarity: Polarity) -> GuardError {
        GuardError::invalid_argument(format!("Value {} {}.", polarity.verb(), self.phrase()))
    }
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }

    fn phrase(&self) -> String {
        String::from("satisfy the given expression")
    }

    fn error(&self, polarity: Polarity) -> GuardError {
        GuardError::invalid_argument(format!("Expression {} be true.", polarity.verb()))
    }
}

/// A predicate whose check can itself fail.
///
/// The path and filesystem predicates need this: asking whether a file exists
/// at a syntactically invalid path is an `InvalidArgument`, not `false`.
/// Every infallible [`Predicate`] is a `TryPredicate` via a blanket impl, so
/// the guard layer is written once against this trait.
pub trait TryPredicate<T: ?Sized>: Send + Sync {
    /// Check the value, or fail if the check itself cannot be performed.
    fn try_test(&self, value: &T) -> Result<bool, GuardError>;

    /// The error a guard reports when this predicate is violated.
    fn error(&self, polarity: Polarity) -> GuardError;
}

impl<T: ?Sized, P: Predicate<T>> TryPredicate<T> for P {
    #[inline]
    fn try_test(&self, value: &T) -> Result<bool, GuardError> {
        Ok(self.test(value))
    }

    fn error(&self, polarity: Polarity) -> GuardError {
        Predicate::error(self, polarity)
    }
}

/// Extension trait for combining predicates with logical operators.
///
/// All methods return concrete types, so composition is zero-cost.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// let outside = greater_than(0).and(less_than(100)).not();
/// assert!(outside.test(&-5));
/// assert!(!outside.test(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic: both predicates must hold.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic: either predicate must hold.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must hold.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) && self.1.test(value)
    }

    fn phrase(&self) -> String {
        format!("{} and {}", self.0.phrase(), self.1.phrase())
    }
}

/// OR combinator - either predicate must hold.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) || self.1.test(value)
    }

    fn phrase(&self) -> String {
        format!("{} or {}", self.0.phrase(), self.1.phrase())
    }
}

/// NOT combinator - inverts the predicate.
///
/// Guard messages flip polarity with the predicate, so
/// `value.must(not(empty()))` reports `"Value cannot be empty."`, exactly as
/// `value.cannot(empty())` would.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }

    fn phrase(&self) -> String {
        format!("not {}", self.0.phrase())
    }

    fn error(&self, polarity: Polarity) -> GuardError {
        self.0.error(polarity.flip())
    }
}

/// Create a predicate that inverts another.
///
/// Free-function form of [`PredicateExt::not`], convenient at guard sites:
///
/// ```rust
/// use breakwater::prelude::*;
///
/// let v = vec![1, 2, 3].must(not(empty())).unwrap();
/// assert_eq!(v, vec![1, 2, 3]);
/// ```
pub fn not<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{greater_than, less_than};

    #[test]
    fn test_and() {
        let p = greater_than(0).and(less_than(10));
        assert!(p.test(&5));
        assert!(!p.test(&0));
        assert!(!p.test(&10));
    }

    #[test]
    fn test_or() {
        let p = less_than(0).or(greater_than(100));
        assert!(p.test(&-5));
        assert!(p.test(&150));
        assert!(!p.test(&50));
    }

    #[test]
    fn test_not() {
        let p = greater_than(0).not();
        assert!(p.test(&-5));
        assert!(p.test(&0));
        assert!(!p.test(&5));
    }

    #[test]
    fn test_not_flips_message_polarity() {
        let err = Predicate::<i32>::error(&not(greater_than(0)), Polarity::Must);
        assert_eq!(err.to_string(), "Value cannot be greater than 0.");
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(is_even.test(&4));
        assert!(!is_even.test(&3));

        let even_and_positive = is_even.and(greater_than(0));
        assert!(even_and_positive.test(&4));
        assert!(!even_and_positive.test(&-4));
    }

    #[test]
    fn test_closure_error_message() {
        let is_even = |x: &i32| x % 2 == 0;
        let err = Predicate::<i32>::error(&is_even, Polarity::Must);
        assert_eq!(err.to_string(), "Expression must be true.");
        let err = Predicate::<i32>::error(&is_even, Polarity::Cannot);
        assert_eq!(err.to_string(), "Expression cannot be true.");
    }

    #[test]
    fn test_infallible_lift_to_try_predicate() {
        let p = greater_than(0);
        assert_eq!(TryPredicate::try_test(&p, &5), Ok(true));
        assert_eq!(TryPredicate::try_test(&p, &-5), Ok(false));
    }
}
