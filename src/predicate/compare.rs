//! Equality and ordering predicates
//!
//! Comparisons delegate to the type's natural ordering (`PartialOrd`) or
//! equality (`PartialEq`). `None` comparators are unrepresentable here: a
//! plain `T` cannot be null in Rust, and optional values are lifted first
//! with [`cannot_be_null`](crate::guard::OptionGuardExt::cannot_be_null),
//! which is where the null-argument failure of the original contract lives.

use std::fmt;

use super::combinators::Predicate;
use crate::error::{GuardError, Polarity};

/// Predicate for equality with a fixed value.
///
/// For `Option` values the standard library already provides the required
/// semantics: `None == None`, and `None` is unequal to any `Some`.
#[derive(Clone, Copy, Debug)]
pub struct EqualTo<T>(pub T);

impl<T> Predicate<T> for EqualTo<T>
where
    T: PartialEq + fmt::Display + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value == self.0
    }

    fn phrase(&self) -> String {
        format!("be equal to {}", self.0)
    }
}

/// Create a predicate that checks for equality with `other`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(equal_to(5).test(&5));
/// assert!(!equal_to(5).test(&4));
/// ```
pub fn equal_to<T: PartialEq + fmt::Display + Send + Sync>(other: T) -> EqualTo<T> {
    EqualTo(other)
}

/// Predicate for strict greater-than comparison.
#[derive(Clone, Copy, Debug)]
pub struct GreaterThan<T>(pub T);

impl<T> Predicate<T> for GreaterThan<T>
where
    T: PartialOrd + fmt::Display + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value > self.0
    }

    fn phrase(&self) -> String {
        format!("be greater than {}", self.0)
    }
}

/// Create a predicate that checks `value > min`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(greater_than(5).test(&6));
/// assert!(!greater_than(5).test(&5));
/// ```
pub fn greater_than<T: PartialOrd + fmt::Display + Send + Sync>(min: T) -> GreaterThan<T> {
    GreaterThan(min)
}

/// Predicate for greater-than-or-equal comparison.
#[derive(Clone, Copy, Debug)]
pub struct GreaterOrEqual<T>(pub T);

impl<T> Predicate<T> for GreaterOrEqual<T>
where
    T: PartialOrd + fmt::Display + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value >= self.0
    }

    fn phrase(&self) -> String {
        format!("be greater than or equal to {}", self.0)
    }
}

/// Create a predicate that checks `value >= min`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(greater_or_equal(5).test(&5));
/// assert!(!greater_or_equal(5).test(&4));
/// ```
pub fn greater_or_equal<T: PartialOrd + fmt::Display + Send + Sync>(min: T) -> GreaterOrEqual<T> {
    GreaterOrEqual(min)
}

/// Predicate for strict less-than comparison.
#[derive(Clone, Copy, Debug)]
pub struct LessThan<T>(pub T);

impl<T> Predicate<T> for LessThan<T>
where
    T: PartialOrd + fmt::Display + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value < self.0
    }

    fn phrase(&self) -> String {
        format!("be less than {}", self.0)
    }
}

/// Create a predicate that checks `value < max`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(less_than(5).test(&4));
/// assert!(!less_than(5).test(&5));
/// ```
pub fn less_than<T: PartialOrd + fmt::Display + Send + Sync>(max: T) -> LessThan<T> {
    LessThan(max)
}

/// Predicate for less-than-or-equal comparison.
#[derive(Clone, Copy, Debug)]
pub struct LessOrEqual<T>(pub T);

impl<T> Predicate<T> for LessOrEqual<T>
where
    T: PartialOrd + fmt::Display + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value <= self.0
    }

    fn phrase(&self) -> String {
        format!("be less than or equal to {}", self.0)
    }
}

/// Create a predicate that checks `value <= max`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(less_or_equal(5).test(&5));
/// assert!(!less_or_equal(5).test(&6));
/// ```
pub fn less_or_equal<T: PartialOrd + fmt::Display + Send + Sync>(max: T) -> LessOrEqual<T> {
    LessOrEqual(max)
}

/// Predicate for a range check.
///
/// Constructed through [`between`] (inclusive bounds) or
/// [`between_exclusive`]; both require `min <= max`.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
    inclusive: bool,
}

impl<T> Predicate<T> for Between<T>
where
    T: PartialOrd + fmt::Display + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        if self.inclusive {
            *value >= self.min && *value <= self.max
        } else {
            *value > self.min && *value < self.max
        }
    }

    fn phrase(&self) -> String {
        format!("be between {} and {}", self.min, self.max)
    }
}

fn new_between<T>(min: T, max: T, inclusive: bool) -> Result<Between<T>, GuardError>
where
    T: PartialOrd + fmt::Display,
{
    if min > max {
        return Err(GuardError::invalid_argument(format!(
            "Min value must be less than or equal to max value (min: {min}, max: {max})."
        )));
    }

    Ok(Between {
        min,
        max,
        inclusive,
    })
}

/// Create a predicate that checks `min <= value <= max`.
///
/// Fails with `InvalidArgument` if `min > max`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// let p = between(0, 100).unwrap();
/// assert!(p.test(&0));
/// assert!(p.test(&100));
/// assert!(!p.test(&101));
///
/// assert!(between(100, 0).is_err());
/// ```
pub fn between<T>(min: T, max: T) -> Result<Between<T>, GuardError>
where
    T: PartialOrd + fmt::Display,
{
    new_between(min, max, true)
}

/// Create a predicate that checks `min < value < max`.
///
/// Fails with `InvalidArgument` if `min > max`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// let p = between_exclusive(0, 100).unwrap();
/// assert!(!p.test(&0));
/// assert!(p.test(&50));
/// assert!(!p.test(&100));
/// ```
pub fn between_exclusive<T>(min: T, max: T) -> Result<Between<T>, GuardError>
where
    T: PartialOrd + fmt::Display,
{
    new_between(min, max, false)
}

/// Predicate that checks a value against its type's default.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultValue;

impl<T> Predicate<T> for DefaultValue
where
    T: Default + PartialEq + fmt::Display,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value == T::default()
    }

    fn phrase(&self) -> String {
        format!("be equal to {}", T::default())
    }
}

/// Create a predicate that checks whether a value equals `T::default()`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// let p = default_value();
/// assert!(Predicate::<i32>::test(&p, &0));
/// assert!(!Predicate::<i32>::test(&p, &3));
/// ```
pub fn default_value() -> DefaultValue {
    DefaultValue
}

/// Predicate that checks whether an optional value is `None`.
///
/// The `cannot` form of this predicate reports
/// [`GuardError::NullArgument`], the distinguished "value cannot be null"
/// failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct Null;

impl<T> Predicate<Option<T>> for Null {
    #[inline]
    fn test(&self, value: &Option<T>) -> bool {
        value.is_none()
    }

    fn phrase(&self) -> String {
        String::from("be null")
    }

    fn error(&self, polarity: Polarity) -> GuardError {
        match polarity {
            Polarity::Must => GuardError::invalid_argument("Value must be null."),
            Polarity::Cannot => GuardError::NullArgument,
        }
    }
}

/// Create a predicate that checks whether an `Option` is `None`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(null().test(&None::<i32>));
/// assert!(!null().test(&Some(1)));
/// ```
pub fn null() -> Null {
    Null
}
