//! Guard dispatch
//!
//! Every predicate in [`crate::predicate`] is usable through four call
//! conventions, provided by [`GuardExt`] on all values:
//!
//! - `must(p)` fails with [`GuardError`] when `p` does NOT hold, otherwise
//!   passes the value through unchanged.
//! - `cannot(p)` is the mirror: it fails when `p` holds.
//! - `when(p, default)` substitutes `default` when `p` holds, otherwise
//!   passes the value through.
//! - `when_not(p, default)` is the complement.
//!
//! The `*_or_else` forms invoke a caller-supplied handler instead of
//! returning an error; the handler runs at most once, is never stored, and
//! whatever it does is the observed behavior - the guard performs no error
//! handling of its own once a handler is supplied.
//!
//! [`OptionGuardExt`] adds the null guards: `cannot_be_null` unwraps an
//! `Option` or fails with [`GuardError::NullArgument`], so optional values
//! can flow into the value-level guards:
//!
//! ```rust
//! use breakwater::prelude::*;
//!
//! fn connect(port: Option<u16>) -> Result<u16, GuardError> {
//!     port.cannot_be_null()?.must(between(1u16, 65535)?)
//! }
//!
//! assert!(connect(Some(8080)).is_ok());
//! assert_eq!(connect(None), Err(GuardError::NullArgument));
//! ```

use crate::error::{GuardError, Polarity};
use crate::predicate::{Predicate, TryPredicate};

#[cfg(feature = "tracing")]
fn trace_violation(err: &GuardError) {
    tracing::debug!(error = %err, "guard violated");
}

#[cfg(not(feature = "tracing"))]
fn trace_violation(_err: &GuardError) {}

/// Guard call conventions, available on every value.
///
/// `must` and `cannot` return the value unchanged on success, enabling
/// fluent chains:
///
/// ```rust
/// use breakwater::prelude::*;
///
/// fn take_name(name: String) -> Result<String, GuardError> {
///     name.cannot(empty())?.must(matches(regex::Regex::new("^[a-z]+$").unwrap()))
/// }
///
/// assert!(take_name("alice".to_string()).is_ok());
/// assert!(take_name(String::new()).is_err());
/// ```
pub trait GuardExt: Sized {
    /// Return the value if `predicate` holds, otherwise fail.
    fn must<P: TryPredicate<Self>>(self, predicate: P) -> Result<Self, GuardError> {
        if predicate.try_test(&self)? {
            Ok(self)
        } else {
            let err = predicate.error(Polarity::Must);
            trace_violation(&err);
            Err(err)
        }
    }

    /// Return the value if `predicate` does NOT hold, otherwise fail.
    fn cannot<P: TryPredicate<Self>>(self, predicate: P) -> Result<Self, GuardError> {
        if predicate.try_test(&self)? {
            let err = predicate.error(Polarity::Cannot);
            trace_violation(&err);
            Err(err)
        } else {
            Ok(self)
        }
    }

    /// Like [`must`](GuardExt::must), but invoke `on_violation` instead of
    /// returning an error, then pass the value through.
    ///
    /// Structural predicate failures (e.g. an existence check on an invalid
    /// path) still propagate as errors.
    fn must_or_else<P, F>(self, predicate: P, on_violation: F) -> Result<Self, GuardError>
    where
        P: TryPredicate<Self>,
        F: FnOnce(),
    {
        if !predicate.try_test(&self)? {
            #[cfg(feature = "tracing")]
            trace_violation(&predicate.error(Polarity::Must));
            on_violation();
        }

        Ok(self)
    }

    /// Like [`cannot`](GuardExt::cannot), but invoke `on_violation` instead
    /// of returning an error, then pass the value through.
    fn cannot_or_else<P, F>(self, predicate: P, on_violation: F) -> Result<Self, GuardError>
    where
        P: TryPredicate<Self>,
        F: FnOnce(),
    {
        if predicate.try_test(&self)? {
            #[cfg(feature = "tracing")]
            trace_violation(&predicate.error(Polarity::Cannot));
            on_violation();
        }

        Ok(self)
    }

    /// Return `default` if `predicate` holds, otherwise the value unchanged.
    fn when<P: Predicate<Self>>(self, predicate: P, default: Self) -> Self {
        if predicate.test(&self) {
            default
        } else {
            self
        }
    }

    /// Return `default` if `predicate` does NOT hold, otherwise the value
    /// unchanged.
    fn when_not<P: Predicate<Self>>(self, predicate: P, default: Self) -> Self {
        if predicate.test(&self) {
            self
        } else {
            default
        }
    }

    /// [`when`](GuardExt::when) for fallible predicates.
    fn try_when<P: TryPredicate<Self>>(self, predicate: P, default: Self) -> Result<Self, GuardError> {
        Ok(if predicate.try_test(&self)? {
            default
        } else {
            self
        })
    }

    /// [`when_not`](GuardExt::when_not) for fallible predicates.
    fn try_when_not<P: TryPredicate<Self>>(
        self,
        predicate: P,
        default: Self,
    ) -> Result<Self, GuardError> {
        Ok(if predicate.try_test(&self)? {
            self
        } else {
            default
        })
    }
}

impl<T> GuardExt for T {}

/// Null guards for optional values.
///
/// `cannot_be_null` is the single producer of
/// [`GuardError::NullArgument`]; it unwraps the option so the remaining
/// guards run on the value itself.
pub trait OptionGuardExt<T>: Sized {
    /// Return the inner value, or fail with [`GuardError::NullArgument`].
    fn cannot_be_null(self) -> Result<T, GuardError>;

    /// Like [`cannot_be_null`](OptionGuardExt::cannot_be_null), but invoke
    /// `on_violation` instead of failing, then pass the option through.
    fn cannot_be_null_or_else<F: FnOnce()>(self, on_violation: F) -> Self;

    /// Return the option if it is `None`, otherwise fail.
    fn must_be_null(self) -> Result<Self, GuardError>;

    /// Return `default` if the option is `None`, otherwise the inner value.
    fn when_null(self, default: T) -> T;

    /// Return `default` if the option holds a value, otherwise `None`.
    fn when_not_null(self, default: Option<T>) -> Option<T>;
}

impl<T> OptionGuardExt<T> for Option<T> {
    fn cannot_be_null(self) -> Result<T, GuardError> {
        match self {
            Some(value) => Ok(value),
            None => {
                trace_violation(&GuardError::NullArgument);
                Err(GuardError::NullArgument)
            }
        }
    }

    fn cannot_be_null_or_else<F: FnOnce()>(self, on_violation: F) -> Self {
        if self.is_none() {
            trace_violation(&GuardError::NullArgument);
            on_violation();
        }

        self
    }

    fn must_be_null(self) -> Result<Self, GuardError> {
        if self.is_some() {
            let err = GuardError::invalid_argument("Value must be null.");
            trace_violation(&err);
            Err(err)
        } else {
            Ok(self)
        }
    }

    fn when_null(self, default: T) -> T {
        self.unwrap_or(default)
    }

    fn when_not_null(self, default: Option<T>) -> Option<T> {
        match self {
            Some(_) => default,
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{between, empty, greater_than, not, null_or_empty, one_of};
    use std::cell::Cell;

    #[test]
    fn test_must_passes_value_through() {
        let v = 5.must(greater_than(0)).unwrap();
        assert_eq!(v, 5);
    }

    #[test]
    fn test_must_reports_canned_message() {
        let err = 5.must(greater_than(10)).unwrap_err();
        assert_eq!(err.to_string(), "Value must be greater than 10.");
    }

    #[test]
    fn test_cannot_is_the_mirror() {
        assert_eq!(vec![1].cannot(empty()), Ok(vec![1]));
        let err = Vec::<i32>::new().cannot(empty()).unwrap_err();
        assert_eq!(err.to_string(), "Value cannot be empty.");
    }

    #[test]
    fn test_must_be_null_or_empty_message() {
        let err = "aaa".to_string().must(null_or_empty()).unwrap_err();
        assert_eq!(err.to_string(), "Value must be null or empty.");
    }

    #[test]
    fn test_or_else_invokes_handler_once_and_passes_through() {
        let calls = Cell::new(0);
        let v = 5
            .must_or_else(greater_than(10), || calls.set(calls.get() + 1))
            .unwrap();
        assert_eq!(v, 5);
        assert_eq!(calls.get(), 1);

        let calls = Cell::new(0);
        let v = 5
            .cannot_or_else(greater_than(0), || calls.set(calls.get() + 1))
            .unwrap();
        assert_eq!(v, 5);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_or_else_skips_handler_when_satisfied() {
        let calls = Cell::new(0);
        let v = 5
            .must_or_else(greater_than(0), || calls.set(calls.get() + 1))
            .unwrap();
        assert_eq!(v, 5);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_when_substitutes_on_match() {
        assert_eq!(String::new().when(empty(), "fallback".to_string()), "fallback");
        assert_eq!("kept".to_string().when(empty(), "fallback".to_string()), "kept");
    }

    #[test]
    fn test_when_not_is_the_complement() {
        assert_eq!(String::new().when_not(empty(), "fallback".to_string()), "");
        assert_eq!(
            "kept".to_string().when_not(empty(), "fallback".to_string()),
            "fallback"
        );
    }

    #[test]
    fn test_guard_chaining() {
        let v = 3
            .must(between(1, 5).unwrap())
            .and_then(|v| v.must(one_of([1, 3, 5])))
            .and_then(|v| v.cannot(not(greater_than(0))))
            .unwrap();
        assert_eq!(v, 3);
    }

    #[test]
    fn test_cannot_be_null_unwraps() {
        assert_eq!(Some(5).cannot_be_null(), Ok(5));
        assert_eq!(None::<i32>.cannot_be_null(), Err(GuardError::NullArgument));
    }

    #[test]
    fn test_cannot_be_null_or_else() {
        let calls = Cell::new(0);
        let v = None::<i32>.cannot_be_null_or_else(|| calls.set(calls.get() + 1));
        assert_eq!(v, None);
        assert_eq!(calls.get(), 1);

        let v = Some(1).cannot_be_null_or_else(|| calls.set(calls.get() + 1));
        assert_eq!(v, Some(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_must_be_null() {
        assert_eq!(None::<i32>.must_be_null(), Ok(None));
        let err = Some(1).must_be_null().unwrap_err();
        assert_eq!(err.to_string(), "Value must be null.");
    }

    #[test]
    fn test_when_null_and_when_not_null() {
        assert_eq!(None::<i32>.when_null(7), 7);
        assert_eq!(Some(1).when_null(7), 1);
        assert_eq!(Some(1).when_not_null(Some(7)), Some(7));
        assert_eq!(None::<i32>.when_not_null(Some(7)), None);
    }
}
