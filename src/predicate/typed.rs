//! Runtime type predicates
//!
//! Checks over type-erased values (`dyn Any`). Rust has no runtime
//! subtyping between concrete types, so the assignability test of the
//! original contract degenerates to a downcast check; `sub_type_of` is kept
//! as the downcast form and `type_of` as the exact `TypeId` comparison.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

use super::combinators::Predicate;

/// Predicate that checks a type-erased value's exact runtime type.
pub struct TypeOf<U: ?Sized> {
    _marker: PhantomData<fn() -> U>,
}

impl<U: ?Sized> Clone for TypeOf<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: ?Sized> Copy for TypeOf<U> {}

impl<U: ?Sized> fmt::Debug for TypeOf<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeOf")
            .field("type", &type_name::<U>())
            .finish()
    }
}

impl<'a, U: Any> Predicate<&'a dyn Any> for TypeOf<U> {
    #[inline]
    fn test(&self, value: &&'a dyn Any) -> bool {
        (**value).type_id() == TypeId::of::<U>()
    }

    fn phrase(&self) -> String {
        format!("be of type {}", type_name::<U>())
    }
}

impl<U: Any> Predicate<Box<dyn Any>> for TypeOf<U> {
    #[inline]
    fn test(&self, value: &Box<dyn Any>) -> bool {
        (**value).type_id() == TypeId::of::<U>()
    }

    fn phrase(&self) -> String {
        format!("be of type {}", type_name::<U>())
    }
}

/// Create a predicate that checks for the exact runtime type `U`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
/// use std::any::Any;
///
/// let value: Box<dyn Any> = Box::new("text".to_string());
/// assert!(type_of::<String>().test(&value));
/// assert!(!type_of::<i32>().test(&value));
/// ```
pub fn type_of<U: Any>() -> TypeOf<U> {
    TypeOf {
        _marker: PhantomData,
    }
}

/// Predicate that checks whether a type-erased value downcasts to `U`.
pub struct SubTypeOf<U: ?Sized> {
    _marker: PhantomData<fn() -> U>,
}

impl<U: ?Sized> Clone for SubTypeOf<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: ?Sized> Copy for SubTypeOf<U> {}

impl<U: ?Sized> fmt::Debug for SubTypeOf<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubTypeOf")
            .field("type", &type_name::<U>())
            .finish()
    }
}

impl<'a, U: Any> Predicate<&'a dyn Any> for SubTypeOf<U> {
    #[inline]
    fn test(&self, value: &&'a dyn Any) -> bool {
        (**value).is::<U>()
    }

    fn phrase(&self) -> String {
        format!("be subtype of {}", type_name::<U>())
    }
}

impl<U: Any> Predicate<Box<dyn Any>> for SubTypeOf<U> {
    #[inline]
    fn test(&self, value: &Box<dyn Any>) -> bool {
        let inner: &dyn Any = &**value;
        inner.is::<U>()
    }

    fn phrase(&self) -> String {
        format!("be subtype of {}", type_name::<U>())
    }
}

/// Create a predicate that checks whether a value downcasts to `U`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
/// use std::any::Any;
///
/// let value: Box<dyn Any> = Box::new(42_i32);
/// assert!(sub_type_of::<i32>().test(&value));
/// assert!(!sub_type_of::<String>().test(&value));
/// ```
pub fn sub_type_of<U: Any>() -> SubTypeOf<U> {
    SubTypeOf {
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_of_exact_match() {
        let value: Box<dyn Any> = Box::new(42_i32);
        assert!(type_of::<i32>().test(&value));
        assert!(!type_of::<u32>().test(&value));
    }

    #[test]
    fn test_type_of_on_reference() {
        let n = 42_i32;
        let value: &dyn Any = &n;
        assert!(type_of::<i32>().test(&value));
        assert!(!type_of::<String>().test(&value));
    }

    #[test]
    fn test_sub_type_of() {
        let value: Box<dyn Any> = Box::new("text".to_string());
        assert!(sub_type_of::<String>().test(&value));
        assert!(!sub_type_of::<&str>().test(&value));
    }

    #[test]
    fn test_phrase_embeds_type_name() {
        let p = type_of::<i32>();
        assert_eq!(Predicate::<Box<dyn Any>>::phrase(&p), "be of type i32");
    }
}
