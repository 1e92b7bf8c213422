//! Collection predicates
//!
//! Emptiness, element-wise equality, duplicate detection, null-content
//! checks, and set membership.
//!
//! Several of these carry intentional asymmetries in how they treat a missing
//! (`None`) sequence, inherited from the guard contract this crate
//! implements:
//!
//! - [`empty`]: a `None` sequence is NOT empty, while [`null_or_empty`]
//!   treats `None` as empty.
//! - [`contains_only_null`]: an empty sequence does NOT contain "only null"
//!   (not vacuously true).
//!
//! These are part of the contract; do not "fix" them.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use super::combinators::Predicate;
use crate::format::{format_nullable_sequence, format_sequence};

/// Predicate that checks whether a sequence or string has zero elements.
///
/// A `None` sequence is NOT empty. Use [`null_or_empty`] for the variant
/// that treats `None` as empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct Empty;

macro_rules! impl_empty {
    ($($ty:ty => |$v:ident| $body:expr),+ $(,)?) => {
        $(impl Predicate<$ty> for Empty {
            #[inline]
            fn test(&self, $v: &$ty) -> bool {
                $body
            }

            fn phrase(&self) -> String {
                String::from("be empty")
            }
        })+
    };
}

impl<T> Predicate<Vec<T>> for Empty {
    #[inline]
    fn test(&self, value: &Vec<T>) -> bool {
        value.is_empty()
    }

    fn phrase(&self) -> String {
        String::from("be empty")
    }
}

impl<T> Predicate<[T]> for Empty {
    #[inline]
    fn test(&self, value: &[T]) -> bool {
        value.is_empty()
    }

    fn phrase(&self) -> String {
        String::from("be empty")
    }
}

impl<'a, T> Predicate<&'a [T]> for Empty {
    #[inline]
    fn test(&self, value: &&'a [T]) -> bool {
        value.is_empty()
    }

    fn phrase(&self) -> String {
        String::from("be empty")
    }
}

impl<T> Predicate<Option<Vec<T>>> for Empty {
    // None is NOT empty, deliberately.
    #[inline]
    fn test(&self, value: &Option<Vec<T>>) -> bool {
        match value {
            Some(v) => v.is_empty(),
            None => false,
        }
    }

    fn phrase(&self) -> String {
        String::from("be empty")
    }
}

impl_empty! {
    str => |value| value.is_empty(),
    String => |value| value.is_empty(),
    &str => |value| value.is_empty(),
    Option<String> => |value| value.as_ref().is_some_and(|v| v.is_empty()),
    Option<&str> => |value| value.is_some_and(|v| v.is_empty()),
}

/// Create a predicate that checks for emptiness.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(empty().test(""));
/// assert!(empty().test(&Vec::<i32>::new()));
/// // A missing sequence is NOT empty:
/// assert!(!empty().test(&None::<Vec<i32>>));
/// ```
pub fn empty() -> Empty {
    Empty
}

/// Predicate that checks whether a sequence or string is missing or empty.
///
/// Unlike [`empty`], a `None` sequence IS null-or-empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullOrEmpty;

macro_rules! impl_null_or_empty {
    ($($ty:ty => |$v:ident| $body:expr),+ $(,)?) => {
        $(impl Predicate<$ty> for NullOrEmpty {
            #[inline]
            fn test(&self, $v: &$ty) -> bool {
                $body
            }

            fn phrase(&self) -> String {
                String::from("be null or empty")
            }
        })+
    };
}

impl<T> Predicate<Vec<T>> for NullOrEmpty {
    #[inline]
    fn test(&self, value: &Vec<T>) -> bool {
        value.is_empty()
    }

    fn phrase(&self) -> String {
        String::from("be null or empty")
    }
}

impl<T> Predicate<[T]> for NullOrEmpty {
    #[inline]
    fn test(&self, value: &[T]) -> bool {
        value.is_empty()
    }

    fn phrase(&self) -> String {
        String::from("be null or empty")
    }
}

impl<T> Predicate<Option<Vec<T>>> for NullOrEmpty {
    #[inline]
    fn test(&self, value: &Option<Vec<T>>) -> bool {
        match value {
            Some(v) => v.is_empty(),
            None => true,
        }
    }

    fn phrase(&self) -> String {
        String::from("be null or empty")
    }
}

impl_null_or_empty! {
    str => |value| value.is_empty(),
    String => |value| value.is_empty(),
    &str => |value| value.is_empty(),
    Option<String> => |value| value.as_ref().is_none_or(|v| v.is_empty()),
    Option<&str> => |value| value.is_none_or(|v| v.is_empty()),
}

/// Create a predicate that checks for a missing or empty sequence.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(null_or_empty().test(&None::<Vec<i32>>));
/// assert!(null_or_empty().test(""));
/// assert!(!null_or_empty().test("aaa"));
/// ```
pub fn null_or_empty() -> NullOrEmpty {
    NullOrEmpty
}

/// Predicate for element-wise sequence equality.
///
/// Order-sensitive by default; [`ignoring_order`](SequenceEqualTo::ignoring_order)
/// compares sorted copies instead, which is why elements must be orderable.
///
/// A `None` sequence is unequal to the (always present) comparison sequence.
#[derive(Clone, Debug)]
pub struct SequenceEqualTo<T> {
    other: Vec<T>,
    ignore_order: bool,
    formatted: String,
}

impl<T> SequenceEqualTo<T> {
    /// Compare without regard to element order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use breakwater::predicate::*;
    ///
    /// let p = sequence_equal_to([3, 2, 1]).ignoring_order();
    /// assert!(p.test(&vec![1, 2, 3]));
    /// assert!(!sequence_equal_to([3, 2, 1]).test(&vec![1, 2, 3]));
    /// ```
    pub fn ignoring_order(mut self) -> Self {
        self.ignore_order = true;
        self
    }
}

impl<T: Ord + Clone> SequenceEqualTo<T> {
    fn matches(&self, value: &[T]) -> bool {
        if self.ignore_order {
            let mut left = value.to_vec();
            let mut right = self.other.clone();
            left.sort();
            right.sort();
            left == right
        } else {
            value == &self.other[..]
        }
    }
}

impl<T: Ord + Clone + Send + Sync> Predicate<Vec<T>> for SequenceEqualTo<T> {
    #[inline]
    fn test(&self, value: &Vec<T>) -> bool {
        self.matches(value)
    }

    fn phrase(&self) -> String {
        format!("be equal to {}", self.formatted)
    }
}

impl<T: Ord + Clone + Send + Sync> Predicate<[T]> for SequenceEqualTo<T> {
    #[inline]
    fn test(&self, value: &[T]) -> bool {
        self.matches(value)
    }

    fn phrase(&self) -> String {
        format!("be equal to {}", self.formatted)
    }
}

impl<'a, T: Ord + Clone + Send + Sync> Predicate<&'a [T]> for SequenceEqualTo<T> {
    #[inline]
    fn test(&self, value: &&'a [T]) -> bool {
        self.matches(value)
    }

    fn phrase(&self) -> String {
        format!("be equal to {}", self.formatted)
    }
}

impl<T: Ord + Clone + Send + Sync> Predicate<Option<Vec<T>>> for SequenceEqualTo<T> {
    #[inline]
    fn test(&self, value: &Option<Vec<T>>) -> bool {
        match value {
            Some(v) => self.matches(v),
            None => false,
        }
    }

    fn phrase(&self) -> String {
        format!("be equal to {}", self.formatted)
    }
}

/// Create a predicate comparing a sequence, element by element, with `other`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(sequence_equal_to([1, 2, 3]).test(&vec![1, 2, 3]));
/// assert!(!sequence_equal_to([1, 2, 3]).test(&vec![3, 2, 1]));
/// assert!(sequence_equal_to([1, 2, 3]).ignoring_order().test(&vec![3, 2, 1]));
/// ```
pub fn sequence_equal_to<T, I>(other: I) -> SequenceEqualTo<T>
where
    T: fmt::Display,
    I: IntoIterator<Item = T>,
{
    let other: Vec<T> = other.into_iter().collect();
    let formatted = format_sequence(&other);

    SequenceEqualTo {
        other,
        ignore_order: false,
        formatted,
    }
}

fn has_duplicates<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().any(|item| !seen.insert(item))
}

/// Predicate that checks whether a sequence contains a repeated value.
///
/// A `None` sequence contains no duplicates.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContainsDuplicates;

impl<T: Eq + Hash> Predicate<Vec<T>> for ContainsDuplicates {
    #[inline]
    fn test(&self, value: &Vec<T>) -> bool {
        has_duplicates(value)
    }

    fn phrase(&self) -> String {
        String::from("contain duplicates")
    }
}

impl<T: Eq + Hash> Predicate<[T]> for ContainsDuplicates {
    #[inline]
    fn test(&self, value: &[T]) -> bool {
        has_duplicates(value)
    }

    fn phrase(&self) -> String {
        String::from("contain duplicates")
    }
}

impl<'a, T: Eq + Hash> Predicate<&'a [T]> for ContainsDuplicates {
    #[inline]
    fn test(&self, value: &&'a [T]) -> bool {
        has_duplicates(value)
    }

    fn phrase(&self) -> String {
        String::from("contain duplicates")
    }
}

impl<T: Eq + Hash> Predicate<Option<Vec<T>>> for ContainsDuplicates {
    #[inline]
    fn test(&self, value: &Option<Vec<T>>) -> bool {
        value.as_ref().is_some_and(|v| has_duplicates(v))
    }

    fn phrase(&self) -> String {
        String::from("contain duplicates")
    }
}

/// Create a predicate that checks for duplicate elements.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(contains_duplicates().test(&vec![1, 2, 1]));
/// assert!(!contains_duplicates().test(&vec![1, 2, 3]));
/// assert!(!contains_duplicates().test(&None::<Vec<i32>>));
/// ```
pub fn contains_duplicates() -> ContainsDuplicates {
    ContainsDuplicates
}

/// Predicate that checks whether a sequence of optional values contains a
/// `None`.
///
/// A `None` sequence reports false.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContainsNull;

impl<T> Predicate<Vec<Option<T>>> for ContainsNull {
    #[inline]
    fn test(&self, value: &Vec<Option<T>>) -> bool {
        value.iter().any(Option::is_none)
    }

    fn phrase(&self) -> String {
        String::from("contain null")
    }
}

impl<T> Predicate<[Option<T>]> for ContainsNull {
    #[inline]
    fn test(&self, value: &[Option<T>]) -> bool {
        value.iter().any(Option::is_none)
    }

    fn phrase(&self) -> String {
        String::from("contain null")
    }
}

impl<'a, T> Predicate<&'a [Option<T>]> for ContainsNull {
    #[inline]
    fn test(&self, value: &&'a [Option<T>]) -> bool {
        value.iter().any(Option::is_none)
    }

    fn phrase(&self) -> String {
        String::from("contain null")
    }
}

impl<T> Predicate<Option<Vec<Option<T>>>> for ContainsNull {
    #[inline]
    fn test(&self, value: &Option<Vec<Option<T>>>) -> bool {
        value
            .as_ref()
            .is_some_and(|v| v.iter().any(Option::is_none))
    }

    fn phrase(&self) -> String {
        String::from("contain null")
    }
}

/// Create a predicate that checks for a `None` element.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(contains_null().test(&vec![Some(1), None]));
/// assert!(!contains_null().test(&vec![Some(1), Some(2)]));
/// assert!(!contains_null().test(&None::<Vec<Option<i32>>>));
/// ```
pub fn contains_null() -> ContainsNull {
    ContainsNull
}

fn only_null<T>(items: &[Option<T>]) -> bool {
    // An empty sequence does NOT contain "only null" - not vacuously true.
    !items.is_empty() && items.iter().all(Option::is_none)
}

/// Predicate that checks whether a sequence of optional values consists
/// entirely of `None` elements.
///
/// Both a `None` sequence and an empty sequence report false.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContainsOnlyNull;

impl<T> Predicate<Vec<Option<T>>> for ContainsOnlyNull {
    #[inline]
    fn test(&self, value: &Vec<Option<T>>) -> bool {
        only_null(value)
    }

    fn phrase(&self) -> String {
        String::from("contain only null")
    }
}

impl<T> Predicate<[Option<T>]> for ContainsOnlyNull {
    #[inline]
    fn test(&self, value: &[Option<T>]) -> bool {
        only_null(value)
    }

    fn phrase(&self) -> String {
        String::from("contain only null")
    }
}

impl<'a, T> Predicate<&'a [Option<T>]> for ContainsOnlyNull {
    #[inline]
    fn test(&self, value: &&'a [Option<T>]) -> bool {
        only_null(value)
    }

    fn phrase(&self) -> String {
        String::from("contain only null")
    }
}

impl<T> Predicate<Option<Vec<Option<T>>>> for ContainsOnlyNull {
    #[inline]
    fn test(&self, value: &Option<Vec<Option<T>>>) -> bool {
        value.as_ref().is_some_and(|v| only_null(v))
    }

    fn phrase(&self) -> String {
        String::from("contain only null")
    }
}

/// Create a predicate that checks whether every element is `None`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(contains_only_null().test(&vec![None::<i32>, None]));
/// assert!(!contains_only_null().test(&vec![Some(1), None]));
/// // Empty is false, not vacuously true:
/// assert!(!contains_only_null().test(&Vec::<Option<i32>>::new()));
/// ```
pub fn contains_only_null() -> ContainsOnlyNull {
    ContainsOnlyNull
}

/// Predicate for membership in a fixed set.
///
/// A `None` value matches only an explicit `None` member (standard `Option`
/// equality); build such sets with [`one_of_nullable`].
#[derive(Clone, Debug)]
pub struct OneOf<T> {
    set: Vec<T>,
    formatted: String,
}

impl<T: PartialEq + Send + Sync> Predicate<T> for OneOf<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.set.contains(value)
    }

    fn phrase(&self) -> String {
        format!("be one of {}", self.formatted)
    }
}

/// Create a predicate that checks membership in `set`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(one_of([1, 2, 3, 4]).test(&3));
/// assert!(!one_of([1, 2, 3, 4]).test(&5));
/// ```
pub fn one_of<T, I>(set: I) -> OneOf<T>
where
    T: PartialEq + fmt::Display,
    I: IntoIterator<Item = T>,
{
    let set: Vec<T> = set.into_iter().collect();
    let formatted = format_sequence(&set);

    OneOf { set, formatted }
}

/// Create a membership predicate over optional values.
///
/// An explicit `None` member matches a `None` value; `None` renders as
/// `null` in the guard message.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// let p = one_of_nullable([Some(1), None]);
/// assert!(p.test(&None));
/// assert!(p.test(&Some(1)));
/// assert!(!p.test(&Some(2)));
/// ```
pub fn one_of_nullable<T, I>(set: I) -> OneOf<Option<T>>
where
    T: PartialEq + fmt::Display,
    I: IntoIterator<Item = Option<T>>,
{
    let set: Vec<Option<T>> = set.into_iter().collect();
    let formatted = format_nullable_sequence(&set);

    OneOf { set, formatted }
}

/// Predicate that checks whether any element satisfies a selector function.
#[derive(Clone, Copy)]
pub struct ContainsWhere<F>(pub F);

impl<F> fmt::Debug for ContainsWhere<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainsWhere")
            .field("selector", &std::any::type_name::<F>())
            .finish()
    }
}

impl<T, F> Predicate<Vec<T>> for ContainsWhere<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, value: &Vec<T>) -> bool {
        value.iter().any(|item| (self.0)(item))
    }

    fn phrase(&self) -> String {
        String::from("contain specified expression")
    }
}

impl<T, F> Predicate<[T]> for ContainsWhere<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, value: &[T]) -> bool {
        value.iter().any(|item| (self.0)(item))
    }

    fn phrase(&self) -> String {
        String::from("contain specified expression")
    }
}

impl<T, F> Predicate<Option<Vec<T>>> for ContainsWhere<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, value: &Option<Vec<T>>) -> bool {
        value
            .as_ref()
            .is_some_and(|v| v.iter().any(|item| (self.0)(item)))
    }

    fn phrase(&self) -> String {
        String::from("contain specified expression")
    }
}

/// Create a predicate that checks whether any element satisfies `selector`.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// let p = contains_where(|x: &i32| *x > 2);
/// assert!(p.test(&vec![1, 2, 3]));
/// assert!(!p.test(&vec![1, 2]));
/// ```
pub fn contains_where<F>(selector: F) -> ContainsWhere<F> {
    ContainsWhere(selector)
}
