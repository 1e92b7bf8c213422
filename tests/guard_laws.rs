//! Property-based tests for the guard dispatch laws
//!
//! Every predicate/guard pairing obeys the same small algebra:
//! `not` complements the predicate, `must` and `cannot` mirror each other
//! around it, and `when`/`when_not` substitute exactly when the predicate
//! does or does not hold.

use breakwater::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_not_complements_the_predicate(value in any::<i32>(), limit in any::<i32>()) {
        let p = greater_than(limit);
        prop_assert_eq!(not(greater_than(limit)).test(&value), !p.test(&value));
    }

    #[test]
    fn prop_not_complements_collection_predicates(values in prop::collection::vec(any::<u8>(), 0..20)) {
        prop_assert_eq!(
            not(contains_duplicates()).test(&values),
            !contains_duplicates().test(&values)
        );
        prop_assert_eq!(not(empty()).test(&values), !empty().test(&values));
    }

    #[test]
    fn prop_must_mirrors_the_predicate(value in any::<i32>(), limit in any::<i32>()) {
        let holds = greater_than(limit).test(&value);
        let outcome = value.must(greater_than(limit));

        if holds {
            prop_assert_eq!(outcome, Ok(value));
        } else {
            let violated = matches!(outcome, Err(GuardError::InvalidArgument { .. }));
            prop_assert!(violated, "expected InvalidArgument, got {:?}", outcome);
        }
    }

    #[test]
    fn prop_cannot_mirrors_must(value in any::<i32>(), limit in any::<i32>()) {
        let must = value.must(greater_than(limit));
        let cannot = value.cannot(not(greater_than(limit)));

        // must(p) and cannot(not(p)) agree, including on the message.
        prop_assert_eq!(must, cannot);
    }

    #[test]
    fn prop_round_trip_must_then_cannot_not(value in any::<i32>(), limit in any::<i32>()) {
        if greater_than(limit).test(&value) {
            let v = value
                .must(greater_than(limit))
                .and_then(|v| v.cannot(not(greater_than(limit))))
                .unwrap();
            prop_assert_eq!(v, value);
        }
    }

    #[test]
    fn prop_when_substitutes_iff_predicate_holds(
        value in any::<i32>(),
        limit in any::<i32>(),
        default in any::<i32>()
    ) {
        let holds = greater_than(limit).test(&value);

        let expected = if holds { default } else { value };
        prop_assert_eq!(value.when(greater_than(limit), default), expected);

        let expected = if holds { value } else { default };
        prop_assert_eq!(value.when_not(greater_than(limit), default), expected);
    }

    #[test]
    fn prop_or_else_handler_runs_iff_guard_would_fail(value in any::<i32>(), limit in any::<i32>()) {
        let holds = greater_than(limit).test(&value);

        let mut called = false;
        let v = value.must_or_else(greater_than(limit), || called = true).unwrap();
        prop_assert_eq!(v, value);
        prop_assert_eq!(called, !holds);

        let mut called = false;
        let v = value.cannot_or_else(greater_than(limit), || called = true).unwrap();
        prop_assert_eq!(v, value);
        prop_assert_eq!(called, holds);
    }

    #[test]
    fn prop_one_of_agrees_with_membership(set in prop::collection::vec(any::<i8>(), 0..20), value in any::<i8>()) {
        prop_assert_eq!(one_of(set.clone()).test(&value), set.contains(&value));
    }

    #[test]
    fn prop_sequence_equality_ignoring_order_is_sort_equality(
        mut left in prop::collection::vec(any::<u8>(), 0..20),
        shuffle_seed in any::<u64>()
    ) {
        // A rotated copy is equal ignoring order, unequal otherwise
        // (unless the rotation is a fixed point).
        let mut right = left.clone();
        if !right.is_empty() {
            let mid = (shuffle_seed as usize) % right.len();
            right.rotate_left(mid);
        }

        prop_assert!(sequence_equal_to(right.clone()).ignoring_order().test(&left));

        left.sort();
        right.sort();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_null_guards(value in proptest::option::of(any::<i32>())) {
        match value {
            Some(v) => {
                prop_assert_eq!(value.cannot_be_null(), Ok(v));
                prop_assert!(value.must_be_null().is_err());
            }
            None => {
                prop_assert_eq!(value.cannot_be_null(), Err(GuardError::NullArgument));
                prop_assert_eq!(value.must_be_null(), Ok(None));
            }
        }
    }
}

mod scenarios {
    use breakwater::prelude::*;
    use breakwater::{assert_passes, assert_violates};

    #[test]
    fn empty_string_is_empty_but_missing_sequence_is_not() {
        assert!(empty().test(""));
        assert!(!empty().test(&None::<Vec<String>>));
    }

    #[test]
    fn sequence_equality_is_order_sensitive_unless_asked() {
        let p = sequence_equal_to([3, 2, 1]).ignoring_order();
        assert!(p.test(&vec![1, 2, 3]));
        assert!(!sequence_equal_to([3, 2, 1]).test(&vec![1, 2, 3]));
    }

    #[test]
    fn membership_guard() {
        let v = assert_passes!(3.must(one_of([1, 2, 3, 4])));
        assert_eq!(v, 3);
        assert_violates!(
            5.must(one_of([1, 2, 3, 4])),
            "Value must be one of [1, 2, 3, 4]."
        );
    }

    #[test]
    fn must_be_null_or_empty_message() {
        assert_violates!(
            "aaa".to_string().must(null_or_empty()),
            "Value must be null or empty."
        );
    }

    #[test]
    fn long_sequences_truncate_in_messages() {
        let values: Vec<i32> = (1..=11).collect();
        let err = assert_violates!(values.clone().cannot(sequence_equal_to(values)));
        assert_eq!(
            err.to_string(),
            "Value cannot be equal to [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, ...]."
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_directory_paths_unix() {
        assert_passes!("/".must(absolute_directory_path()));
        assert_violates!(
            ".".must(absolute_directory_path()),
            "Value must be an absolute directory path."
        );
    }

    #[cfg(windows)]
    #[test]
    fn absolute_directory_paths_windows() {
        assert_passes!("c:\\".must(absolute_directory_path()));
        assert_violates!(
            ".".must(absolute_directory_path()),
            "Value must be an absolute directory path."
        );
    }

    #[test]
    fn closure_guards_use_the_generic_message() {
        assert_violates!(4.must(|x: &i32| x % 2 == 1), "Expression must be true.");
        assert_violates!(4.cannot(|x: &i32| x % 2 == 0), "Expression cannot be true.");
    }

    #[test]
    fn regex_guard() {
        let re = regex::Regex::new("^[0-9]+$").unwrap();
        assert_passes!("12345".must(matches(re.clone())));
        assert_violates!(
            "12a45".must(matches(re)),
            "Value must match ^[0-9]+$."
        );
    }

    #[test]
    fn type_guards() {
        use std::any::Any;

        let value: Box<dyn Any> = Box::new("text".to_string());
        let value = assert_passes!(value.must(type_of::<String>()));
        assert_violates!(
            value.must(type_of::<i32>()),
            "Value must be of type i32."
        );
    }

    #[test]
    fn duplicate_guard() {
        assert_violates!(
            vec![1, 2, 1].cannot(contains_duplicates()),
            "Value cannot contain duplicates."
        );
        assert_passes!(vec![1, 2, 3].cannot(contains_duplicates()));
    }

    #[test]
    fn null_content_guards() {
        assert_violates!(
            vec![Some(1), None].cannot(contains_null()),
            "Value cannot contain null."
        );
        assert_violates!(
            vec![None::<i32>, None].cannot(contains_only_null()),
            "Value cannot contain only null."
        );
        // Empty contains neither null nor only-null.
        assert_passes!(Vec::<Option<i32>>::new().cannot(contains_null()));
        assert_passes!(Vec::<Option<i32>>::new().cannot(contains_only_null()));
    }

    #[test]
    fn contains_where_guard() {
        assert_passes!(vec![1, 2, 3].must(contains_where(|x: &i32| *x > 2)));
        assert_violates!(
            vec![1, 2].must(contains_where(|x: &i32| *x > 2)),
            "Value must contain specified expression."
        );
    }

    #[test]
    fn between_guard_messages() {
        assert_violates!(
            7.must(between(1, 5).unwrap()),
            "Value must be between 1 and 5."
        );
        assert_violates!(
            3.cannot(between(1, 5).unwrap()),
            "Value cannot be between 1 and 5."
        );
    }

    #[test]
    fn equality_guard_messages() {
        assert_violates!(1.must(equal_to(2)), "Value must be equal to 2.");
        assert_violates!(2.cannot(equal_to(2)), "Value cannot be equal to 2.");
    }
}
