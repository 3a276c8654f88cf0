//! Property-based tests for the comparator decorators.
//!
//! These tests verify that the null-safe decorator defines a total order
//! over `Option<T>` whenever the wrapped comparator defines one over `T`,
//! and that the reversing decorators preserve the same laws.

#![cfg(feature = "compare")]

use ordkit::compare::{Comparator, Natural, NullOrdering, NullSafe, Reversed};
use proptest::prelude::*;
use std::cmp::Ordering;

fn null_safe(null_ordering: NullOrdering) -> impl Comparator<Option<i32>> {
    NullSafe::new(Natural::new(), null_ordering)
}

fn null_ordering_strategy() -> impl Strategy<Value = NullOrdering> {
    prop_oneof![Just(NullOrdering::First), Just(NullOrdering::Last)]
}

proptest! {
    /// Law: reflexivity.
    /// compare(x, x) == Equal
    #[test]
    fn prop_null_safe_reflexive(
        x in proptest::option::of(any::<i32>()),
        null_ordering in null_ordering_strategy()
    ) {
        let comparator = null_safe(null_ordering);
        prop_assert_eq!(comparator.compare(&x, &x), Ordering::Equal);
    }

    /// Law: antisymmetry.
    /// compare(x, y).reverse() == compare(y, x)
    #[test]
    fn prop_null_safe_antisymmetric(
        x in proptest::option::of(any::<i32>()),
        y in proptest::option::of(any::<i32>()),
        null_ordering in null_ordering_strategy()
    ) {
        let comparator = null_safe(null_ordering);
        prop_assert_eq!(
            comparator.compare(&x, &y).reverse(),
            comparator.compare(&y, &x)
        );
    }

    /// Law: transitivity.
    /// x <= y and y <= z imply x <= z
    #[test]
    fn prop_null_safe_transitive(
        x in proptest::option::of(any::<i32>()),
        y in proptest::option::of(any::<i32>()),
        z in proptest::option::of(any::<i32>()),
        null_ordering in null_ordering_strategy()
    ) {
        let comparator = null_safe(null_ordering);
        if comparator.compare(&x, &y) != Ordering::Greater
            && comparator.compare(&y, &z) != Ordering::Greater
        {
            prop_assert_ne!(comparator.compare(&x, &z), Ordering::Greater);
        }
    }

    /// Law: the decorator agrees with the base comparator on present values.
    #[test]
    fn prop_null_safe_delegates_on_present_values(
        x: i32,
        y: i32,
        null_ordering in null_ordering_strategy()
    ) {
        let comparator = null_safe(null_ordering);
        prop_assert_eq!(comparator.compare(&Some(x), &Some(y)), x.cmp(&y));
    }

    /// Law: every absent value compares the same way against every present
    /// value, per the configured null position.
    #[test]
    fn prop_null_safe_null_position_is_uniform(x: i32) {
        let last = null_safe(NullOrdering::Last);
        prop_assert_eq!(last.compare(&None, &Some(x)), Ordering::Greater);
        prop_assert_eq!(last.compare(&Some(x), &None), Ordering::Less);

        let first = null_safe(NullOrdering::First);
        prop_assert_eq!(first.compare(&None, &Some(x)), Ordering::Less);
        prop_assert_eq!(first.compare(&Some(x), &None), Ordering::Greater);
    }

    /// Law: double reversal is the identity.
    #[test]
    fn prop_double_reversal_is_identity(x: i32, y: i32) {
        let base = Natural::new();
        let twice = Reversed::new(Reversed::new(Natural::new()));
        prop_assert_eq!(base.compare(&x, &y), twice.compare(&x, &y));
    }

    /// Law: reversal is antisymmetric against the base.
    #[test]
    fn prop_reversal_flips_sign(x: i32, y: i32) {
        let base = Natural::new();
        let reversed = Reversed::new(Natural::new());
        prop_assert_eq!(base.compare(&x, &y).reverse(), reversed.compare(&x, &y));
    }
}
