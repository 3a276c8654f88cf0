//! Unit tests for the comparator decorators.
//!
//! These tests exercise each decorator in isolation and then the composed
//! forms a caller would actually build: per-field chains with mixed
//! directions and null-lifted links.

#![cfg(feature = "compare")]

use ordkit::compare::{Comparator, ComparatorChain, Natural, NullOrdering, NullSafe, Reversed};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: Option<u32>,
}

fn person(name: &str, age: Option<u32>) -> Person {
    Person {
        name: name.to_string(),
        age,
    }
}

#[test]
fn test_null_safe_nulls_last_sorts_absent_to_the_end() {
    let comparator = NullSafe::new(Natural::new(), NullOrdering::Last);
    let mut values = vec![Some(3), None, Some(1), None, Some(2)];
    values.sort_by(|left, right| comparator.compare(left, right));
    assert_eq!(values, [Some(1), Some(2), Some(3), None, None]);
}

#[test]
fn test_null_safe_nulls_first_sorts_absent_to_the_front() {
    let comparator = NullSafe::new(Natural::new(), NullOrdering::First);
    let mut values = vec![Some(3), None, Some(1)];
    values.sort_by(|left, right| comparator.compare(left, right));
    assert_eq!(values, [None, Some(1), Some(3)]);
}

#[test]
fn test_null_safe_over_reversed_base() {
    // Reversal applies to present values only; the null position is
    // governed solely by the NullOrdering flag.
    let comparator = NullSafe::new(Reversed::new(Natural::new()), NullOrdering::Last);
    let mut values = vec![Some(1), None, Some(3), Some(2)];
    values.sort_by(|left, right| comparator.compare(left, right));
    assert_eq!(values, [Some(3), Some(2), Some(1), None]);
}

#[test]
fn test_decorators_compose_through_trait_methods() {
    let comparator = Natural::new().reversed().null_safe(NullOrdering::First);
    assert_eq!(comparator.compare(&None, &Some(9)), Ordering::Less);
    assert_eq!(comparator.compare(&Some(1), &Some(2)), Ordering::Greater);
}

#[test]
fn test_then_with_breaks_ties_lexicographically() {
    let by_age = |a: &Person, b: &Person| a.age.cmp(&b.age);
    let by_name = |a: &Person, b: &Person| a.name.cmp(&b.name);
    let comparator = by_age.then_with(by_name);

    let anton = person("Anton", Some(41));
    let berta = person("Berta", Some(41));
    assert_eq!(comparator.compare(&anton, &berta), Ordering::Less);
    assert_eq!(comparator.compare(&anton, &anton), Ordering::Equal);
}

#[test]
fn test_chain_orders_by_fields_with_mixed_directions() {
    // Name ascending, age descending; absent ages sort last within a name.
    let chain: ComparatorChain<Person> = ComparatorChain::builder()
        .add(|a: &Person, b: &Person| a.name.cmp(&b.name))
        .add_reversed(|a: &Person, b: &Person| {
            NullSafe::new(Natural::new(), NullOrdering::First).compare(&a.age, &b.age)
        })
        .build();

    let mut people = vec![
        person("Emil", Some(30)),
        person("Anton", None),
        person("Emil", Some(45)),
        person("Anton", Some(20)),
    ];
    people.sort_by(|left, right| chain.compare(left, right));

    assert_eq!(
        people,
        [
            person("Anton", Some(20)),
            person("Anton", None),
            person("Emil", Some(45)),
            person("Emil", Some(30)),
        ]
    );
}

#[test]
fn test_chain_len_reports_link_count() {
    let chain: ComparatorChain<i32> = ComparatorChain::builder()
        .add(Natural::new())
        .add_reversed(Natural::new())
        .build();
    assert_eq!(chain.len(), 2);
    assert!(!chain.is_empty());
}
