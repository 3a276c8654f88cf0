//! Unit tests for combination generation.

#![cfg(feature = "combinatorics")]

use ordkit::combinatorics::{binomial, combinations};
use rstest::rstest;
use std::collections::BTreeSet;

/// Outer collection viewed as a set of sets, ignoring traversal order.
fn as_set_of_sets(subsets: &[Vec<i32>]) -> BTreeSet<BTreeSet<i32>> {
    subsets
        .iter()
        .map(|subset| subset.iter().copied().collect())
        .collect()
}

#[rstest]
fn test_three_of_four_yields_the_documented_subsets() {
    let subsets = combinations(&[1, 2, 3, 4], 3);

    let expected: BTreeSet<BTreeSet<i32>> = [
        BTreeSet::from([1, 2, 3]),
        BTreeSet::from([1, 2, 4]),
        BTreeSet::from([1, 3, 4]),
        BTreeSet::from([2, 3, 4]),
    ]
    .into_iter()
    .collect();

    assert_eq!(as_set_of_sets(&subsets), expected);
}

#[rstest]
fn test_subset_internal_order_is_the_traversal_order() {
    // The pivot is appended after the recursive tail, so elements appear in
    // reverse source order. This order is load-bearing for callers.
    let subsets = combinations(&[1, 2, 3, 4], 3);
    assert_eq!(
        subsets,
        vec![vec![3, 2, 1], vec![4, 2, 1], vec![4, 3, 1], vec![4, 3, 2]],
    );
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(1, 1)]
#[case(5, 2)]
#[case(6, 6)]
#[case(8, 3)]
fn test_subset_count_matches_binomial(#[case] n: usize, #[case] k: usize) {
    let source: Vec<i32> = (0..n).map(|i| i32::try_from(i).unwrap()).collect();
    let subsets = combinations(&source, k);
    assert_eq!(subsets.len() as u128, binomial(n as u64, k as u64));
    assert!(subsets.iter().all(|subset| subset.len() == k));
}

#[rstest]
fn test_size_zero_yields_one_empty_subset() {
    assert_eq!(combinations(&[1, 2, 3], 0), vec![Vec::<i32>::new()]);
    assert_eq!(combinations::<i32>(&[], 0), vec![Vec::<i32>::new()]);
}

#[rstest]
fn test_oversized_request_yields_nothing() {
    assert!(combinations(&[1, 2, 3], 4).is_empty());
    assert!(combinations::<i32>(&[], 1).is_empty());
}

#[rstest]
fn test_no_subset_repeats_a_position() {
    // Positions are distinct even when values collide.
    let subsets = combinations(&["x", "x", "y"], 2);
    assert_eq!(subsets.len(), 3);
    assert!(subsets.iter().all(|subset| subset.len() == 2));
}
