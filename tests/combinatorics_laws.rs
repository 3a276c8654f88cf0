//! Property-based tests for combination generation.
//!
//! These tests verify the counting laws that pin the generator's semantics:
//! the number of subsets and the number of appearances of each source
//! element both follow the binomial coefficients.

#![cfg(feature = "combinatorics")]

use ordkit::combinatorics::{binomial, combinations};
use proptest::prelude::*;

/// Small source sequences keep C(n, k) tractable under proptest's case count.
fn source_and_size() -> impl Strategy<Value = (Vec<u8>, usize)> {
    prop::collection::vec(any::<u8>(), 0..10)
        .prop_flat_map(|source| {
            let len = source.len();
            (Just(source), 0..=len)
        })
}

proptest! {
    /// Law: the generator produces exactly C(n, k) subsets.
    #[test]
    fn prop_subset_count_is_binomial((source, size) in source_and_size()) {
        let subsets = combinations(&source, size);
        prop_assert_eq!(
            subsets.len() as u128,
            binomial(source.len() as u64, size as u64)
        );
    }

    /// Law: every subset has exactly the requested size.
    #[test]
    fn prop_every_subset_has_requested_size((source, size) in source_and_size()) {
        let subsets = combinations(&source, size);
        prop_assert!(subsets.iter().all(|subset| subset.len() == size));
    }

    /// Law: each source position appears in exactly C(n-1, k-1) subsets.
    ///
    /// Checked by position rather than value so duplicate values do not
    /// confound the count: each source element is tagged with its index
    /// before generating.
    #[test]
    fn prop_each_position_appears_binomially((source, size) in source_and_size()) {
        prop_assume!(size > 0);
        let tagged: Vec<(usize, u8)> = source.iter().copied().enumerate().collect();
        let subsets = combinations(&tagged, size);

        let expected = binomial(
            source.len() as u64 - 1,
            size as u64 - 1
        );
        for position in 0..source.len() {
            let appearances = subsets
                .iter()
                .filter(|subset| subset.iter().any(|(tag, _)| *tag == position))
                .count();
            prop_assert_eq!(appearances as u128, expected);
        }
    }

    /// Law: no subset repeats a source position.
    #[test]
    fn prop_subsets_never_repeat_a_position((source, size) in source_and_size()) {
        let tagged: Vec<(usize, u8)> = source.iter().copied().enumerate().collect();
        let subsets = combinations(&tagged, size);
        for subset in &subsets {
            let mut tags: Vec<usize> = subset.iter().map(|(tag, _)| *tag).collect();
            tags.sort_unstable();
            tags.dedup();
            prop_assert_eq!(tags.len(), subset.len());
        }
    }
}
