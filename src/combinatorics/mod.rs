//! Combination generation.
//!
//! This module enumerates every k-element subset of a source sequence.
//! Elements are distinguished by position, not by value: a source containing
//! duplicate values yields duplicate subsets, one per choice of positions.
//!
//! # Subset order
//!
//! Subsets are produced in the insertion order of the recursive traversal:
//! for each pivot position, all combinations drawn from the suffix strictly
//! after the pivot are generated first, then the pivot's element is appended
//! after each of them. Inside a subset the elements therefore appear in
//! reverse source order. Callers that need source order must reverse each
//! subset themselves; callers that treat subsets as sets are unaffected.
//!
//! # Complexity
//!
//! `combinations(source, size)` materializes `C(n, k)` subsets with no
//! memoization. The cost is inherent to the problem: `C(49, 6)` is roughly
//! fourteen million subsets, and generating them allocates every one.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::combinatorics::combinations;
//!
//! let subsets = combinations(&[1, 2, 3, 4], 3);
//! assert_eq!(subsets.len(), 4);
//! assert_eq!(
//!     subsets,
//!     vec![vec![3, 2, 1], vec![4, 2, 1], vec![4, 3, 1], vec![4, 3, 2]],
//! );
//! ```

// =============================================================================
// combinations
// =============================================================================

/// Returns every `size`-element subset of `source`.
///
/// Each subset is materialized as a `Vec<T>`; see the module documentation
/// for the order of subsets and of elements within a subset.
///
/// # Edge cases
///
/// - `size == 0` returns a list containing exactly one empty subset
/// - `size > source.len()` returns an empty list
///
/// # Examples
///
/// ```rust
/// use ordkit::combinatorics::combinations;
///
/// let empty: Vec<Vec<i32>> = combinations(&[], 2);
/// assert!(empty.is_empty());
///
/// let trivial = combinations(&[1, 2, 3], 0);
/// assert_eq!(trivial, vec![Vec::<i32>::new()]);
///
/// let pairs = combinations(&['a', 'b', 'c'], 2);
/// assert_eq!(pairs.len(), 3);
/// ```
#[must_use]
pub fn combinations<T: Clone>(source: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return vec![Vec::new()];
    }
    if size > source.len() {
        return Vec::new();
    }

    let expected = binomial(
        u64::try_from(source.len()).unwrap_or(u64::MAX),
        u64::try_from(size).unwrap_or(u64::MAX),
    );
    let capacity = usize::try_from(expected).unwrap_or(0);
    let mut results = Vec::with_capacity(capacity);
    for (pivot, element) in source.iter().enumerate() {
        // Pivots too close to the end produce no suffix combinations and
        // contribute nothing; the recursion handles that case itself.
        for mut combination in combinations(&source[pivot + 1..], size - 1) {
            combination.push(element.clone());
            results.push(combination);
        }
    }
    results
}

// =============================================================================
// binomial
// =============================================================================

/// Returns the binomial coefficient `C(n, k)`, saturating on overflow.
///
/// Used by the generator for capacity pre-sizing and by callers that want to
/// know the result count without materializing it.
///
/// # Examples
///
/// ```rust
/// use ordkit::combinatorics::binomial;
///
/// assert_eq!(binomial(4, 3), 4);
/// assert_eq!(binomial(49, 6), 13_983_816);
/// assert_eq!(binomial(3, 5), 0);
/// assert_eq!(binomial(10, 0), 1);
/// ```
#[must_use]
pub fn binomial(n: u64, k: u64) -> u128 {
    if k > n {
        return 0;
    }
    // C(n, k) == C(n, n - k); iterate over the smaller side.
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // Exact at every step: after dividing by (i + 1) the intermediate
        // value is itself a binomial coefficient.
        result = result.saturating_mul(u128::from(n - i)) / u128::from(i + 1);
    }
    result
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 1)]
    #[case(4, 2, 6)]
    #[case(4, 4, 1)]
    #[case(5, 2, 10)]
    #[case(2, 5, 0)]
    #[case(52, 5, 2_598_960)]
    fn test_binomial_known_values(#[case] n: u64, #[case] k: u64, #[case] expected: u128) {
        assert_eq!(binomial(n, k), expected);
    }

    #[rstest]
    fn test_binomial_symmetry() {
        for n in 0..=20u64 {
            for k in 0..=n {
                assert_eq!(binomial(n, k), binomial(n, n - k));
            }
        }
    }

    #[rstest]
    fn test_combinations_size_zero_yields_single_empty_subset() {
        let subsets = combinations(&[1, 2, 3], 0);
        assert_eq!(subsets, vec![Vec::<i32>::new()]);
    }

    #[rstest]
    fn test_combinations_oversized_request_yields_nothing() {
        let subsets: Vec<Vec<i32>> = combinations(&[1, 2], 3);
        assert!(subsets.is_empty());
    }

    #[rstest]
    fn test_combinations_traversal_order_is_pinned() {
        // The pivot element lands after the recursively obtained suffix
        // combination; downstream callers rely on this exact order.
        let subsets = combinations(&[1, 2, 3, 4], 3);
        assert_eq!(
            subsets,
            vec![vec![3, 2, 1], vec![4, 2, 1], vec![4, 3, 1], vec![4, 3, 2]],
        );
    }

    #[rstest]
    fn test_combinations_duplicate_values_are_distinct_by_position() {
        let subsets = combinations(&[7, 7], 1);
        assert_eq!(subsets, vec![vec![7], vec![7]]);
    }
}
