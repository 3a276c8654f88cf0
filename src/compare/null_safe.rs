//! Null-safe comparator decorator.
//!
//! [`NullSafe`] turns a comparator that is only defined for present values
//! into a total order over `Option<T>`: both operands absent compare equal,
//! exactly one absent sorts to a configurable end, and two present values are
//! delegated to the wrapped comparator.

use std::cmp::Ordering;
use std::ptr;

use super::Comparator;

// =============================================================================
// NullOrdering
// =============================================================================

/// Where absent values sort relative to present values.
///
/// Under an ascending sort, [`NullOrdering::First`] places every `None`
/// before all `Some` values and [`NullOrdering::Last`] places them after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    /// `None` compares less than any `Some` value.
    First,
    /// `None` compares greater than any `Some` value.
    Last,
}

// =============================================================================
// NullSafe
// =============================================================================

/// A comparator over `Option<T>` wrapping a comparator over `T`.
///
/// Constructed once and immutable afterwards; intended to be reused across
/// many comparisons. Chains freely with the other decorators, so a per-field
/// comparator can be reversed and null-lifted independently of its neighbors
/// in a [`ComparatorChain`](super::ComparatorChain).
///
/// The decorator never produces an error of its own. If the wrapped
/// comparator panics, the panic propagates.
///
/// # Examples
///
/// ```rust
/// use ordkit::compare::{Comparator, Natural, NullOrdering, NullSafe};
/// use std::cmp::Ordering;
///
/// let nulls_last = NullSafe::new(Natural::new(), NullOrdering::Last);
/// assert_eq!(nulls_last.compare(&Some(1), &Some(2)), Ordering::Less);
/// assert_eq!(nulls_last.compare(&None, &Some(2)), Ordering::Greater);
/// assert_eq!(nulls_last.compare(&Some(1), &None), Ordering::Less);
/// assert_eq!(nulls_last.compare(&None, &None), Ordering::Equal);
///
/// let nulls_first = NullSafe::new(Natural::new(), NullOrdering::First);
/// assert_eq!(nulls_first.compare(&None, &Some(2)), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NullSafe<C> {
    base: C,
    null_ordering: NullOrdering,
}

impl<C> NullSafe<C> {
    /// Creates a null-safe decorator around `base`.
    #[inline]
    #[must_use]
    pub const fn new(base: C, null_ordering: NullOrdering) -> Self {
        Self {
            base,
            null_ordering,
        }
    }

    /// Returns the configured position for absent values.
    #[inline]
    #[must_use]
    pub const fn null_ordering(&self) -> NullOrdering {
        self.null_ordering
    }
}

impl<T, C> Comparator<Option<T>> for NullSafe<C>
where
    C: Comparator<T>,
{
    fn compare(&self, left: &Option<T>, right: &Option<T>) -> Ordering {
        // Identical operands (including both absent) compare equal without
        // consulting the wrapped comparator.
        if ptr::eq(left, right) {
            return Ordering::Equal;
        }
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => match self.null_ordering {
                NullOrdering::First => Ordering::Less,
                NullOrdering::Last => Ordering::Greater,
            },
            (Some(_), None) => match self.null_ordering {
                NullOrdering::First => Ordering::Greater,
                NullOrdering::Last => Ordering::Less,
            },
            (Some(left_value), Some(right_value)) => self.base.compare(left_value, right_value),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;
    use rstest::rstest;

    #[rstest]
    #[case(NullOrdering::First, Ordering::Less)]
    #[case(NullOrdering::Last, Ordering::Greater)]
    fn test_single_absent_operand(
        #[case] null_ordering: NullOrdering,
        #[case] expected: Ordering,
    ) {
        let comparator = NullSafe::new(Natural::new(), null_ordering);
        assert_eq!(comparator.compare(&None, &Some(5)), expected);
        assert_eq!(comparator.compare(&Some(5), &None), expected.reverse());
    }

    #[rstest]
    fn test_identical_operand_compares_equal() {
        let comparator = NullSafe::new(Natural::new(), NullOrdering::Last);
        let value = Some(7);
        assert_eq!(comparator.compare(&value, &value), Ordering::Equal);
        let absent: Option<i32> = None;
        assert_eq!(comparator.compare(&absent, &absent), Ordering::Equal);
    }

    #[rstest]
    fn test_present_operands_delegate_to_base() {
        let comparator = NullSafe::new(Natural::new(), NullOrdering::Last);
        assert_eq!(comparator.compare(&Some(1), &Some(2)), Ordering::Less);
        assert_eq!(comparator.compare(&Some(2), &Some(1)), Ordering::Greater);
        assert_eq!(comparator.compare(&Some(2), &Some(2)), Ordering::Equal);
    }
}
