//! Tie-breaking comparator decorator.

use std::cmp::Ordering;

use super::Comparator;

/// A comparator that falls through to a second comparator on ties.
///
/// The first comparator is evaluated unconditionally; the second only when
/// the first reports [`Ordering::Equal`]. Nesting `Then` values yields a
/// lexicographic comparison over as many criteria as needed — for long or
/// heterogeneous chains, [`ComparatorChain`](super::ComparatorChain) offers
/// the same semantics without nested types.
///
/// # Examples
///
/// ```rust
/// use ordkit::compare::{Comparator, Then};
/// use std::cmp::Ordering;
///
/// let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// let alphabetic = |a: &&str, b: &&str| a.cmp(b);
/// let comparator = Then::new(by_length, alphabetic);
///
/// assert_eq!(comparator.compare(&"ab", &"xyz"), Ordering::Less);
/// assert_eq!(comparator.compare(&"ab", &"aa"), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    /// Creates a tie-breaking comparator from `first` and `second`.
    #[inline]
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Comparator<T> for Then<A, B>
where
    A: Comparator<T>,
    B: Comparator<T>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        match self.first.compare(left, right) {
            Ordering::Equal => self.second.compare(left, right),
            ordering => ordering,
        }
    }
}
