//! Sign-reversing comparator decorator.

use std::cmp::Ordering;

use super::Comparator;

/// A comparator that flips the result of the wrapped comparator.
///
/// Reversing twice restores the original ordering.
///
/// # Examples
///
/// ```rust
/// use ordkit::compare::{Comparator, Natural, Reversed};
/// use std::cmp::Ordering;
///
/// let descending = Reversed::new(Natural::new());
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
/// assert_eq!(descending.compare(&2, &2), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reversed<C> {
    base: C,
}

impl<C> Reversed<C> {
    /// Creates a reversing decorator around `base`.
    #[inline]
    #[must_use]
    pub const fn new(base: C) -> Self {
        Self { base }
    }

    /// Unwraps the decorator, returning the original comparator.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> C {
        self.base
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.base.compare(left, right).reverse()
    }
}
