//! Lexicographic comparator chains.
//!
//! A [`ComparatorChain`] holds an ordered list of per-criterion comparators,
//! each optionally reversed, and compares two values by evaluating the links
//! left to right until one reports a non-equal result. It is the list-shaped
//! counterpart of nesting [`Then`](super::Then) and
//! [`Reversed`](super::Reversed) decorators: the same semantics, but the set
//! of criteria is assembled at runtime rather than in the type.
//!
//! Chains are built once through [`ComparatorChainBuilder`] and immutable
//! afterwards. Each link records its own `reversed` flag, so ascending and
//! descending criteria mix freely within one chain.
//!
//! Up to four links are stored inline without heap allocation.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::compare::{Comparator, ComparatorChain};
//! use std::cmp::Ordering;
//!
//! // Sort pairs by first component ascending, second descending.
//! let chain: ComparatorChain<(i32, i32)> = ComparatorChain::builder()
//!     .add(|a: &(i32, i32), b: &(i32, i32)| a.0.cmp(&b.0))
//!     .add_reversed(|a: &(i32, i32), b: &(i32, i32)| a.1.cmp(&b.1))
//!     .build();
//!
//! assert_eq!(chain.compare(&(1, 2), &(2, 2)), Ordering::Less);
//! assert_eq!(chain.compare(&(1, 2), &(1, 3)), Ordering::Greater);
//! ```

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::{Comparator, ReferenceCounter};

/// Links stored inline before spilling to the heap.
const INLINE_LINKS: usize = 4;

/// One criterion in a chain: a shared comparator plus its direction.
struct Link<T> {
    comparator: ReferenceCounter<dyn Comparator<T>>,
    reversed: bool,
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self {
            comparator: ReferenceCounter::clone(&self.comparator),
            reversed: self.reversed,
        }
    }
}

// =============================================================================
// ComparatorChain
// =============================================================================

/// An immutable, lexicographic chain of comparators.
///
/// An empty chain compares every pair of values as equal.
///
/// Cloning a chain is cheap: links are reference-counted and shared between
/// clones.
pub struct ComparatorChain<T> {
    links: SmallVec<[Link<T>; INLINE_LINKS]>,
}

impl<T> ComparatorChain<T> {
    /// Returns a builder for assembling a chain.
    #[inline]
    #[must_use]
    pub fn builder() -> ComparatorChainBuilder<T> {
        ComparatorChainBuilder::new()
    }

    /// Returns the number of links in the chain.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the chain has no links.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<T> Clone for ComparatorChain<T> {
    fn clone(&self) -> Self {
        Self {
            links: self.links.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ComparatorChain<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComparatorChain")
            .field("links", &self.links.len())
            .finish()
    }
}

impl<T> Comparator<T> for ComparatorChain<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        for link in &self.links {
            let ordering = link.comparator.compare(left, right);
            let ordering = if link.reversed {
                ordering.reverse()
            } else {
                ordering
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

// =============================================================================
// ComparatorChainBuilder
// =============================================================================

/// Builder for [`ComparatorChain`].
///
/// Links are evaluated in the order they were added.
///
/// # Examples
///
/// ```rust
/// use ordkit::compare::{Comparator, ComparatorChain, Natural};
/// use std::cmp::Ordering;
///
/// let chain: ComparatorChain<i32> = ComparatorChain::builder()
///     .add(Natural::new())
///     .build();
/// assert_eq!(chain.compare(&1, &2), Ordering::Less);
/// ```
pub struct ComparatorChainBuilder<T> {
    links: SmallVec<[Link<T>; INLINE_LINKS]>,
}

impl<T> ComparatorChainBuilder<T> {
    /// Creates an empty builder.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            links: SmallVec::new(),
        }
    }

    /// Appends an ascending link.
    #[must_use]
    pub fn add<C>(mut self, comparator: C) -> Self
    where
        C: Comparator<T> + 'static,
    {
        self.links.push(Link {
            comparator: ReferenceCounter::new(comparator),
            reversed: false,
        });
        self
    }

    /// Appends a descending link.
    ///
    /// Equivalent to `add(comparator.reversed())`, recorded as a flag on the
    /// link rather than a wrapper type.
    #[must_use]
    pub fn add_reversed<C>(mut self, comparator: C) -> Self
    where
        C: Comparator<T> + 'static,
    {
        self.links.push(Link {
            comparator: ReferenceCounter::new(comparator),
            reversed: true,
        });
        self
    }

    /// Finalizes the chain.
    #[inline]
    #[must_use]
    pub fn build(self) -> ComparatorChain<T> {
        ComparatorChain { links: self.links }
    }
}

impl<T> Default for ComparatorChainBuilder<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
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
    fn test_empty_chain_compares_everything_equal() {
        let chain: ComparatorChain<i32> = ComparatorChain::builder().build();
        assert!(chain.is_empty());
        assert_eq!(chain.compare(&1, &99), Ordering::Equal);
    }

    #[rstest]
    fn test_first_non_equal_link_decides() {
        let chain: ComparatorChain<(i32, i32)> = ComparatorChain::builder()
            .add(|a: &(i32, i32), b: &(i32, i32)| a.0.cmp(&b.0))
            .add(|a: &(i32, i32), b: &(i32, i32)| a.1.cmp(&b.1))
            .build();

        assert_eq!(chain.compare(&(1, 9), &(2, 0)), Ordering::Less);
        assert_eq!(chain.compare(&(1, 2), &(1, 3)), Ordering::Less);
        assert_eq!(chain.compare(&(1, 3), &(1, 3)), Ordering::Equal);
    }

    #[rstest]
    fn test_reversed_link_flips_its_criterion_only() {
        let chain: ComparatorChain<(i32, i32)> = ComparatorChain::builder()
            .add(|a: &(i32, i32), b: &(i32, i32)| a.0.cmp(&b.0))
            .add_reversed(|a: &(i32, i32), b: &(i32, i32)| a.1.cmp(&b.1))
            .build();

        assert_eq!(chain.compare(&(1, 2), &(2, 2)), Ordering::Less);
        assert_eq!(chain.compare(&(1, 2), &(1, 3)), Ordering::Greater);
    }

    #[rstest]
    fn test_cloned_chain_shares_links() {
        let chain: ComparatorChain<i32> = ComparatorChain::builder().add(Natural::new()).build();
        let cloned = chain.clone();
        assert_eq!(cloned.len(), 1);
        assert_eq!(cloned.compare(&1, &2), chain.compare(&1, &2));
    }
}
