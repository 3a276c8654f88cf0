//! Comparators and comparator decorators.
//!
//! This module provides the [`Comparator`] trait together with a family of
//! decorators that add cross-cutting ordering concerns without altering the
//! wrapped comparator's core logic:
//!
//! - [`Natural`]: Delegates to the element type's [`Ord`] implementation
//! - [`NullSafe`]: Lifts a comparator over `T` to a total order over
//!   `Option<T>`, with a configurable position for absent values
//! - [`Reversed`]: Flips the sign of the wrapped comparator
//! - [`Then`]: Falls through to a second comparator on ties
//! - [`ComparatorChain`]: An immutable list of per-field comparators, each
//!   optionally reversed, evaluated left to right on tie
//!
//! Any closure of shape `Fn(&T, &T) -> Ordering` is itself a comparator, so
//! one-off orderings need no wrapper type.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::compare::{Comparator, Natural, NullOrdering};
//! use std::cmp::Ordering;
//!
//! // Natural ordering over i32
//! let natural = Natural::new();
//! assert_eq!(natural.compare(&1, &2), Ordering::Less);
//!
//! // Reversed, then lifted to Option<i32> with absent values sorting last
//! let comparator = Natural::new().reversed().null_safe(NullOrdering::Last);
//! assert_eq!(comparator.compare(&Some(1), &Some(2)), Ordering::Greater);
//! assert_eq!(comparator.compare(&None, &Some(2)), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod chain;
mod null_safe;
mod reverse;
mod then;

pub use chain::ComparatorChain;
pub use chain::ComparatorChainBuilder;
pub use null_safe::NullOrdering;
pub use null_safe::NullSafe;
pub use reverse::Reversed;
pub use then::Then;

// =============================================================================
// Comparator
// =============================================================================

/// An ordering over values of type `T`, reified as a value.
///
/// Unlike a bare closure, a `Comparator` can be stored, shared, and decorated.
/// The decorator methods consume `self` and return a new comparator, so
/// compositions read left to right:
///
/// ```rust
/// use ordkit::compare::{Comparator, Natural, NullOrdering};
/// use std::cmp::Ordering;
///
/// let by_length = |a: &String, b: &String| a.len().cmp(&b.len());
/// let comparator = by_length.reversed().null_safe(NullOrdering::First);
///
/// let short = Some("ab".to_string());
/// let long = Some("abcd".to_string());
/// assert_eq!(comparator.compare(&long, &short), Ordering::Less);
/// assert_eq!(comparator.compare(&None, &short), Ordering::Less);
/// ```
///
/// # Laws
///
/// Implementations are expected to define a total order:
///
/// - **Reflexivity**: `compare(x, x) == Equal`
/// - **Antisymmetry**: `compare(x, y).reverse() == compare(y, x)`
/// - **Transitivity**: `x <= y` and `y <= z` imply `x <= z`
///
/// The decorators in this module preserve these laws whenever the wrapped
/// comparator satisfies them.
pub trait Comparator<T> {
    /// Compares two values, returning their relative ordering.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns a comparator with the opposite ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::compare::{Comparator, Natural};
    /// use std::cmp::Ordering;
    ///
    /// let descending = Natural::new().reversed();
    /// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
    /// ```
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed::new(self)
    }

    /// Returns a comparator that breaks ties using `next`.
    ///
    /// The resulting comparator evaluates `self` first and falls through to
    /// `next` only when `self` reports [`Ordering::Equal`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::compare::Comparator;
    /// use std::cmp::Ordering;
    ///
    /// let by_first = |a: &(i32, i32), b: &(i32, i32)| a.0.cmp(&b.0);
    /// let by_second = |a: &(i32, i32), b: &(i32, i32)| a.1.cmp(&b.1);
    /// let comparator = by_first.then_with(by_second);
    ///
    /// assert_eq!(comparator.compare(&(1, 2), &(1, 3)), Ordering::Less);
    /// ```
    fn then_with<C>(self, next: C) -> Then<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        Then::new(self, next)
    }

    /// Lifts this comparator over `T` to a total order over `Option<T>`.
    ///
    /// `null_ordering` chooses where `None` sorts relative to present values:
    /// [`NullOrdering::Last`] places absent values at the end of an ascending
    /// sort, [`NullOrdering::First`] at the beginning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::compare::{Comparator, Natural, NullOrdering};
    /// use std::cmp::Ordering;
    ///
    /// let comparator = Natural::new().null_safe(NullOrdering::Last);
    /// assert_eq!(comparator.compare(&Some(1), &None), Ordering::Less);
    /// assert_eq!(comparator.compare(&None, &None), Ordering::Equal);
    /// ```
    fn null_safe(self, null_ordering: NullOrdering) -> NullSafe<Self>
    where
        Self: Sized,
    {
        NullSafe::new(self, null_ordering)
    }
}

/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

// =============================================================================
// Natural
// =============================================================================

/// A comparator delegating to the element type's [`Ord`] implementation.
///
/// This is a zero-sized type; constructing it costs nothing.
///
/// # Examples
///
/// ```rust
/// use ordkit::compare::{Comparator, Natural};
/// use std::cmp::Ordering;
///
/// let natural: Natural<String> = Natural::new();
/// let left = "apple".to_string();
/// let right = "banana".to_string();
/// assert_eq!(natural.compare(&left, &right), Ordering::Less);
/// ```
pub struct Natural<T> {
    _marker: PhantomData<fn(&T)>,
}

impl<T> Natural<T> {
    /// Creates a natural-order comparator.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Natural<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Natural<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Natural<T> {}

impl<T> std::fmt::Debug for Natural<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Natural")
    }
}

impl<T: Ord> Comparator<T> for Natural<T> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

// =============================================================================
// Tests
// =============================================================================
