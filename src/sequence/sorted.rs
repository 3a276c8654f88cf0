//! Sorted dynamic sequence.

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Comparator, Natural, ReferenceCounter};

// =============================================================================
// SortedList
// =============================================================================

/// A dynamic sequence whose elements stay sorted under the active comparator.
///
/// Every mutating operation leaves the sequence in non-decreasing order per
/// the held comparator; there is no observable intermediate state in which
/// the invariant is violated. Insertion positions are found by binary search,
/// so a single [`push`](Self::push) costs O(log n) comparisons plus the
/// element shift.
///
/// Equal elements insert after the existing run of equals, so insertion is
/// stable with respect to arrival order.
///
/// # Positional insertion
///
/// [`insert`](Self::insert) deliberately ignores its index argument: the
/// element is always placed at its comparator-determined position. This is a
/// behavioral override of the usual positional-insert contract, carried over
/// intentionally; callers relying on index placement will be surprised, and
/// the behavior is pinned by test.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::SortedList;
///
/// let mut list = SortedList::new();
/// list.push(30);
/// list.push(10);
/// list.push(20);
/// assert_eq!(list.as_slice(), [10, 20, 30]);
///
/// // The index argument is ignored:
/// list.insert(0, 25);
/// assert_eq!(list.as_slice(), [10, 20, 25, 30]);
/// ```
pub struct SortedList<T> {
    elements: Vec<T>,
    comparator: ReferenceCounter<dyn Comparator<T>>,
}

impl<T: Ord + 'static> SortedList<T> {
    /// Creates an empty list ordered by the element type's `Ord`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural::new())
    }
}

impl<T> SortedList<T> {
    /// Creates an empty list ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::sequence::SortedList;
    ///
    /// let mut list = SortedList::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// list.push(1);
    /// list.push(3);
    /// list.push(2);
    /// assert_eq!(list.as_slice(), [3, 2, 1]);
    /// ```
    #[must_use]
    pub fn with_comparator<C>(comparator: C) -> Self
    where
        C: Comparator<T> + 'static,
    {
        Self {
            elements: Vec::new(),
            comparator: ReferenceCounter::new(comparator),
        }
    }

    /// Creates a list from `elements`, sorting them under `comparator`.
    ///
    /// The sort is stable: elements the comparator considers equal keep the
    /// iteration order of the source.
    #[must_use]
    pub fn from_unsorted<C, I>(comparator: C, elements: I) -> Self
    where
        C: Comparator<T> + 'static,
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::with_comparator(comparator);
        list.elements = elements.into_iter().collect();
        list.resort();
        list
    }

    /// Inserts `element` at its sorted position.
    ///
    /// Always succeeds and always returns `true`; the return value exists for
    /// signature symmetry with the unique variants, whose `push` can refuse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::sequence::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// assert!(list.push(2));
    /// assert!(list.push(2));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push(&mut self, element: T) -> bool {
        let position = self.insertion_position(&element);
        self.elements.insert(position, element);
        debug_assert!(self.is_sorted());
        true
    }

    /// Inserts `element` at its sorted position, ignoring `index`.
    ///
    /// See the type-level documentation for why the index is ignored.
    pub fn insert(&mut self, _index: usize, element: T) -> bool {
        self.push(element)
    }

    /// Inserts every element of `elements` in iteration order.
    ///
    /// Returns `true` whenever invoked, consistent with the per-element
    /// `push` contract.
    pub fn extend_from<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self.push(element);
        }
        true
    }

    /// Replaces the active comparator and immediately re-sorts the sequence.
    ///
    /// No stale ordering remains observable afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::sequence::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.extend_from([1, 3, 2]);
    /// assert_eq!(list.as_slice(), [1, 2, 3]);
    ///
    /// list.set_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// assert_eq!(list.as_slice(), [3, 2, 1]);
    /// ```
    pub fn set_comparator<C>(&mut self, comparator: C)
    where
        C: Comparator<T> + 'static,
    {
        self.comparator = ReferenceCounter::new(comparator);
        self.resort();
    }

    /// Removes and returns the element at `index`, or `None` if out of range.
    ///
    /// Removal never re-sorts: a subsequence of a sorted sequence is sorted.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns `true` if an element comparing equal to `element` is present.
    ///
    /// Membership is decided by the active comparator via binary search.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements
            .binary_search_by(|existing| self.comparator.compare(existing, element))
            .is_ok()
    }

    /// Returns the position of the first element comparing equal to
    /// `element`, or `None` if no such element exists.
    #[must_use]
    pub fn position(&self, element: &T) -> Option<usize> {
        let lower = self
            .elements
            .partition_point(|existing| self.comparator.compare(existing, element) == Ordering::Less);
        (lower < self.elements.len()
            && self.comparator.compare(&self.elements[lower], element) == Ordering::Equal)
            .then_some(lower)
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the smallest element under the active comparator.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element under the active comparator.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice, in sorted order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the list, returning the backing vector in sorted order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Upper-bound lookup: equal elements insert after the existing run.
    fn insertion_position(&self, element: &T) -> usize {
        self.elements
            .partition_point(|existing| self.comparator.compare(existing, element) != Ordering::Greater)
    }

    fn resort(&mut self) {
        let comparator = ReferenceCounter::clone(&self.comparator);
        self.elements
            .sort_by(|left, right| comparator.compare(left, right));
    }

    fn is_sorted(&self) -> bool {
        self.elements
            .windows(2)
            .all(|pair| self.comparator.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}

impl<T: Ord + 'static> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SortedList<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.elements).finish()
    }
}

impl<T: Ord + 'static> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(Natural::new(), iter)
    }
}

impl<T> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_from(iter);
    }
}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
