//! Sorted, duplicate-rejecting dynamic sequence.

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Comparator, Natural, ReferenceCounter};

// =============================================================================
// SortedUniqueList
// =============================================================================

/// A dynamic sequence that is both sorted and free of duplicates.
///
/// Both invariants are re-established on every mutating call: a duplicate
/// [`push`](Self::push) is a no-op returning `false`, and an accepted element
/// lands at its comparator-determined position.
///
/// Duplicate detection uses `PartialEq` equality; placement uses the active
/// comparator. For the usual case of a comparator consistent with equality
/// the two agree, and the list behaves as an insertion-order-independent
/// sorted set with positional access.
///
/// Like [`SortedList`](super::SortedList), the positional
/// [`insert`](Self::insert) ignores its index argument.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::SortedUniqueList;
///
/// let mut names: SortedUniqueList<&str> =
///     ["", "Emil", "Anton", "Anton", "Anton", "Emil", ""].into_iter().collect();
/// names.push("foo");
///
/// assert_eq!(names.len(), 4);
/// assert_eq!(names.as_slice(), ["", "Anton", "Emil", "foo"]);
/// ```
pub struct SortedUniqueList<T> {
    elements: Vec<T>,
    comparator: ReferenceCounter<dyn Comparator<T>>,
}

impl<T: Ord + 'static> SortedUniqueList<T> {
    /// Creates an empty list ordered by the element type's `Ord`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural::new())
    }
}

impl<T: PartialEq> SortedUniqueList<T> {
    /// Creates an empty list ordered by `comparator`.
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

    /// Creates a list from `elements`, dropping duplicates and sorting the
    /// survivors under `comparator`.
    ///
    /// When duplicates occur in the source, the first occurrence wins.
    #[must_use]
    pub fn from_elements<C, I>(comparator: C, elements: I) -> Self
    where
        C: Comparator<T> + 'static,
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::with_comparator(comparator);
        list.extend_from(elements);
        list
    }

    /// Inserts `element` at its sorted position unless an equal element is
    /// already present.
    ///
    /// Returns `true` if the element was added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::sequence::SortedUniqueList;
    ///
    /// let mut list = SortedUniqueList::new();
    /// assert!(list.push(2));
    /// assert!(list.push(1));
    /// assert!(!list.push(2));
    /// assert_eq!(list.as_slice(), [1, 2]);
    /// ```
    pub fn push(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        let position = self.insertion_position(&element);
        self.elements.insert(position, element);
        debug_assert!(self.is_sorted());
        true
    }

    /// Inserts `element` at its sorted position, ignoring `index`, unless an
    /// equal element is already present.
    ///
    /// Returns `true` if the element was added.
    pub fn insert(&mut self, _index: usize, element: T) -> bool {
        self.push(element)
    }

    /// Inserts every element of `elements` in iteration order, skipping
    /// duplicates.
    ///
    /// Returns `true` if at least one element was structurally added.
    pub fn extend_from<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut added = false;
        for element in elements {
            added |= self.push(element);
        }
        added
    }

    /// Replaces the active comparator and immediately re-sorts the sequence.
    pub fn set_comparator<C>(&mut self, comparator: C)
    where
        C: Comparator<T> + 'static,
    {
        self.comparator = ReferenceCounter::new(comparator);
        let comparator = ReferenceCounter::clone(&self.comparator);
        self.elements
            .sort_by(|left, right| comparator.compare(left, right));
    }

    /// Returns `true` if an equal element is present.
    ///
    /// Membership uses `PartialEq` with a linear scan, so it remains correct
    /// even for comparators inconsistent with equality.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.iter().any(|existing| existing == element)
    }

    /// Returns the position of the element equal to `element`, or `None`.
    #[must_use]
    pub fn position(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|existing| existing == element)
    }

    /// Removes the element equal to `element`, returning it if present.
    pub fn remove_element(&mut self, element: &T) -> Option<T> {
        self.position(element).map(|index| self.elements.remove(index))
    }

    /// Upper-bound lookup: elements the comparator ties with insert after.
    fn insertion_position(&self, element: &T) -> usize {
        self.elements
            .partition_point(|existing| self.comparator.compare(existing, element) != Ordering::Greater)
    }

    fn is_sorted(&self) -> bool {
        self.elements
            .windows(2)
            .all(|pair| self.comparator.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}

impl<T> SortedUniqueList<T> {
    /// Removes and returns the element at `index`, or `None` if out of range.
    ///
    /// Removal never re-sorts and cannot introduce duplicates.
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
}

impl<T: Ord + 'static> Default for SortedUniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SortedUniqueList<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedUniqueList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.elements).finish()
    }
}

impl<T: Ord + 'static> FromIterator<T> for SortedUniqueList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(Natural::new(), iter)
    }
}

impl<T: PartialEq> Extend<T> for SortedUniqueList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_from(iter);
    }
}

impl<T> IntoIterator for SortedUniqueList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedUniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_push_sorts_and_deduplicates() {
        let mut list = SortedUniqueList::new();
        assert!(list.push(3));
        assert!(list.push(1));
        assert!(!list.push(3));
        assert!(list.push(2));
        assert_eq!(list.as_slice(), [1, 2, 3]);
    }

    #[rstest]
    fn test_insert_ignores_index() {
        let mut list = SortedUniqueList::new();
        list.extend_from([10, 30]);
        assert!(list.insert(0, 20));
        assert!(!list.insert(0, 20));
        assert_eq!(list.as_slice(), [10, 20, 30]);
    }

    #[rstest]
    fn test_seeded_duplicates_collapse() {
        let mut names: SortedUniqueList<&str> =
            ["", "Emil", "Anton", "Anton", "Anton", "Emil", ""].into_iter().collect();
        assert!(names.push("foo"));
        assert_eq!(names.len(), 4);
        assert_eq!(names.as_slice(), ["", "Anton", "Emil", "foo"]);
    }

    #[rstest]
    fn test_set_comparator_resorts_existing_elements() {
        let mut list = SortedUniqueList::new();
        list.extend_from([2, 1, 3]);
        assert_eq!(list.as_slice(), [1, 2, 3]);

        list.set_comparator(|a: &i32, b: &i32| b.cmp(a));
        assert_eq!(list.as_slice(), [3, 2, 1]);
    }
}
