//! Duplicate-rejecting dynamic sequence.

use std::fmt;

// =============================================================================
// UniqueList
// =============================================================================

/// A dynamic sequence in which no element appears twice.
///
/// Membership is decided by `PartialEq` equality with a linear scan, so the
/// type suits modest collections where insertion order matters and a hash or
/// ordering requirement on the element type is unwelcome.
///
/// [`push`](Self::push) and [`insert`](Self::insert) report whether the
/// element was structurally added; pushing a duplicate is a no-op that
/// returns `false`.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::UniqueList;
///
/// let mut list = UniqueList::new();
/// assert!(list.push("a"));
/// assert!(list.push("b"));
/// assert!(!list.push("a"));
/// assert_eq!(list.as_slice(), ["a", "b"]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    elements: Vec<T>,
}

impl<T: PartialEq> UniqueList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Appends `element` unless an equal element is already present.
    ///
    /// Returns `true` if the element was added.
    pub fn push(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Inserts `element` at `index` unless an equal element is already
    /// present.
    ///
    /// Returns `true` if the element was added. Unlike the sorted variants,
    /// the index is honored.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, matching `Vec::insert`.
    pub fn insert(&mut self, index: usize, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.insert(index, element);
        true
    }

    /// Appends every element of `elements` in iteration order, skipping
    /// duplicates.
    ///
    /// Returns `true` if at least one element was structurally added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::sequence::UniqueList;
    ///
    /// let mut list = UniqueList::new();
    /// assert!(list.extend_from([1, 2, 2, 3]));
    /// assert!(!list.extend_from([1, 2]));
    /// assert_eq!(list.as_slice(), [1, 2, 3]);
    /// ```
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

    /// Returns `true` if an equal element is present.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.iter().any(|existing| existing == element)
    }

    /// Returns the position of the element equal to `element`, or `None`.
    #[must_use]
    pub fn position(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|existing| existing == element)
    }

    /// Removes and returns the element at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    /// Removes the element equal to `element`, returning it if present.
    pub fn remove_element(&mut self, element: &T) -> Option<T> {
        self.position(element).map(|index| self.elements.remove(index))
    }
}

impl<T> UniqueList<T> {
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

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the list, returning the backing vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: PartialEq> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.elements).finish()
    }
}

impl<T: PartialEq> FromIterator<T> for UniqueList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend_from(iter);
        list
    }
}

impl<T: PartialEq> Extend<T> for UniqueList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_from(iter);
    }
}

impl<T> IntoIterator for UniqueList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
