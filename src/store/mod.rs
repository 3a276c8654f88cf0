//! Rank-indexed key/value storage.
//!
//! [`IndexedStore`] layers "get/remove by position" onto an otherwise
//! unordered string-keyed property map. Position means rank under the active
//! key comparator: the store maintains an auxiliary sorted list of keys in
//! lockstep with every mutation, so the nth key is always retrievable in
//! O(1) once the index is up to date.
//!
//! The store itself defines no serialization format. Loading and saving
//! properties files is a concern of the caller; the store consumes and
//! produces already-parsed key/value pairs.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::store::IndexedStore;
//!
//! let mut store = IndexedStore::new();
//! store.put("B", "2");
//! store.put("C", "3");
//! store.put("A", "1");
//!
//! assert_eq!(store.key_at(0), Some("A"));
//! assert_eq!(store.get_at(0), Some("1"));
//! assert_eq!(store.get_at(3), None);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::compare::{Comparator, ReferenceCounter};

// =============================================================================
// IndexedStore
// =============================================================================

/// A string key/value store with rank access under an injectable comparator.
///
/// Two structures are held in lockstep: the property map itself and a sorted
/// list of its keys. Every key-set-changing operation restores the lockstep
/// before returning, so the index never drifts from the key set.
///
/// The default ordering is lexicographic string comparison of the keys;
/// [`set_comparator`](Self::set_comparator) installs any other
/// [`Comparator<String>`] (reversed or null-lifted compositions included)
/// and re-sorts the index immediately. Keys the comparator ties keep their
/// relative arrival order.
///
/// Rank access ([`key_at`](Self::key_at), [`get_at`](Self::get_at),
/// [`remove_at`](Self::remove_at)) reports an out-of-range index as `None`
/// rather than an error — a deliberately different policy from the erroring
/// range operations in [`sequence::ops`](crate::sequence::ops).
///
/// The store is a single-threaded type. Sharing one instance across threads
/// requires external synchronization.
///
/// # Examples
///
/// ```rust
/// use ordkit::store::IndexedStore;
///
/// let mut store: IndexedStore =
///     [("B", "2"), ("C", "3"), ("A", "1"), ("D", "4")].into_iter().collect();
///
/// assert_eq!(store.get_at(0), Some("1"));
/// assert_eq!(store.get_at(3), Some("4"));
/// assert_eq!(store.get_at(4), None);
///
/// store.remove_key("A");
/// assert_eq!(store.index_of_value("2"), Some(0));
/// ```
pub struct IndexedStore {
    properties: HashMap<String, String>,
    index: Vec<String>,
    comparator: ReferenceCounter<dyn Comparator<String>>,
}

impl IndexedStore {
    /// Creates an empty store with lexicographic key ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(|left: &String, right: &String| left.cmp(right))
    }

    /// Creates an empty store ordered by `comparator`.
    #[must_use]
    pub fn with_comparator<C>(comparator: C) -> Self
    where
        C: Comparator<String> + 'static,
    {
        Self {
            properties: HashMap::new(),
            index: Vec::new(),
            comparator: ReferenceCounter::new(comparator),
        }
    }

    /// Replaces the key comparator and immediately re-sorts the key index.
    ///
    /// The sort is stable: keys the new comparator ties keep their current
    /// relative order.
    pub fn set_comparator<C>(&mut self, comparator: C)
    where
        C: Comparator<String> + 'static,
    {
        self.comparator = ReferenceCounter::new(comparator);
        let comparator = ReferenceCounter::clone(&self.comparator);
        self.index
            .sort_by(|left, right| comparator.compare(left, right));
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Inserts or replaces a property, returning the previous value.
    ///
    /// A fresh key enters the index at its sorted position; replacing the
    /// value of an existing key leaves the index untouched.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let previous = self.properties.insert(key.clone(), value.into());
        if previous.is_none() {
            // Upper-bound lookup so tied keys keep arrival order.
            let comparator = &self.comparator;
            let position = self
                .index
                .partition_point(|existing| comparator.compare(existing, &key) != Ordering::Greater);
            self.index.insert(position, key);
        }
        debug_assert_eq!(self.index.len(), self.properties.len());
        previous
    }

    /// Inserts every pair of `entries` in iteration order.
    pub fn put_all<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.put(key, value);
        }
    }

    /// Removes the property stored under `key`, returning its value.
    pub fn remove_key(&mut self, key: &str) -> Option<String> {
        let removed = self.properties.remove(key);
        if removed.is_some() {
            if let Some(position) = self.index.iter().position(|existing| existing == key) {
                self.index.remove(position);
            }
        }
        debug_assert_eq!(self.index.len(), self.properties.len());
        removed
    }

    /// Removes the first entry (in index order) whose value equals `value`,
    /// returning its key.
    pub fn remove_value(&mut self, value: &str) -> Option<String> {
        let position = self
            .index
            .iter()
            .position(|key| self.properties.get(key).is_some_and(|stored| stored == value))?;
        let key = self.index.remove(position);
        self.properties.remove(&key);
        debug_assert_eq!(self.index.len(), self.properties.len());
        Some(key)
    }

    /// Removes and returns the value whose key holds rank `index`.
    ///
    /// Out-of-range indices return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.index.len() {
            return None;
        }
        let key = self.index.remove(index);
        let removed = self.properties.remove(&key);
        debug_assert_eq!(self.index.len(), self.properties.len());
        removed
    }

    /// Removes every property.
    pub fn clear(&mut self) {
        self.properties.clear();
        self.index.clear();
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns the key holding rank `index`, or `None` if out of range.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.index.get(index).map(String::as_str)
    }

    /// Returns the value whose key holds rank `index`, or `None` if out of
    /// range.
    #[must_use]
    pub fn get_at(&self, index: usize) -> Option<&str> {
        self.key_at(index).and_then(|key| self.get(key))
    }

    /// Returns the rank of `key` in the current index, or `None` if absent.
    #[must_use]
    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.index.iter().position(|existing| existing == key)
    }

    /// Returns the rank of the first entry (in index order) whose value
    /// equals `value`, or `None` if no value matches.
    ///
    /// Linear scan over the key index; ties under the comparator resolve by
    /// arrival order.
    #[must_use]
    pub fn index_of_value(&self, value: &str) -> Option<usize> {
        self.index
            .iter()
            .position(|key| self.properties.get(key).is_some_and(|stored| stored == value))
    }

    /// Returns the number of properties.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the store holds no properties.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns the keys in index (rank) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.iter().map(String::as_str)
    }

    /// Returns `(key, value)` pairs in index (rank) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.index.iter().filter_map(|key| {
            self.properties
                .get(key)
                .map(|value| (key.as_str(), value.as_str()))
        })
    }
}

impl Default for IndexedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IndexedStore {
    fn clone(&self) -> Self {
        Self {
            properties: self.properties.clone(),
            index: self.index.clone(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }
}

impl fmt::Debug for IndexedStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IndexedStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.put_all(iter);
        store
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for IndexedStore {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

// =============================================================================
// Tests
// =============================================================================
