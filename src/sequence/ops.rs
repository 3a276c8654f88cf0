//! Free-standing sequence operations with explicit error contracts.
//!
//! Two outcome policies coexist in this module, deliberately kept distinct
//! per operation rather than unified:
//!
//! - The trailing-range family ([`remove_last`], [`last_values`]) rejects an
//!   out-of-range request with a [`SequenceError`] and never silently clamps.
//! - The lookup family ([`previous`], [`next`]) reports a boundary or a
//!   missing element as `None`, never as an error.
//!
//! The module also hosts two replacements for patterns that are better
//! expressed explicitly in Rust: [`get_or_insert_with`] instead of
//! self-populating ("auto-vivifying") maps, and [`sort_by_projection`]
//! instead of reflective property-name sorting.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;

// =============================================================================
// SequenceError
// =============================================================================

/// Error type for the range-checked sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An index pointed beyond the end of the sequence.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The sequence length at the time of the call.
        len: usize,
    },
    /// A requested element count was incompatible with the sequence length.
    InvalidLength {
        /// The requested count.
        requested: usize,
        /// The sequence length at the time of the call.
        len: usize,
    },
}

impl Display for SequenceError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(formatter, "index {index} out of bounds for length {len}")
            }
            Self::InvalidLength { requested, len } => {
                write!(formatter, "requested {requested} elements from a sequence of length {len}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

// =============================================================================
// Trailing-range operations
// =============================================================================

/// Removes the last `count` elements from `sequence`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidLength`] when `count >= sequence.len()`.
/// Removing every element (or more) through this operation is rejected
/// rather than truncated; use `Vec::clear` to empty a vector.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::ops::remove_last;
///
/// let mut values = vec![1, 2, 3, 4];
/// remove_last(&mut values, 2).unwrap();
/// assert_eq!(values, [1, 2]);
///
/// assert!(remove_last(&mut values, 2).is_err());
/// assert_eq!(values, [1, 2]);
/// ```
pub fn remove_last<T>(sequence: &mut Vec<T>, count: usize) -> Result<(), SequenceError> {
    if count >= sequence.len() {
        return Err(SequenceError::InvalidLength {
            requested: count,
            len: sequence.len(),
        });
    }
    sequence.truncate(sequence.len() - count);
    Ok(())
}

/// Returns the last `count` elements of `sequence` as a sub-slice.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidLength`] when `count > sequence.len()`;
/// the start index of the requested range would lie beyond the sequence.
/// Requesting exactly `sequence.len()` elements is allowed.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::ops::last_values;
///
/// let values = [1, 2, 3, 4];
/// assert_eq!(last_values(&values, 2).unwrap(), [3, 4]);
/// assert_eq!(last_values(&values, 4).unwrap(), [1, 2, 3, 4]);
/// assert!(last_values(&values, 5).is_err());
/// ```
pub fn last_values<T>(sequence: &[T], count: usize) -> Result<&[T], SequenceError> {
    if count > sequence.len() {
        return Err(SequenceError::InvalidLength {
            requested: count,
            len: sequence.len(),
        });
    }
    Ok(&sequence[sequence.len() - count..])
}

// =============================================================================
// Neighbor lookup
// =============================================================================

/// Returns the element preceding the first occurrence of `element`.
///
/// Returns `None` when `element` is absent or occurs first.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::ops::previous;
///
/// let values = ["a", "b", "c"];
/// assert_eq!(previous(&values, &"b"), Some(&"a"));
/// assert_eq!(previous(&values, &"a"), None);
/// assert_eq!(previous(&values, &"x"), None);
/// ```
#[must_use]
pub fn previous<'a, T: PartialEq>(sequence: &'a [T], element: &T) -> Option<&'a T> {
    let position = sequence.iter().position(|existing| existing == element)?;
    position.checked_sub(1).map(|index| &sequence[index])
}

/// Returns the element following the first occurrence of `element`.
///
/// Returns `None` when `element` is absent or occurs last.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::ops::next;
///
/// let values = ["a", "b", "c"];
/// assert_eq!(next(&values, &"b"), Some(&"c"));
/// assert_eq!(next(&values, &"c"), None);
/// ```
#[must_use]
pub fn next<'a, T: PartialEq>(sequence: &'a [T], element: &T) -> Option<&'a T> {
    let position = sequence.iter().position(|existing| existing == element)?;
    sequence.get(position + 1)
}

// =============================================================================
// Map population
// =============================================================================

/// Returns a mutable reference to `map[key]`, inserting `factory()` first if
/// the key is absent.
///
/// This is the explicit replacement for self-populating maps: the insertion
/// happens only at this call site, never as an invisible side effect of a
/// read.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::ops::get_or_insert_with;
/// use std::collections::HashMap;
///
/// let mut groups: HashMap<&str, Vec<i32>> = HashMap::new();
/// get_or_insert_with(&mut groups, "even", Vec::new).push(2);
/// get_or_insert_with(&mut groups, "even", Vec::new).push(4);
/// assert_eq!(groups["even"], [2, 4]);
/// ```
pub fn get_or_insert_with<'a, K, V, F>(
    map: &'a mut HashMap<K, V>,
    key: K,
    factory: F,
) -> &'a mut V
where
    K: Eq + Hash,
    F: FnOnce() -> V,
{
    map.entry(key).or_insert_with(factory)
}

// =============================================================================
// Projection sort
// =============================================================================

/// Sorts `sequence` by a key extracted from each element.
///
/// The sort is stable. This is the replacement for sorting by a named
/// property through reflection: the caller supplies the projection as a
/// plain function.
///
/// # Examples
///
/// ```rust
/// use ordkit::sequence::ops::sort_by_projection;
///
/// let mut people = vec![("Emil", 32), ("Anton", 41), ("Berta", 27)];
/// sort_by_projection(&mut people, |person| person.1);
/// assert_eq!(people[0].0, "Berta");
/// ```
pub fn sort_by_projection<T, K, F>(sequence: &mut [T], projection: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sequence.sort_by_key(projection);
}

// =============================================================================
// Tests
// =============================================================================
