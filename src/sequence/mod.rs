//! Invariant-preserving sequences and sequence operations.
//!
//! This module provides three decorator lists, each re-establishing a
//! structural invariant on every mutating call:
//!
//! - [`SortedList`]: elements stay in non-decreasing order under the active
//!   comparator
//! - [`UniqueList`]: no element appears twice
//! - [`SortedUniqueList`]: both invariants at once
//!
//! The sorted variants hold their comparator as a shared reference-counted
//! value, so cloning a list shares the ordering; swapping the comparator with
//! `set_comparator` re-sorts the whole sequence immediately.
//!
//! The [`ops`] submodule collects free-standing sequence operations with
//! explicit error contracts: trailing-range extraction and removal, neighbor
//! lookup, map auto-population, and projection-based sorting.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::sequence::SortedList;
//!
//! let mut list = SortedList::new();
//! list.push(3);
//! list.push(1);
//! list.push(2);
//! assert_eq!(list.as_slice(), [1, 2, 3]);
//! ```

pub mod ops;

mod sorted;
mod sorted_unique;
mod unique;

pub use ops::SequenceError;
pub use sorted::SortedList;
pub use sorted_unique::SortedUniqueList;
pub use unique::UniqueList;
