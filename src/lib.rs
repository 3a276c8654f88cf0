//! # ordkit
//!
//! Ordering primitives and invariant-preserving collections for Rust.
//!
//! ## Overview
//!
//! This library provides the ordering machinery that the standard library
//! leaves to ad-hoc closures, packaged as reusable, composable values:
//!
//! - **Comparators**: a [`compare::Comparator`] trait with decorators for
//!   null-safety over `Option<T>`, sign reversal, and lexicographic
//!   tie-break chains
//! - **Combination Generation**: enumeration of all k-element subsets of a
//!   sequence
//! - **Invariant-Preserving Sequences**: sorted, unique, and sorted-unique
//!   list types that re-establish their invariant on every mutation
//! - **Rank-Indexed Storage**: a string key/value store whose entries can be
//!   addressed by rank under an injectable comparator
//!
//! ## Feature Flags
//!
//! - `compare`: Comparator trait and decorators
//! - `combinatorics`: Combination generation
//! - `sequence`: Sorted / unique / sorted-unique sequences and sequence ops
//! - `store`: Rank-indexed key/value store
//! - `arc`: Use `Arc` instead of `Rc` for shared comparators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordkit::prelude::*;
//!
//! let mut names = SortedUniqueList::new();
//! for name in ["Emil", "Anton", "Anton", "Emil"] {
//!     names.push(name);
//! }
//! assert_eq!(names.as_slice(), ["Anton", "Emil"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ordkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compare")]
    pub use crate::compare::*;

    #[cfg(feature = "combinatorics")]
    pub use crate::combinatorics::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "store")]
    pub use crate::store::*;
}

#[cfg(feature = "compare")]
pub mod compare;

#[cfg(feature = "combinatorics")]
pub mod combinatorics;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "store")]
pub mod store;
