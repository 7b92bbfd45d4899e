//! # ordset
//!
//! An always-sorted, duplicate-free set backed by contiguous storage.
//!
//! ## Overview
//!
//! This library provides [`OrderedSet`], a mutable set container that keeps
//! its elements sorted at all times and rejects duplicates. Membership,
//! insertion, and removal all locate their target with binary search, and the
//! contiguous backing store makes indexed reads and in-order iteration cheap.
//!
//! Compared to `BTreeSet`, an [`OrderedSet`] trades worst-case insertion cost
//! for locality: small sets live entirely inline (no heap allocation), and
//! iteration is a plain slice walk.
//!
//! - **Always sorted**: every observable sequence of elements is strictly
//!   ascending under the element's `Ord`.
//! - **Duplicate-free**: inserting an element that compares equal to one
//!   already present is a silent no-op.
//! - **Order-preserving filter**: [`OrderedSet::filter`] carries qualifying
//!   elements into a new, independent set without re-sorting.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for [`OrderedSet`]
//!
//! ## Example
//!
//! ```rust
//! use ordset::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! set.insert(5);
//! set.insert(1);
//! set.insert(3);
//! assert_eq!(set.as_slice(), &[1, 3, 5]);
//!
//! // Inserting a duplicate is a no-op
//! assert!(!set.insert(3));
//! assert_eq!(set.len(), 3);
//!
//! let filtered = set.filter(|&x| x > 2);
//! assert_eq!(filtered.as_slice(), &[3, 5]);
//! ```
//!
//! [`OrderedSet`]: crate::set::OrderedSet
//! [`OrderedSet::filter`]: crate::set::OrderedSet::filter

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use ordset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;

pub use set::IndexOutOfRange;
pub use set::OrderedSet;
